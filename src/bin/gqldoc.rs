use clap::Parser;
use gqldoc::{PKG_NAME, PKG_VERSION, cli::Gqldoc, command::output::print_error};

use std::process;

fn main() {
    let app = Gqldoc::parse();
    timber::init(app.log_level);
    tracing::debug!(name = PKG_NAME, version = PKG_VERSION, "starting");
    tracing::trace!(command_structure = ?app);

    let format = app.format();
    let printed = match app.run() {
        Ok(output) => output.print(format),
        Err(error) => {
            tracing::debug!(?error);
            // a closed pipe while reporting the failure doesn't change the exit code
            let _ = print_error(&error, format);
            process::exit(1)
        }
    };

    if let Err(error) = printed {
        tracing::debug!(%error, "could not write output");
        process::exit(1)
    }
}
