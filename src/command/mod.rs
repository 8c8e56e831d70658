mod list;
pub mod output;
mod print;

pub use list::List;
pub use print::Print;
pub use output::GqldocOutput;
