use clap::Parser;
use gqldoc_render::{PageBase, RenderOptions, link::DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
pub struct RenderOpts {
    /// Leave out the line with the type's name and description
    #[arg(long = "no-header")]
    no_header: bool,

    /// Leave out the description column of field and enum value tables
    #[arg(long = "no-descriptions")]
    no_descriptions: bool,

    /// URL of the page that documents the schema. Type links point at
    /// `<BASE_URL>/?page=printType:<TYPE>`.
    #[arg(
        long = "base-url",
        value_name = "BASE_URL",
        env = "GQLDOC_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: PageBase,
}

impl RenderOpts {
    pub fn options(&self) -> RenderOptions {
        RenderOptions::builder()
            .show_header(!self.no_header)
            .show_descriptions(!self.no_descriptions)
            .build()
    }
}
