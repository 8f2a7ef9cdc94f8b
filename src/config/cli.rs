use crate::core::render::RenderJob;
use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "page-scaffold")]
#[command(about = "Render the welcome shell into an HTML page and run the text helpers")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the shell against an HTML document
    Render {
        /// Document containing the container element
        #[arg(long)]
        document: PathBuf,

        /// Where to write the rendered document (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Container element id, overrides the config file
        #[arg(long)]
        container: Option<String>,

        /// TOML file with shell settings
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the UTC calendar date of a timestamp as YYYY-MM-DD
    FormatDate { date: String },

    /// Upper-case the first character of the text
    Capitalize { text: String },
}

impl Command {
    /// The render job for `render`, `None` for the text helpers.
    pub fn render_job(&self) -> Option<RenderJob> {
        match self {
            Command::Render {
                document,
                output,
                container,
                config,
            } => Some(RenderJob {
                document: document.clone(),
                output: output.clone(),
                container: container.clone(),
                config: config.clone(),
            }),
            _ => None,
        }
    }
}
