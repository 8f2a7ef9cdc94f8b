pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HtmlDocument, MemorySurface};
pub use crate::config::ShellConfig;
pub use crate::core::{
    app::App,
    render::{RenderJob, Rendered},
    AppState, ConfigProvider, Item, PageSurface,
};
pub use crate::utils::error::{Result, ScaffoldError};
pub use crate::utils::helpers::{capitalize, format_date, parse_date, API_URL};
