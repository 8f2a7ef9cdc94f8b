pub mod app;
pub mod render;

pub use crate::domain::model::{AppState, Item};
pub use crate::domain::ports::{ConfigProvider, PageSurface};
pub use crate::utils::error::Result;
