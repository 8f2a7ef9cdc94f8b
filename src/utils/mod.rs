pub mod error;
pub mod helpers;
pub mod logger;
pub mod validation;
