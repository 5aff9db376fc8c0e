pub mod bot;
pub mod config;
pub mod error;
pub mod generator;
pub mod locale;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
