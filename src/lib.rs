pub mod cli_ui;
pub mod config;
pub mod error;
pub mod probe;

pub use self::config::Config;
pub use self::error::Error;
