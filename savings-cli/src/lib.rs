pub mod app;
pub mod config;
pub mod csv_loader;
pub mod currency;
pub mod logging;
pub mod session;
pub mod state;
pub mod views;

pub use config::{AppConfig, ConfigError, DisplayConfig};
pub use session::{Session, SessionError};
pub use state::SessionState;
