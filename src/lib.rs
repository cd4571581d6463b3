pub mod app;
pub mod infra;

// Convenience re-exports (keeps call-sites clean)
pub use app::error::StartupError;
pub use app::startup::StartupSequencer;
pub use infra::config;
