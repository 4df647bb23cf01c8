pub mod app;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod formula;
pub mod handlers;
pub mod input;
pub mod models;
pub mod overall;
pub mod state;
pub mod theme;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use state::AppState;
