pub mod app;
pub mod board;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod message;
pub mod models;
pub mod render;
pub mod state;
pub mod ui;

pub use app::router;
pub use board::ActivityBoard;
pub use client::{ActivityApi, HttpActivityApi};
pub use config::BoardConfig;
pub use state::AppState;
