pub mod asana;
pub mod config;
pub mod constants;
pub mod error;
pub mod github;
pub mod http;
pub mod logging;
pub mod recipe;
pub mod resolve;
pub mod server;
pub mod setup;
pub mod slack;
pub mod user_map;
pub mod webhook;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
