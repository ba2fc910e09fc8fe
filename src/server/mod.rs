pub mod config;
mod http_layers;
mod routes;
pub mod server;
pub mod state;
mod voice_ws;

pub use config::ServerConfig;
pub use http_layers::*;
#[allow(unused_imports)] // Used by main.rs
pub use server::{make_app, run_server};
