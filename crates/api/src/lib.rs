//! Trackdown API Layer
mod dto;
mod handlers;
mod routes;
mod state;

pub use routes::create_api_routes;
pub use state::AppState;
