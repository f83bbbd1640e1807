use crate::state::AppState;
use axum::Router;

mod dto;
pub mod error;
mod extractors;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
mod password;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo_types::Role;

pub fn router() -> Router<AppState> {
    handlers::account_routes()
}
