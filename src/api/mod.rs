//! API routes module.

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use openapi::ApiDoc;
pub use routes::{build_app, create_router};
