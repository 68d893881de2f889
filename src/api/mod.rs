pub mod client_handlers;
pub mod handlers;
pub mod history_handlers;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use client_handlers::DatabaseState;
pub use handlers::*;
pub use openapi::*;
pub use responses::*;
pub use routes::create_router;
