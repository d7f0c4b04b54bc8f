//! People search API: heuristic person lookups over single JSON requests and
//! CSV batch uploads.

pub mod config;
pub mod errors;
pub mod routes;
pub mod search;
pub mod state;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
