pub mod batch;
pub mod combine;
pub mod handlers;
pub mod models;
pub mod pacing;
pub mod records;
pub mod searcher;
pub mod social;
