pub mod coc;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod html;
pub mod metrics;
pub mod routes;
