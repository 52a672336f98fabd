//! Command implementations for the ncnews CLI

pub mod endpoints;
pub mod serve;

pub use endpoints::run_endpoints;
pub use serve::run_serve;
