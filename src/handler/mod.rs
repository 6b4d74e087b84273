//! Request handler module
//!
//! Offers each request to the asset gate, serves resolved assets, and hands
//! everything else to the host fallback.

pub mod assets;
pub mod fallback;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
