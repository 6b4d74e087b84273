//! HTTP protocol layer module
//!
//! Content-type lookup and response builders, decoupled from gate logic.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_asset_response, build_direct_response, build_redirect_response,
};
