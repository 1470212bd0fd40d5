//! REST API Client
//!
//! HTTP contract handling and the item endpoints, organized by concern.

mod http;
mod items;
mod transport;

#[cfg(test)]
pub mod testing;

pub use http::{HttpClient, Transport};
pub use items::ItemsApi;
pub use transport::ReqwestTransport;
