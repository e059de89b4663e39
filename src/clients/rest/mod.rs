//! REST layer over [`HttpClient`](crate::clients::HttpClient).
//!
//! Paths are relative to the API base URL. `/products/` and `products` name
//! the same route; a path of only slashes is rejected with
//! [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
