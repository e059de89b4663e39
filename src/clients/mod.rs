//! Transport to the dashboard backend.
//!
//! [`HttpClient`] sends one [`HttpRequest`] and returns an [`HttpResponse`]
//! or an [`HttpError`]. [`RestClient`] sits on top with one method per verb
//! and is what the [`resources`](crate::resources) use.
//!
//! Requests are attempted exactly once. There is no timeout, retry or
//! backoff; a failure ends the user action that triggered it.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
