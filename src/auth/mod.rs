//! Authentication types for the catalog operations library.
//!
//! Session cookies and login flows belong to the host application. This
//! module only carries the authenticated [`Session`] that is injected into
//! the HTTP clients.
//!
//! # Example
//!
//! ```rust
//! use catalog_ops::Session;
//!
//! let session = Session::new("session-1", Some("user-42".to_string()), "token", None);
//! assert!(session.is_active());
//! ```

mod session;

pub use session::Session;
