//! Upload-paste-download web form around the ggmax conversion pipeline.
//!
//! The registry and template resolver are loaded once at startup and shared
//! read-only by every request.

pub mod error;
pub mod pages;
pub mod server;

pub use error::WebError;
pub use server::{AppState, router, run_server};
