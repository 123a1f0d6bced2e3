//! Google Slides request bodies for slidemark edit operations.
//!
//! Translates the engine's edit operations into `presentations.batchUpdate`
//! JSON. Sending the requests, creating the target shapes and retrying on
//! failure are left to the caller.

pub mod batch;
pub mod request;

pub use batch::{render_markup, render_markup_with, BatchUpdateRequest};
pub use request::SlidesRequest;
