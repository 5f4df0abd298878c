//! Request extractors shared by the resource handlers.

mod existing;
mod json;

pub use existing::Existing;
pub use json::JsonBody;
