//! ResourceService: generic CRUD plus request validation builders.

mod crud;
mod validation;
pub use crud::ResourceService;
pub use validation::{explicit_null, NewRow, PatchRow};
