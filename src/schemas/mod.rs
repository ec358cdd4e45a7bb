pub mod schema;
pub(crate) mod validation;

pub use schema::{apply_metadata, schemars, ResponseSchema, SchemaHandle};
