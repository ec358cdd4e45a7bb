mod response_schema;
mod schema_extraction;

use proc_macro::TokenStream;

/// Implements `vibe_pack::schema::ResponseSchema` for a named struct.
///
/// The JSON Schema is generated once with schemars and cached in a
/// `OnceLock`. Accepts optional `name = "..."` and `description = "..."`
/// arguments; without them the struct ident and its doc comment are used.
#[proc_macro_attribute]
pub fn response_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    response_schema::response_schema(attr, item)
}
