use proc_macro::TokenStream;

mod record;

/// Derive `Field`, `Record`, and `RecordSchema` for a struct with named
/// fields.
///
/// Field attributes:
/// - `#[tag = "json:\"name\" update:\"user\""]` raw tag text
/// - `#[embed]` flatten this field's record into the parent
/// - `#[ident = "DBInstanceId"]` identifier fed to the name resolver
///   (defaults to the Rust field name)
#[proc_macro_derive(Record, attributes(tag, embed, ident))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
