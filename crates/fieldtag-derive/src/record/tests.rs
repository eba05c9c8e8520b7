use super::*;

fn expand_str(input: TokenStream) -> String {
    derive_record(input).to_string()
}

#[test]
fn named_struct_expands_to_all_three_impls() {
    let out = expand_str(quote! {
        struct Host {
            #[embed]
            #[tag = "name:\"meta\""]
            meta: Meta,
            #[ident = "HostID"]
            id: u64,
        }
    });

    assert!(out.contains("Field for Host"));
    assert!(out.contains("Record for Host"));
    assert!(out.contains("RecordSchema for Host"));
    assert!(out.contains("\"HostID\""));
    assert!(out.contains("Embedded"));
    assert!(!out.contains("compile_error"));
}

#[test]
fn empty_ident_is_rejected() {
    let out = expand_str(quote! {
        struct Host {
            #[ident = ""]
            id: u64,
        }
    });

    assert!(out.contains("compile_error"));
    assert!(out.contains("`ident` must not be empty"));
}

#[test]
fn unsupported_shapes_are_rejected() {
    for input in [
        quote!(struct Pair(u8, u8);),
        quote!(enum Kind { A }),
        quote!(struct Wrap<T> { inner: T }),
    ] {
        assert!(expand_str(input).contains("compile_error"));
    }
}

#[test]
fn non_string_attribute_is_rejected() {
    let out = expand_str(quote! {
        struct Host {
            #[tag = 5]
            id: u64,
        }
    });

    assert!(out.contains("expected a string literal"));
}
