use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Expr, ExprLit, Fields, Lit, LitStr, Meta};

#[cfg(test)]
mod tests;

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic structs",
        ));
    }

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            return Err(Error::new_spanned(
                &data.fields,
                "Record can only be derived for structs with named fields",
            ));
        }
    } else {
        return Err(Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs with named fields",
        ));
    };

    let mut field_models = Vec::with_capacity(fields.len());
    let mut field_arms = Vec::with_capacity(fields.len());
    let mut field_mut_arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::parse(&field.attrs)?;

        let declared = attrs
            .ident
            .map_or_else(|| field_ident.to_string(), |lit| lit.value());
        let tag = attrs.tag.map(|lit| lit.value()).unwrap_or_default();
        let ty = &field.ty;

        let kind = if attrs.embed {
            quote! {
                ::fieldtag::model::FieldKind::Embedded(
                    <#ty as ::fieldtag::traits::RecordSchema>::MODEL
                )
            }
        } else {
            quote!(::fieldtag::model::FieldKind::Value)
        };

        field_models.push(quote! {
            ::fieldtag::model::FieldModel {
                ident: #declared,
                tag: #tag,
                kind: #kind,
            }
        });
        field_arms.push(quote! {
            #index => Some(&self.#field_ident),
        });
        field_mut_arms.push(quote! {
            #index => Some(&mut self.#field_ident),
        });
    }

    Ok(quote! {
        impl ::fieldtag::traits::Field for #ident {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn as_record(&self) -> Option<&dyn ::fieldtag::traits::Record> {
                Some(self)
            }

            fn as_record_mut(&mut self) -> Option<&mut dyn ::fieldtag::traits::Record> {
                Some(self)
            }
        }

        impl ::fieldtag::traits::Record for #ident {
            fn model(&self) -> &'static ::fieldtag::model::RecordModel {
                <Self as ::fieldtag::traits::RecordSchema>::MODEL
            }

            fn field(&self, index: usize) -> Option<&dyn ::fieldtag::traits::Field> {
                match index {
                    #(#field_arms)*
                    _ => None,
                }
            }

            fn field_mut(&mut self, index: usize) -> Option<&mut dyn ::fieldtag::traits::Field> {
                match index {
                    #(#field_mut_arms)*
                    _ => None,
                }
            }
        }

        impl ::fieldtag::traits::RecordSchema for #ident {
            const MODEL: &'static ::fieldtag::model::RecordModel = &::fieldtag::model::RecordModel {
                path: concat!(module_path!(), "::", stringify!(#ident)),
                fields: &[#(#field_models),*],
            };
        }
    })
}

///
/// FieldAttrs
///

#[derive(Default)]
struct FieldAttrs {
    tag: Option<LitStr>,
    ident: Option<LitStr>,
    embed: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident("tag") {
                out.tag = Some(string_value(attr)?);
            } else if attr.path().is_ident("ident") {
                let lit = string_value(attr)?;
                if lit.value().is_empty() {
                    return Err(Error::new_spanned(lit, "`ident` must not be empty"));
                }
                out.ident = Some(lit);
            } else if attr.path().is_ident("embed") {
                if !matches!(attr.meta, Meta::Path(_)) {
                    return Err(Error::new_spanned(attr, "`embed` takes no arguments"));
                }
                out.embed = true;
            }
        }

        Ok(out)
    }
}

fn string_value(attr: &Attribute) -> Result<LitStr, Error> {
    if let Meta::NameValue(nv) = &attr.meta
        && let Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) = &nv.value
    {
        return Ok(lit.clone());
    }

    Err(Error::new_spanned(
        attr,
        "expected a string literal, e.g. #[tag = \"json:\\\"name\\\"\"]",
    ))
}
