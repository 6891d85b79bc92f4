use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;

pub fn generate(mut input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    add_describe_bounds(&mut input.generics);

    let ident = &input.ident;
    let body = match &input.data {
        syn::Data::Struct(data) => struct_body(ident, &data.fields)?,
        syn::Data::Enum(data) => enum_body(data)?,
        syn::Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Describe cannot be derived for unions",
            ))
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tallymock::Describe for #ident #ty_generics #where_clause {
            fn shape(&self) -> ::tallymock::Shape {
                #body
            }
        }
    })
}

fn add_describe_bounds(generics: &mut syn::Generics) {
    let type_params: Vec<syn::Ident> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let where_clause = generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#ident: ::tallymock::Describe));
    }
}

fn struct_body(ident: &syn::Ident, fields: &syn::Fields) -> syn::Result<proc_macro2::TokenStream> {
    let name = name_literal(ident);
    let mut shapes = vec![];

    for (index, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }

        shapes.push(match &field.ident {
            Some(field_ident) => {
                let field_name = name_literal(field_ident);
                quote! {
                    ::tallymock::Field::named(#field_name, ::tallymock::Describe::shape(&self.#field_ident))
                }
            }
            None => {
                let index = syn::Index::from(index);
                quote! {
                    ::tallymock::Field::positional(::tallymock::Describe::shape(&self.#index))
                }
            }
        });
    }

    Ok(record(&name, &shapes))
}

fn enum_body(data: &syn::DataEnum) -> syn::Result<proc_macro2::TokenStream> {
    let mut arms = vec![];

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let name = name_literal(variant_ident);
        let mut shapes = vec![];

        let arm = match &variant.fields {
            syn::Fields::Named(named) => {
                let mut bindings = vec![];
                for field in &named.named {
                    if is_skipped(field)? {
                        continue;
                    }
                    let Some(field_ident) = field.ident.as_ref() else {
                        continue;
                    };
                    let field_name = name_literal(field_ident);
                    shapes.push(quote! {
                        ::tallymock::Field::named(#field_name, ::tallymock::Describe::shape(#field_ident))
                    });
                    bindings.push(field_ident.clone());
                }

                let record = record(&name, &shapes);
                quote! {
                    Self::#variant_ident { #(#bindings,)* .. } => #record
                }
            }
            syn::Fields::Unnamed(unnamed) => {
                let mut patterns = vec![];
                for (index, field) in unnamed.unnamed.iter().enumerate() {
                    if is_skipped(field)? {
                        patterns.push(quote! { _ });
                        continue;
                    }
                    let binding = format_ident!("__field{}", index);
                    shapes.push(quote! {
                        ::tallymock::Field::positional(::tallymock::Describe::shape(#binding))
                    });
                    patterns.push(quote! { #binding });
                }

                let record = record(&name, &shapes);
                quote! {
                    Self::#variant_ident(#(#patterns),*) => #record
                }
            }
            syn::Fields::Unit => {
                let record = record(&name, &shapes);
                quote! {
                    Self::#variant_ident => #record
                }
            }
        };

        arms.push(arm);
    }

    if arms.is_empty() {
        return Ok(quote! { match *self {} });
    }

    Ok(quote! {
        match self {
            #(#arms,)*
        }
    })
}

fn record(name: &syn::LitStr, shapes: &[proc_macro2::TokenStream]) -> proc_macro2::TokenStream {
    if shapes.is_empty() {
        quote! { ::tallymock::Shape::unit(#name) }
    } else {
        quote! { ::tallymock::Shape::record(#name, [#(#shapes),*]) }
    }
}

fn name_literal(ident: &syn::Ident) -> syn::LitStr {
    syn::LitStr::new(&ident.unraw().to_string(), ident.span())
}

fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skipped = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("describe") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unrecognized describe attribute, expected `skip`"))
            }
        })?;
    }

    Ok(skipped)
}
