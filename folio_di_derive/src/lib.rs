use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Fields};

/// Derives `folio_di::Build` for a struct whose fields are all buildable.
///
/// Fields annotated with `#[state]` are initialized with
/// [`Default::default()`] instead of being requested from the provider. The
/// first built value is stored in the provider cache and cloned afterwards.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = input.ident;
    let generics = input
        .generics
        .type_params()
        .map(|x| &x.ident)
        .collect::<Vec<_>>();

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Build can only be derived for structs"); }.into();
    };

    let bounds = data
        .fields
        .iter()
        .filter(|f| !is_state(f))
        .map(|Field { ty, .. }| quote! { #ty: ::folio_di::Build<__Provider> })
        .collect::<Vec<_>>();

    let field_expr = |f: &Field| {
        if is_state(f) {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { ::folio_di::Build::build(provider) }
        }
    };

    let build_expr = match &data.fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|f| {
                let ident = &f.ident;
                let expr = field_expr(f);
                quote! { #ident: #expr }
            });
            quote! { Self { #(#fields),* } }
        }
        Fields::Unnamed(fields) => {
            let fields = fields.unnamed.iter().map(field_expr);
            quote! { Self( #(#fields),* ) }
        }
        Fields::Unit => quote! { Self },
    };

    quote! {
        impl<__Provider, #(#generics),*> ::folio_di::Build<__Provider> for #ident<#(#generics),*>
        where
            Self: ::core::clone::Clone + 'static,
            __Provider: ::folio_di::Provider,
            #(#bounds),*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) =
                    ::folio_di::Provider::cache(provider).get::<Self>()
                {
                    return ::core::clone::Clone::clone(cached);
                }

                let value: Self = #build_expr;
                ::folio_di::Provider::cache(provider).insert(::core::clone::Clone::clone(&value));
                value
            }
        }
    }
    .into()
}

fn is_state(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|x| x.path().get_ident().is_some_and(|x| x == "state"))
}
