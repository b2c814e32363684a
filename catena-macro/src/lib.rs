//! Procedural macros used internally by the Catena crate to generate the impls which cannot be
//! written generically: the mapping from `usize` constants to unary type-level numbers, and the
//! conversions between native tuples and chains.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{parse_macro_input, LitInt},
};

/// Parse the single maximum bound argument accepted by every macro in this crate.
fn parse_bound(input: LitInt) -> Result<usize, TokenStream> {
    input
        .base10_parse::<usize>()
        .map_err(|e| e.to_compile_error().into())
}

/// Generate `ToUnary` and `ToConstant` impls for every number from `0` up to and including the
/// given bound.
///
/// Must be invoked inside the `unary` module of the `catena` crate.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = match parse_bound(parse_macro_input!(input as LitInt)) {
        Ok(max) => max,
        Err(error) => return error,
    };

    let mut unary = quote!(crate::unary::Z);
    let mut impls = TokenStream2::new();
    for n in 0..=max {
        let n = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl crate::unary::ToUnary for crate::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl crate::unary::ToConstant for #unary {
                type AsConstant = crate::unary::Number<#n>;
            }
        });
        unary = quote!(crate::unary::S<#unary>);
    }

    impls.into()
}

/// Generate the conversions between native tuples `(T0, T1, ...)` and the equivalent chains
/// `Link<T0, Link<T1, ... End>>`, for every arity from `0` up to and including the given bound.
///
/// Must be invoked inside the `tuple` module of the `catena` crate.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = match parse_bound(parse_macro_input!(input as LitInt)) {
        Ok(max) => max,
        Err(error) => return error,
    };

    let mut impls = TokenStream2::new();
    for arity in 0..=max {
        let params = (0..arity)
            .map(|i| format_ident!("T{}", i))
            .collect::<Vec<_>>();
        let values = (0..arity)
            .map(|i| format_ident!("t{}", i))
            .collect::<Vec<_>>();

        let chain = params.iter().rev().fold(
            quote!(crate::chain::End),
            |tail, param| quote!(crate::chain::Link<#param, #tail>),
        );
        let build = values.iter().rev().fold(
            quote!(crate::chain::End),
            |tail, value| quote!(crate::chain::Link::new(#value, #tail)),
        );
        let pattern = values.iter().rev().fold(
            quote!(crate::chain::End),
            |tail, value| quote!(crate::chain::Link { head: #value, tail: #tail }),
        );

        impls.extend(quote! {
            impl<#(#params),*> crate::tuple::Native for (#(#params,)*) {
                type AsChain = #chain;

                #[allow(clippy::unused_unit)]
                fn into_chain(self) -> Self::AsChain {
                    let (#(#values,)*) = self;
                    #build
                }
            }

            impl<#(#params),*> crate::tuple::Nested for #chain {
                type AsNative = (#(#params,)*);

                #[allow(clippy::unused_unit)]
                fn into_native(self) -> Self::AsNative {
                    let #pattern = self;
                    (#(#values,)*)
                }
            }

            impl<#(#params),*> ::core::convert::From<(#(#params,)*)>
                for crate::tuple::Tuple<#chain>
            {
                fn from(native: (#(#params,)*)) -> Self {
                    crate::tuple::Tuple::new(crate::tuple::Native::into_chain(native))
                }
            }
        });
    }

    impls.into()
}
