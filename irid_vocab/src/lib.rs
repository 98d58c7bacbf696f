/*!
IRIs for the vocabulary terms this crate's node model relies on: the XSD datatypes used for
literal inference (`xsd`) and `rdf:langString` for language-tagged literals (`rdf`).

New vocabularies are declared with the `namespace!` macro, in the same style as the modules in
this crate:

```rust
use irid_vocab::namespace;

namespace! {
    "http://example.com/schema/FooBar#",
    {
        foo, "Foo"
    }
}
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unreachable_pub,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
)]

/// Declares a vocabulary: a base namespace IRI plus a set of terms, each exposed as a function
/// returning the term's fully-qualified `AbsoluteIri` and a second function returning its bare
/// local name.
#[macro_export]
macro_rules! namespace {
    ($namespace:expr, { $($fn_name:ident, $name:expr),* $(,)? }) => {
        #[doc(hidden)]
        const NAMESPACE: &str = $namespace;

        ::lazy_static::lazy_static! {
            #[doc(hidden)]
            static ref NS_CACHE: ::std::collections::HashMap<&'static str, ::irid_iri::AbsoluteIri> = {
                let mut cache = ::std::collections::HashMap::new();
                $(
                    let iri = <::irid_iri::Iri as ::std::str::FromStr>::from_str(
                        &format!("{}{}", NAMESPACE, $name)
                    ).expect("vocabulary term is a well-formed IRI");
                    let iri: ::irid_iri::AbsoluteIri = ::std::convert::TryFrom::try_from(iri)
                        .expect("vocabulary term is absolute");
                    let _ = cache.insert($name, iri);
                )*
                cache
            };
        }

        #[inline(always)]
        #[doc = "Returns the IRI string identifying this namespace."]
        pub fn namespace() -> &'static str {
            NAMESPACE
        }

        $(
            $crate::nsname!($fn_name, $name);
        )*
    };
}

/// Called only by [`namespace!`]: generates the per-term accessor functions.
#[macro_export]
macro_rules! nsname {
    ($fn_name:ident, $name:expr) => {
        ::paste::paste! {
            #[inline(always)]
            #[doc = "Returns the IRI for the vocabulary term `" $name "`."]
            pub fn $fn_name() -> &'static ::irid_iri::AbsoluteIri {
                NS_CACHE.get($name).unwrap()
            }

            #[inline(always)]
            #[doc = "Returns this term's local name, as the string \"" $name "\"."]
            pub fn [<$fn_name _str>]() -> &'static str {
                $name
            }
        }
    };
}

pub mod rdf;
pub mod xsd;

#[cfg(test)]
mod tests {
    #![allow(unreachable_pub)]

    namespace!("heep://schema.example/p#", { foo, "Foo", bar, "Bar" });

    #[test]
    fn expands_namespace() {
        assert_eq!(namespace(), "heep://schema.example/p#");
    }

    #[test]
    fn expands_members() {
        assert_eq!(foo().to_string(), "heep://schema.example/p#Foo");
        assert_eq!(foo_str(), "Foo");
        assert_eq!(bar().to_string(), "heep://schema.example/p#Bar");
        assert_eq!(bar_str(), "Bar");
    }
}
