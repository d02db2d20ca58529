//! Minimal compile-time dependency injection.
//!
//! Services derive [`Build`] and list their dependencies as fields. A
//! provider (declared with [`provider!`]) owns the leaf values such as
//! configuration structs and connection handles, and every built service is
//! cached so that each type is constructed at most once per provider.

extern crate self as folio_di;

pub use folio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of already built values, keyed by type.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides<T>: Provider {
    fn provide(&mut self) -> T;
}

impl<P: Provider, T: Build<P>> Provides<T> for P {
    fn provide(&mut self) -> T {
        T::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Build)]
    struct Greeter {
        greeting: Greeting,
        #[state]
        calls: std::sync::Arc<()>,
    }

    provider! {
        TestProvider { greeting: Greeting, }
    }

    #[test]
    fn provide_and_cache() {
        let mut provider = TestProvider {
            _state: Default::default(),
            greeting: Greeting("hello"),
        };

        let a: Greeter = provider.provide();
        let b: Greeter = provider.provide();

        assert_eq!(a.greeting, Greeting("hello"));
        assert!(std::sync::Arc::ptr_eq(&a.calls, &b.calls));
    }
}
