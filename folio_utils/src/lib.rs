pub mod http;
mod macros;

/// Version of the folio workspace, as reported by `--version` and the http
/// user agent.
pub const fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn join(a: String, b: Option<&str>) -> String {
    ///     a.apply_map(b, |slf, arg| slf + ", " + arg)
    /// }
    /// assert_eq!(join("a".into(), None), "a");
    /// assert_eq!(join("a".into(), Some("b")), "a, b");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}
