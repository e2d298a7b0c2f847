use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Lookup failures reported by theme resolution and theme controls.
pub enum ThemeError {
    /// No catalog variant has this id.
    #[error("theme variant `{0}` not found")]
    UnknownVariant(String),
    /// No catalog theme has this id.
    #[error("theme `{0}` not found")]
    UnknownTheme(String),
    /// No palette accent has this id.
    #[error("accent `{0}` not found")]
    UnknownAccent(String),
}
