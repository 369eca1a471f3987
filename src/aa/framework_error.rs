use thiserror::Error;

/// The errors raised while building, mutating or importing an argumentation framework.
///
/// Library functions return [anyhow::Result] values; the typed variant can be recovered with `downcast_ref`.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, FrameworkError};
/// let mut af = AAFramework::<String>::default();
/// af.add_argument("a".to_string()).unwrap();
/// let err = af.add_argument("a".to_string()).unwrap_err();
/// assert_eq!(
///     Some(&FrameworkError::DuplicateArgument("a".to_string())),
///     err.downcast_ref::<FrameworkError>()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    /// An argument with the same label is already defined.
    #[error("argument already defined: {0}")]
    DuplicateArgument(String),
    /// A label or an identifier does not refer to an argument of the framework.
    #[error("no such argument: {0}")]
    UnknownArgument(String),
    /// An input does not follow the documented format.
    #[error("malformed input: {0}")]
    MalformedImport(String),
}
