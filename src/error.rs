//! Error type for git URL parsing.

/// The input is not a git URL in any of the supported dialects.
///
/// Parsing is all-or-nothing: this is returned whenever no dialect matches
/// the whole input, and carries the input verbatim.
///
/// # Examples
///
/// ```
/// use git_remote_url::{GitUrl, InvalidUrl};
///
/// let err = GitUrl::parse("nothing://github.com/a/b.git").unwrap_err();
/// assert_eq!(err, InvalidUrl::new("nothing://github.com/a/b.git"));
/// assert_eq!(err.to_string(), "invalid git URL 'nothing://github.com/a/b.git'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid git URL '{input}'")]
pub struct InvalidUrl {
    /// The input that failed to parse
    pub input: String,
}

impl InvalidUrl {
    /// Creates an error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
