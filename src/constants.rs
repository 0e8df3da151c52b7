//! Constants for git URL recognition.

/// Separator between an explicit scheme and the rest of the URL.
pub const SCHEME_SEPARATOR: &str = "://";

/// Punctuation allowed in a repository path, besides ASCII alphanumerics.
pub const PATH_PUNCTUATION: &str = "+,/._-~";

/// Punctuation allowed in a user name, besides ASCII alphanumerics.
pub const USER_PUNCTUATION: &str = "_-";
