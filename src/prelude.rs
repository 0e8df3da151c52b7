//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use git_remote_url::prelude::*;
//!
//! let url = GitUrl::parse("https://github.com/a/b.git").unwrap();
//! assert_eq!(url.scheme(), Scheme::Https);
//! ```

pub use crate::{
    // Core types
    Dialect, GitUrl, Scheme,
    // Errors
    InvalidUrl,
    // Constants
    PATH_PUNCTUATION, SCHEME_SEPARATOR, USER_PUNCTUATION,
};
