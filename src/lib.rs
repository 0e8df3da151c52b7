//! Parser and normalizer for git remote URLs.
//!
//! This crate recognizes the URL forms git accepts for remotes and turns
//! them into a structured, canonical value. It never touches the network or
//! the filesystem.
//!
//! # Overview
//!
//! Five dialects are supported, tried in this order:
//!
//! ```text
//! http[s]://[user@]host[:port]/path
//! ssh://[user@]host[:port]/path
//! git://[user@]host[:port]/path
//! [user@]host:path                  (SCP-like, implies ssh)
//! file:///path  or  /path
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use git_remote_url::{Dialect, Scheme};
//!
//! let url = git_remote_url::parse("git@github.com:kinkerl/repo.git").unwrap();
//!
//! assert_eq!(url.scheme(), Scheme::Ssh);
//! assert_eq!(url.user(), Some("git"));
//! assert_eq!(url.host(), Some("github.com"));
//! assert_eq!(url.path(), "kinkerl/repo.git");
//! assert_eq!(url.dialect(), Dialect::ScpLike);
//!
//! // The canonical form always names the scheme
//! assert_eq!(url.to_string(), "ssh://git@github.com/kinkerl/repo.git");
//! ```
//!
//! # Normalization
//!
//! | Component | Treatment |
//! |-----------|-----------|
//! | Scheme | any case accepted, stored lower-case |
//! | Host | any case accepted, stored lower-case |
//! | User | verbatim |
//! | Port | `1..=65535`, never written unless present |
//! | Path | verbatim |
//!
//! Parsing is all-or-nothing. Anything that does not match a dialect from
//! its first to its last character, including surrounding whitespace, is an
//! [`InvalidUrl`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`GitUrl`] through its canonical
//!   string.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod dialect;
mod error;
mod grammar;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod scheme;
mod url;

pub use constants::{PATH_PUNCTUATION, SCHEME_SEPARATOR, USER_PUNCTUATION};
pub use dialect::Dialect;
pub use error::InvalidUrl;
pub use scheme::Scheme;
pub use url::GitUrl;

/// Parses a git URL.
///
/// Shorthand for [`GitUrl::parse`].
///
/// # Errors
///
/// Returns `InvalidUrl` if the input is not a git URL in any supported
/// dialect.
pub fn parse(url: &str) -> Result<GitUrl, InvalidUrl> {
    GitUrl::parse(url)
}
