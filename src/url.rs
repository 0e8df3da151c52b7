//! Main git URL type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::constants::SCHEME_SEPARATOR;
use crate::dialect::Dialect;
use crate::error::InvalidUrl;
use crate::grammar::{self, Fields};
use crate::scheme::Scheme;

/// A parsed and normalized git remote URL.
///
/// Scheme and host are lower-cased; user and path are kept verbatim. The
/// value is immutable and can only be obtained by parsing.
///
/// Two URLs are equal when scheme, host, port, user and path are equal.
/// The [`Dialect`] they were written in does not take part.
///
/// # Examples
///
/// ```
/// use git_remote_url::{GitUrl, Scheme};
///
/// let url = GitUrl::parse("git@github.com:a/b.git").unwrap();
/// assert_eq!(url.scheme(), Scheme::Ssh);
/// assert_eq!(url.user(), Some("git"));
/// assert_eq!(url.host(), Some("github.com"));
/// assert_eq!(url.path(), "a/b.git");
/// assert_eq!(url.port(), None);
/// assert_eq!(url.as_str(), "ssh://git@github.com/a/b.git");
///
/// // Scheme and host ignore case
/// let url = GitUrl::parse("SSH://GIT.divio.com:2222/x.git").unwrap();
/// assert_eq!(url.to_string(), "ssh://git.divio.com:2222/x.git");
/// ```
#[derive(Debug, Clone)]
pub struct GitUrl {
    scheme: Scheme,
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    path: String,
    dialect: Dialect,
    /// Canonical string representation
    canonical: String,
}

impl GitUrl {
    /// Parses a git URL from a string.
    ///
    /// The whole input must match one of the supported forms:
    ///
    /// ```text
    /// http[s]://[user@]host[:port]/path
    /// ssh://[user@]host[:port]/path
    /// git://[user@]host[:port]/path
    /// [user@]host:path
    /// file:///path
    /// /path
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if no form matches the entire input, including
    /// when the input is empty or contains whitespace.
    pub fn parse(input: &str) -> Result<Self, InvalidUrl> {
        grammar::recognize(input)
            .map(Self::from_fields)
            .ok_or_else(|| InvalidUrl::new(input))
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the lower-cased host, absent for local paths.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if one was written.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the user, if one was written.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the repository path.
    ///
    /// Local paths keep their leading `/`; remote paths do not include the
    /// slash or colon that separates them from the host.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the form the input was written in.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns true if this URL points at the local filesystem.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.scheme.is_local()
    }

    /// Returns true if the input used the `[user@]host:path` shorthand.
    #[must_use]
    pub fn is_scp_like(&self) -> bool {
        self.dialect == Dialect::ScpLike
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns the canonical string as an owned value.
    ///
    /// The canonical form always spells out the scheme, so SCP-like input
    /// comes back as an `ssh://` URL. It parses back to an equal value.
    ///
    /// ```
    /// use git_remote_url::GitUrl;
    ///
    /// let url = GitUrl::parse("/tmp/test.git").unwrap();
    /// assert_eq!(url.canonical(), "file:///tmp/test.git");
    /// assert_eq!(GitUrl::parse(&url.canonical()).unwrap(), url);
    /// ```
    #[must_use]
    pub fn canonical(&self) -> String {
        self.canonical.clone()
    }

    fn from_fields(fields: Fields) -> Self {
        let Fields {
            scheme,
            host,
            port,
            user,
            path,
            dialect,
        } = fields;
        let canonical = Self::normalize(scheme, host.as_deref(), port, user.as_deref(), &path);

        Self {
            scheme,
            host,
            port,
            user,
            path,
            dialect,
            canonical,
        }
    }

    fn normalize(
        scheme: Scheme,
        host: Option<&str>,
        port: Option<u16>,
        user: Option<&str>,
        path: &str,
    ) -> String {
        let mut result = format!("{scheme}{SCHEME_SEPARATOR}");

        if let Some(user) = user {
            result.push_str(user);
            result.push('@');
        }

        // Local paths are absolute and supply their own slash.
        if let Some(host) = host {
            result.push_str(host);
            if let Some(port) = port {
                result.push(':');
                result.push_str(&port.to_string());
            }
            result.push('/');
        }

        result.push_str(path);
        result
    }
}

impl PartialEq for GitUrl {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.host == other.host
            && self.port == other.port
            && self.user == other.user
            && self.path == other.path
    }
}

impl Eq for GitUrl {}

impl Hash for GitUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.host.hash(state);
        self.port.hash(state);
        self.user.hash(state);
        self.path.hash(state);
    }
}

impl PartialOrd for GitUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GitUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl fmt::Display for GitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for GitUrl {
    type Err = InvalidUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for GitUrl {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<&str> for GitUrl {
    type Error = InvalidUrl;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GitUrl {
    type Error = InvalidUrl;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GitUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GitUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
