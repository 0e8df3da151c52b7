//! The syntactic forms a git URL can take.

use std::fmt;

/// Which grammar production recognized a URL.
///
/// This records how a [`GitUrl`](crate::GitUrl) was written, not what it
/// means: `git@host:a.git` and `ssh://git@host/a.git` differ in dialect but
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `http[s]://[user@]host[:port]/path`
    Http,
    /// `ssh://[user@]host[:port]/path`
    Ssh,
    /// `git://[user@]host[:port]/path`
    Git,
    /// `[user@]host:path`
    ScpLike,
    /// `file:///path` or `/path`
    Local,
}

impl Dialect {
    /// All dialects, in the order the recognizer tries them.
    pub const ALL: [Self; 5] = [Self::Http, Self::Ssh, Self::Git, Self::ScpLike, Self::Local];

    /// Returns a short name for this dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Ssh => "ssh",
            Self::Git => "git",
            Self::ScpLike => "scp-like",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scp_like_is_tried_after_explicit_schemes() {
        let scp = Dialect::ALL.iter().position(|d| *d == Dialect::ScpLike).unwrap();
        for explicit in [Dialect::Http, Dialect::Ssh, Dialect::Git] {
            let pos = Dialect::ALL.iter().position(|d| *d == explicit).unwrap();
            assert!(pos < scp);
        }
    }

    #[test]
    fn local_is_tried_last() {
        assert_eq!(Dialect::ALL.last(), Some(&Dialect::Local));
    }
}
