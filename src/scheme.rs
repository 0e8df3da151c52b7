//! URL schemes understood by git.

use std::fmt;
use std::str::FromStr;

/// The transport scheme of a git URL.
///
/// Always stored in lower case. SCP-like URLs carry no scheme token and
/// are reported as [`Scheme::Ssh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
    /// SSH, explicit or SCP-like
    Ssh,
    /// The git daemon protocol
    Git,
    /// A repository on the local filesystem
    File,
}

impl Scheme {
    /// Keywords tried by the HTTP dialect. `https` comes first so that the
    /// shorter keyword never claims its prefix.
    pub(crate) const HTTP_KEYWORDS: [Self; 2] = [Self::Https, Self::Http];

    /// Returns the lower-case keyword for this scheme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ssh => "ssh",
            Self::Git => "git",
            Self::File => "file",
        }
    }

    /// Looks up a scheme keyword, ignoring ASCII case.
    ///
    /// ```
    /// use git_remote_url::Scheme;
    ///
    /// assert_eq!(Scheme::from_keyword("HtTpS"), Some(Scheme::Https));
    /// assert_eq!(Scheme::from_keyword("ftp"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Http, Self::Https, Self::Ssh, Self::Git, Self::File]
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(keyword))
    }

    /// Returns true for the `file` scheme.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns true for schemes that address a remote host.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        !self.is_local()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or("unsupported scheme; expected http, https, ssh, git or file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_keywords() {
        assert_eq!("http".parse::<Scheme>().unwrap(), Scheme::Http);
        assert_eq!("https".parse::<Scheme>().unwrap(), Scheme::Https);
        assert_eq!("ssh".parse::<Scheme>().unwrap(), Scheme::Ssh);
        assert_eq!("git".parse::<Scheme>().unwrap(), Scheme::Git);
        assert_eq!("file".parse::<Scheme>().unwrap(), Scheme::File);
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(Scheme::from_keyword("SSH"), Some(Scheme::Ssh));
        assert_eq!(Scheme::from_keyword("GiT"), Some(Scheme::Git));
        assert_eq!(Scheme::from_keyword("FILE"), Some(Scheme::File));
    }

    #[test]
    fn unknown_keyword_fails() {
        assert!("nothing".parse::<Scheme>().is_err());
        assert!("".parse::<Scheme>().is_err());
        assert!("ssh ".parse::<Scheme>().is_err());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn only_file_is_local() {
        assert!(Scheme::File.is_local());
        assert!(Scheme::Ssh.is_remote());
        assert!(Scheme::Http.is_remote());
    }
}
