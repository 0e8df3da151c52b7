//! Recognizer for the git URL dialects.
//!
//! # Grammar
//!
//! ```text
//! part     = 1*ALNUM
//! label    = part *( "-" part )
//! hostname = label *( "." label )
//! port     = 1*DIGIT
//! user     = 1*( ALNUM / "_" / "-" )
//! path     = 1*( ALNUM / "+" / "," / "/" / "." / "_" / "-" / "~" )
//!
//! http-url = ( "http" / "https" ) "://" [ user "@" ] hostname [ ":" port ] "/" path
//! ssh-url  = "ssh" "://" [ user "@" ] hostname [ ":" port ] "/" path
//! git-url  = "git" "://" [ user "@" ] hostname [ ":" port ] "/" path
//! scp-url  = [ user "@" ] hostname !"://" ":" path
//! local    = "file://" path / "/" path
//! ```
//!
//! Productions are tried in the order above and the first one that spans the
//! whole input wins. Scheme keywords and hostnames ignore ASCII case. Tokens
//! are greedy and never give characters back; only optional groups backtrack.

use tracing::{debug, trace};

use crate::constants::{PATH_PUNCTUATION, SCHEME_SEPARATOR, USER_PUNCTUATION};
use crate::dialect::Dialect;
use crate::scheme::Scheme;

/// Fields lifted out of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields {
    pub scheme: Scheme,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub path: String,
    pub dialect: Dialect,
}

/// Runs every production in order and returns the first full match.
pub(crate) fn recognize(input: &str) -> Option<Fields> {
    let fields = Dialect::ALL.into_iter().find_map(|dialect| {
        let mut cursor = Cursor::new(input);
        let fields = production(dialect, &mut cursor).filter(|_| cursor.is_at_end());
        trace!(%dialect, matched = fields.is_some(), "tried git URL production");
        fields
    });

    if fields.is_none() {
        debug!(input, "input matches no git URL dialect");
    }

    fields
}

fn production(dialect: Dialect, cursor: &mut Cursor<'_>) -> Option<Fields> {
    match dialect {
        Dialect::Http => authority_url(cursor, &Scheme::HTTP_KEYWORDS, dialect),
        Dialect::Ssh => authority_url(cursor, &[Scheme::Ssh], dialect),
        Dialect::Git => authority_url(cursor, &[Scheme::Git], dialect),
        Dialect::ScpLike => scp_like_url(cursor),
        Dialect::Local => local_url(cursor),
    }
}

/// `scheme "://" [user "@"] hostname [":" port] "/" path`
fn authority_url(cursor: &mut Cursor<'_>, schemes: &[Scheme], dialect: Dialect) -> Option<Fields> {
    let scheme = schemes.iter().copied().find_map(|scheme| {
        cursor.optional(|c| {
            c.keyword(scheme.as_str())?;
            c.literal(SCHEME_SEPARATOR)?;
            Some(scheme)
        })
    })?;
    let user = cursor.user_info();
    let host = cursor.hostname()?;
    let port = cursor.optional(|c| {
        c.literal(":")?;
        c.port()
    });
    cursor.literal("/")?;
    let path = cursor.path()?;

    Some(Fields {
        scheme,
        host: Some(host),
        port,
        user,
        path: path.to_string(),
        dialect,
    })
}

/// `[user "@"] hostname !"://" ":" path`
fn scp_like_url(cursor: &mut Cursor<'_>) -> Option<Fields> {
    let user = cursor.user_info();
    let host = cursor.hostname()?;
    cursor.not_followed_by(SCHEME_SEPARATOR)?;
    cursor.literal(":")?;
    let path = cursor.path()?;

    Some(Fields {
        scheme: Scheme::Ssh,
        host: Some(host),
        port: None,
        user,
        path: path.to_string(),
        dialect: Dialect::ScpLike,
    })
}

/// `"file://" path / "/" path`, where the path is always absolute.
fn local_url(cursor: &mut Cursor<'_>) -> Option<Fields> {
    let explicit = cursor
        .optional(|c| {
            c.keyword(Scheme::File.as_str())?;
            c.literal(SCHEME_SEPARATOR)
        })
        .is_some();
    let path = cursor.path()?;

    // The bare form needs at least one path character after its slash.
    let min_len = if explicit { 1 } else { 2 };
    if !path.starts_with('/') || path.len() < min_len {
        return None;
    }

    Some(Fields {
        scheme: Scheme::File,
        host: None,
        port: None,
        user: None,
        path: path.to_string(),
        dialect: Dialect::Local,
    })
}

/// A position in the input. Every token is ASCII, so `pos` always sits on a
/// char boundary.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Runs `f` on a copy and only commits the copy's position on success.
    fn optional<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mut attempt = *self;
        let out = f(&mut attempt);
        if out.is_some() {
            *self = attempt;
        }
        out
    }

    fn literal(&mut self, lit: &str) -> Option<()> {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            Some(())
        } else {
            None
        }
    }

    fn keyword(&mut self, keyword: &str) -> Option<()> {
        let rest = self.rest().as_bytes();
        if rest.len() >= keyword.len() && rest[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes()) {
            self.pos += keyword.len();
            Some(())
        } else {
            None
        }
    }

    fn not_followed_by(&self, lit: &str) -> Option<()> {
        if self.rest().starts_with(lit) {
            None
        } else {
            Some(())
        }
    }

    /// Consumes the longest non-empty run of accepted bytes.
    fn word(&mut self, accept: impl Fn(u8) -> bool) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(|&b| accept(b)).count();
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    fn label(&mut self) -> Option<()> {
        self.word(|b| b.is_ascii_alphanumeric())?;
        while self
            .optional(|c| {
                c.literal("-")?;
                c.word(|b| b.is_ascii_alphanumeric())
            })
            .is_some()
        {}
        Some(())
    }

    /// Returns the hostname lower-cased.
    fn hostname(&mut self) -> Option<String> {
        let start = self.pos;
        self.label()?;
        while self
            .optional(|c| {
                c.literal(".")?;
                c.label()
            })
            .is_some()
        {}
        Some(self.input[start..self.pos].to_ascii_lowercase())
    }

    /// Ports are limited to `1..=65535`; anything else fails the group.
    fn port(&mut self) -> Option<u16> {
        let digits = self.word(|b| b.is_ascii_digit())?;
        digits.parse::<u16>().ok().filter(|port| *port != 0)
    }

    /// `[user "@"]`
    fn user_info(&mut self) -> Option<String> {
        self.optional(|c| {
            let user = c.word(|b| b.is_ascii_alphanumeric() || USER_PUNCTUATION.as_bytes().contains(&b))?;
            c.literal("@")?;
            Some(user.to_string())
        })
    }

    fn path(&mut self) -> Option<&'a str> {
        self.word(|b| b.is_ascii_alphanumeric() || PATH_PUNCTUATION.as_bytes().contains(&b))
    }
}
