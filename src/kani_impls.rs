//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Dialect, GitUrl, Scheme};

/// Valid characters for hostname labels (lower case keeps proofs small)
const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Valid characters for user names
const USER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_-";

/// Valid characters for repository paths
const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABC0123456789+,/._-~";

fn arbitrary_from(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for Scheme {
    fn any() -> Self {
        match kani::any::<u8>() % 5 {
            0 => Self::Http,
            1 => Self::Https,
            2 => Self::Ssh,
            3 => Self::Git,
            _ => Self::File,
        }
    }
}

impl kani::Arbitrary for GitUrl {
    fn any() -> Self {
        let scheme: Scheme = kani::any();
        let path = arbitrary_from(PATH_CHARS, 4);

        let input = if scheme.is_local() {
            format!("file:///{path}")
        } else {
            let host = format!("{}.{}", arbitrary_from(LABEL_CHARS, 3), arbitrary_from(LABEL_CHARS, 3));
            let user = if kani::any() {
                format!("{}@", arbitrary_from(USER_CHARS, 3))
            } else {
                String::new()
            };
            let port = if kani::any() {
                let port: u16 = kani::any();
                kani::assume(port > 0);
                format!(":{port}")
            } else {
                String::new()
            };
            format!("{scheme}://{user}{host}{port}/{path}")
        };

        GitUrl::parse(&input).expect("valid URL by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: the canonical form reparses to an equal URL
#[kani::proof]
#[kani::unwind(10)]
fn proof_canonical_roundtrip() {
    let url: GitUrl = kani::any();
    let reparsed = GitUrl::parse(url.as_str()).expect("canonical should parse");
    assert_eq!(reparsed, url);
    assert_eq!(reparsed.as_str(), url.as_str());
}

/// Proof: local URLs never carry a host or port
#[kani::proof]
#[kani::unwind(10)]
fn proof_local_has_no_authority() {
    let url: GitUrl = kani::any();
    if url.is_local() {
        assert!(url.host().is_none());
        assert!(url.port().is_none());
        assert_eq!(url.dialect(), Dialect::Local);
    } else {
        assert!(url.host().is_some());
    }
}
