use crate::error::FilterError;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Digest algorithms a filter can derive its indices from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
    Md5,
    #[default]
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 12] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha512_224,
        DigestAlgorithm::Sha512_256,
        DigestAlgorithm::Sha3_224,
        DigestAlgorithm::Sha3_256,
        DigestAlgorithm::Sha3_384,
        DigestAlgorithm::Sha3_512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
            DigestAlgorithm::Sha512_224 => "sha512-224",
            DigestAlgorithm::Sha512_256 => "sha512-256",
            DigestAlgorithm::Sha3_224 => "sha3-224",
            DigestAlgorithm::Sha3_256 => "sha3-256",
            DigestAlgorithm::Sha3_384 => "sha3-384",
            DigestAlgorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Digests the concatenation of `parts`.
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Md5 => digest_parts::<Md5>(parts),
            DigestAlgorithm::Sha1 => digest_parts::<Sha1>(parts),
            DigestAlgorithm::Sha224 => digest_parts::<Sha224>(parts),
            DigestAlgorithm::Sha256 => digest_parts::<Sha256>(parts),
            DigestAlgorithm::Sha384 => digest_parts::<Sha384>(parts),
            DigestAlgorithm::Sha512 => digest_parts::<Sha512>(parts),
            DigestAlgorithm::Sha512_224 => digest_parts::<Sha512_224>(parts),
            DigestAlgorithm::Sha512_256 => digest_parts::<Sha512_256>(parts),
            DigestAlgorithm::Sha3_224 => digest_parts::<Sha3_224>(parts),
            DigestAlgorithm::Sha3_256 => digest_parts::<Sha3_256>(parts),
            DigestAlgorithm::Sha3_384 => digest_parts::<Sha3_384>(parts),
            DigestAlgorithm::Sha3_512 => digest_parts::<Sha3_512>(parts),
        }
    }
}

fn digest_parts<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_vec()
}

/// Canonical names of every supported algorithm.
pub fn supported_algorithms() -> impl Iterator<Item = &'static str> {
    DigestAlgorithm::ALL.into_iter().map(DigestAlgorithm::name)
}

impl FromStr for DigestAlgorithm {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigestAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| FilterError::UnsupportedAlgorithm { name: s.to_owned() })
    }
}

impl Display for DigestAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
