use hex::ToHex;
use md5::Md5;
use sha2::{Digest, Sha256};

use crate::types::HashAlgorithm;

/// Hash output read as an unsigned big-endian integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    bytes: Vec<u8>,
}

impl Seed {
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    pub fn as_be_bytes(&self) -> &[u8] { &self.bytes }

    pub fn to_hex(&self) -> String { self.bytes.encode_hex::<String>() }

    /// Minimal 32-bit words, least significant first. Zero is `[0]`.
    pub fn to_u32_words(&self) -> Vec<u32> {
        let mut words: Vec<u32> = self
            .bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
            .collect();
        while words.len() > 1 && words.last() == Some(&0) {
            words.pop();
        }
        if words.is_empty() {
            words.push(0);
        }
        words
    }
}

pub fn hash_with(algorithm: HashAlgorithm, seed_string: &str) -> Seed {
    match algorithm {
        HashAlgorithm::Md5 => Seed::from_be_bytes(&Md5::digest(seed_string.as_bytes())),
        HashAlgorithm::Sha256 => Seed::from_be_bytes(&Sha256::digest(seed_string.as_bytes())),
    }
}

/// SHA-256 in strict (FIPS) mode, MD5 otherwise.
pub fn select_and_hash(seed_string: &str, strict_mode: bool) -> Seed {
    hash_with(HashAlgorithm::for_mode(strict_mode), seed_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_mode_uses_md5() {
        let seed = select_and_hash("web01.example.com:30:", false);
        assert_eq!(seed.to_hex(), "4574b7f4e8c501536aed583191ef52da");
        assert_eq!(seed.as_be_bytes().len(), 16);
    }

    #[test]
    fn strict_mode_uses_sha256() {
        let seed = select_and_hash("web01.example.com:30:", true);
        assert_eq!(
            seed.to_hex(),
            "d7e95b51bea76405bc0451a2215f12421aeaf02d232bf1cee7d50c4133b8d067"
        );
    }

    #[test]
    fn words_are_little_endian_and_minimal() {
        let seed = Seed::from_be_bytes(&[0, 0, 0, 0, 0, 0, 0, 0, 0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(seed.to_u32_words(), vec![0x0203_0405, 0x01]);
        assert_eq!(Seed::from_be_bytes(&[0, 0, 0, 0, 0]).to_u32_words(), vec![0]);
        assert_eq!(Seed::from_be_bytes(&[]).to_u32_words(), vec![0]);
        let md5 = select_and_hash("web01.example.com:30:", false).to_u32_words();
        assert_eq!(md5, vec![0x91ef_52da, 0x6aed_5831, 0xe8c5_0153, 0x4574_b7f4]);
    }
}
