use std::fmt;

use serde::{Deserialize, Serialize};

/// One argument handed over by the host. The host is loosely typed, so a seed
/// may be any of these and is rendered to text before hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedPart {
    Undef,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Array(Vec<SeedPart>),
}

impl From<&str> for SeedPart {
    fn from(s: &str) -> Self { SeedPart::Text(s.to_string()) }
}

impl From<String> for SeedPart {
    fn from(s: String) -> Self { SeedPart::Text(s) }
}

impl From<i64> for SeedPart {
    fn from(n: i64) -> Self { SeedPart::Integer(n) }
}

impl From<f64> for SeedPart {
    fn from(f: f64) -> Self { SeedPart::Float(f) }
}

impl From<bool> for SeedPart {
    fn from(b: bool) -> Self { SeedPart::Boolean(b) }
}

impl<T: Into<SeedPart>> From<Vec<T>> for SeedPart {
    fn from(v: Vec<T>) -> Self { SeedPart::Array(v.into_iter().map(Into::into).collect()) }
}

/// Host-injected signals the function depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContext {
    pub fqdn: String,
    pub fips_enabled: bool,
}

impl NodeContext {
    pub fn new(fqdn: impl Into<String>, fips_enabled: bool) -> Self {
        Self { fqdn: fqdn.into(), fips_enabled }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

impl HashAlgorithm {
    /// FIPS platforms cannot use MD5; everyone else keeps it so previously
    /// generated values stay put.
    pub fn for_mode(strict: bool) -> Self {
        if strict { HashAlgorithm::Sha256 } else { HashAlgorithm::Md5 }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Everything that went into one value, for `--format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandReport {
    pub fqdn: String,
    pub max: u64,
    pub algorithm: HashAlgorithm,
    pub seed_string: String,
    pub digest_hex: String,
    pub value: u64,
}
