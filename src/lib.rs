pub mod types;
pub mod error;
pub mod seed;
pub mod digest;
pub mod prng;
mod entry;
pub mod platform;
pub mod config;

pub use crate::entry::{fqdn_rand, fqdn_rand_report};
pub use crate::error::FqdnRandError;
pub use crate::types::{HashAlgorithm, NodeContext, RandReport, SeedPart};
