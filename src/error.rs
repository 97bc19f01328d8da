use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FqdnRandError {
    #[error("fqdn_rand(): expects at least 1 argument (MAX), got 0")]
    MissingBound,
    #[error("fqdn_rand(): MAX must be a positive integer, got {raw:?}")]
    InvalidBound { raw: String },
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unexpected contents in {path}: {contents:?}")]
    Unexpected { path: String, contents: String },
    #[error("Host name {hostname:?} has no domain and no resolver domain is configured; pass --fqdn or set FQDN_RAND_FQDN")]
    NoDomain { hostname: String },
}
