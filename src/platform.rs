//! Host signals read from the running machine when not supplied explicitly.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::PlatformError;

pub const FIPS_FLAG_PATH: &str = "/proc/sys/crypto/fips_enabled";
pub const HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";
pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// True when the kernel reports FIPS mode. A missing flag file means the
/// platform has no FIPS switch at all.
pub fn fips_enabled() -> Result<bool, PlatformError> {
    fips_enabled_at(Path::new(FIPS_FLAG_PATH))
}

pub fn fips_enabled_at(path: &Path) -> Result<bool, PlatformError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim_end() == "1"),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(PlatformError::Read { path: path.display().to_string(), source }),
    }
}

/// Fully-qualified name of this node: the kernel host name when it is already
/// dotted, otherwise host name plus the resolver domain.
pub fn fqdn() -> Result<String, PlatformError> {
    fqdn_from(Path::new(HOSTNAME_PATH), Path::new(RESOLV_CONF_PATH))
}

pub fn fqdn_from(hostname_path: &Path, resolv_path: &Path) -> Result<String, PlatformError> {
    let hostname = kernel_hostname_at(hostname_path)?;
    if hostname.contains('.') {
        return Ok(hostname.trim_end_matches('.').to_string());
    }
    match resolver_domain_at(resolv_path)? {
        Some(domain) => Ok(format!("{hostname}.{domain}")),
        None => Err(PlatformError::NoDomain { hostname }),
    }
}

/// Kernel node name; on most systems only the short host name.
pub fn kernel_hostname_at(path: &Path) -> Result<String, PlatformError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| PlatformError::Read { path: path.display().to_string(), source })?;
    let name = contents.trim();
    if name.is_empty() {
        return Err(PlatformError::Unexpected { path: path.display().to_string(), contents });
    }
    Ok(name.to_string())
}

/// Search domain from a resolv.conf: the last `domain` line, else the first
/// entry of the last `search` line. A missing file has no domain.
pub fn resolver_domain_at(path: &Path) -> Result<Option<String>, PlatformError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(PlatformError::Read { path: path.display().to_string(), source }),
    };

    let mut domain = None;
    let mut search = None;
    for line in contents.lines() {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("domain"), Some(d)) => domain = Some(d),
            (Some("search"), Some(d)) => search = Some(d),
            _ => {}
        }
    }
    Ok(domain
        .or(search)
        .map(|d| d.trim_end_matches('.'))
        .filter(|d| !d.is_empty())
        .map(str::to_string))
}
