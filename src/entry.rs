use tracing::{debug, instrument};

use crate::digest::hash_with;
use crate::error::FqdnRandError;
use crate::prng::deterministic_bounded_int;
use crate::seed::{build_seed_string, coerce_bound, render};
use crate::types::{HashAlgorithm, NodeContext, RandReport, SeedPart};

/// `fqdn_rand(MAX, [SEED...])`: integer in `[0, MAX)` that is stable for a
/// given node and seed, and differs between nodes.
///
/// `args[0]` is MAX (integer or numeric text); the rest are seed parts.
pub fn fqdn_rand(ctx: &NodeContext, args: &[SeedPart]) -> Result<u64, FqdnRandError> {
    fqdn_rand_report(ctx, args).map(|r| r.value)
}

/// Same as [`fqdn_rand`], returning the intermediate seed string and digest.
#[instrument(level = "debug", skip_all, fields(fips = ctx.fips_enabled, nargs = args.len()))]
pub fn fqdn_rand_report(ctx: &NodeContext, args: &[SeedPart]) -> Result<RandReport, FqdnRandError> {
    let (raw_max, extra) = args.split_first().ok_or(FqdnRandError::MissingBound)?;
    let max = u64::try_from(coerce_bound(raw_max)?)
        .ok()
        .filter(|&m| m > 0)
        .ok_or_else(|| FqdnRandError::InvalidBound { raw: render(raw_max) })?;

    let seed_string = build_seed_string(&ctx.fqdn, max, extra);
    let algorithm = HashAlgorithm::for_mode(ctx.fips_enabled);
    let seed = hash_with(algorithm, &seed_string);
    debug!(%algorithm, %seed_string, digest = %seed.to_hex(), "derived seed");

    let value = deterministic_bounded_int(&seed, max)?;
    Ok(RandReport {
        fqdn: ctx.fqdn.clone(),
        max,
        algorithm,
        seed_string,
        digest_hex: seed.to_hex(),
        value,
    })
}
