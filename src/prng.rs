use rand_mt::Mt;

use crate::digest::Seed;
use crate::error::FqdnRandError;

/// MT19937 seeded from a big integer the same way the legacy host seeds its
/// `Random`, so bounded draws reproduce previously published values.
pub struct DPrng(Mt);

impl DPrng {
    pub fn from_seed(seed: &Seed) -> Self {
        Self(Mt::new_with_key(seed_key(seed)))
    }

    pub fn next_u32(&mut self) -> u32 { self.0.next_u32() }

    /// Uniform integer in `[0, limit]` by masked rejection sampling, high word
    /// first.
    pub fn limited(&mut self, limit: u64) -> u64 {
        if limit == 0 {
            return 0;
        }
        let mask = make_mask(limit);
        'retry: loop {
            let mut val: u64 = 0;
            for i in (0..2).rev() {
                if (mask >> (i * 32)) & 0xffff_ffff != 0 {
                    val |= (self.next_u32() as u64) << (i * 32);
                    val &= mask;
                    if limit < val {
                        continue 'retry;
                    }
                }
            }
            return val;
        }
    }
}

/// Key words for `init_by_array`. A most significant word of exactly 1 is
/// dropped when the key has more than one word; the host's integer packing
/// treats it as a sign guard.
fn seed_key(seed: &Seed) -> Vec<u32> {
    let mut key = seed.to_u32_words();
    if key.len() > 1 && key.last() == Some(&1) {
        key.pop();
    }
    key
}

fn make_mask(mut x: u64) -> u64 {
    for shift in [1, 2, 4, 8, 16, 32] {
        x |= x >> shift;
    }
    x
}

/// Value in `[0, max)` derived from `seed`.
pub fn deterministic_bounded_int(seed: &Seed, max: u64) -> Result<u64, FqdnRandError> {
    if max == 0 {
        return Err(FqdnRandError::InvalidBound { raw: max.to_string() });
    }
    Ok(DPrng::from_seed(seed).limited(max - 1))
}
