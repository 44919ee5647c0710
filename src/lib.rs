//! Sampling without replacement from `[origin, origin + count)`.
//!
//! This is a Fisher–Yates shuffle that only derives the first `n` positions of
//! the permutation. Displaced positions are kept in a sparse map, so memory and
//! time grow with the number of samples, never with `count`. `count` may be any
//! native unsigned width or, with the `bigint` feature, a [`BigUint`].
//!
//! ```rust
//! use rand::prelude::*;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut picks = [0u64; 8];
//! deal::deal(&mut picks, 1_000, u64::MAX - 1_000, &mut rng).unwrap();
//! assert!(picks.iter().all(|&v| v >= 1_000));
//! ```

use log::{debug, trace};
#[cfg(feature = "bigint")]
pub use num_bigint::BigUint;

pub use crate::definitions::{Dealable, RandomSource};
pub use crate::error::DealError;
pub use crate::sampler::Dealer;
use crate::shuffle_map::ShuffleMap;

mod definitions;
mod error;
mod sampler;
mod shuffle_map;

fn validate<T: Dealable>(n: usize, origin: &T, count: &T) -> Result<(), DealError> {
    if !count.holds(n) {
        trace!("rejecting deal of {} values from {:?} values", n, count);
        return Err(DealError::RangeTooSmall { requested: n });
    }
    if !count.fits_after(origin) {
        trace!("rejecting deal from {:?} values at {:?}", count, origin);
        return Err(DealError::SpanOverflow);
    }
    Ok(())
}

/// Overwrites `output` with distinct values drawn uniformly from
/// `[origin, origin + count)`.
///
/// Draws exactly one value from `source` per slot, in slot order, so a seeded
/// source replays the same output. On error `output` is untouched and nothing
/// is drawn.
pub fn deal<T, S>(output: &mut [T], origin: T, count: T, source: &mut S) -> Result<(), DealError>
where
    T: Dealable,
    S: RandomSource + ?Sized,
{
    let n = output.len();
    validate(n, &origin, &count)?;
    debug!("dealing {} values from {:?} starting at {:?}", n, count, origin);

    let mut map = ShuffleMap::with_capacity(n);
    let mut remaining = count;
    for slot in output.iter_mut() {
        let index = remaining.below(source);
        remaining.decrement();
        let last = remaining.clone();
        *slot = map.swap(index, last).offset(&origin);
    }
    debug_assert!(map.len() <= n);

    Ok(())
}

/// [`deal`] over arbitrary-precision integers.
#[cfg(feature = "bigint")]
#[inline]
pub fn deal_big<S>(
    output: &mut [BigUint],
    origin: &BigUint,
    count: &BigUint,
    source: &mut S,
) -> Result<(), DealError>
where
    S: RandomSource + ?Sized,
{
    deal(output, origin.clone(), count.clone(), source)
}
