#[cfg(feature = "bigint")]
use num_bigint::BigUint;
use rand::prelude::*;

use crate::{DealError, Dealable, RandomSource};

/// Owns a randomness source and deals from it repeatedly.
pub struct Dealer<R>(R);

impl Dealer<SmallRng> {
    pub fn with_small_rng() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: RandomSource> Dealer<R> {
    pub fn new(rng: R) -> Dealer<R> {
        Dealer(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }

    #[inline]
    pub fn deal<T: Dealable>(
        &mut self,
        output: &mut [T],
        origin: T,
        count: T,
    ) -> Result<(), DealError> {
        crate::deal(output, origin, count, &mut self.0)
    }

    #[cfg(feature = "bigint")]
    #[inline]
    pub fn deal_big(
        &mut self,
        output: &mut [BigUint],
        origin: &BigUint,
        count: &BigUint,
    ) -> Result<(), DealError> {
        crate::deal_big(output, origin, count, &mut self.0)
    }

    /// Draws `n` distinct values from `[origin, origin + count)`.
    pub fn sample<T: Dealable + Default>(
        &mut self,
        n: usize,
        origin: T,
        count: T,
    ) -> Result<Vec<T>, DealError> {
        let mut output = vec![T::default(); n];
        self.deal(&mut output, origin, count)?;
        Ok(output)
    }
}
