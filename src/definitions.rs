use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "bigint")]
use num_bigint::{BigUint, RandBigInt};
#[cfg(feature = "bigint")]
use num_traits::Zero;
use rand::distributions::Uniform;
use rand::prelude::*;

/// Uniform draws below a positive bound.
pub trait RandomSource {
    fn below_u64(&mut self, bound: u64) -> u64;

    #[cfg(feature = "bigint")]
    fn below_big(&mut self, bound: &BigUint) -> BigUint;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn below_u64(&mut self, bound: u64) -> u64 {
        Uniform::new(0, bound).sample(self)
    }

    #[cfg(feature = "bigint")]
    #[inline]
    fn below_big(&mut self, bound: &BigUint) -> BigUint {
        self.gen_biguint_below(bound)
    }
}

/// An integer domain the lazy shuffle can run over.
///
/// Values are non-negative. `Key` is what the shuffle map hashes; it has to be
/// injective over the positions actually used.
pub trait Dealable: Clone + PartialEq + Debug {
    type Key: Hash + Eq;

    fn key(&self) -> Self::Key;

    /// `self >= n`
    fn holds(&self, n: usize) -> bool;

    /// Whether `origin + self - 1` is representable. An empty span always fits.
    fn fits_after(&self, origin: &Self) -> bool;

    fn decrement(&mut self);

    fn offset(self, origin: &Self) -> Self;

    /// Uniform value in `[0, self)`, `self` must be positive.
    fn below<S: RandomSource + ?Sized>(&self, source: &mut S) -> Self;
}

// All native widths draw through `below_u64`, so they consume the source the
// same way regardless of width.
macro_rules! define_dealable {
    ($t:ty) => {
        impl $crate::Dealable for $t {
            type Key = $t;

            #[inline(always)]
            fn key(&self) -> $t {
                *self
            }

            #[inline]
            fn holds(&self, n: usize) -> bool {
                <$t as std::convert::TryFrom<usize>>::try_from(n).map_or(false, |n| n <= *self)
            }

            #[inline]
            fn fits_after(&self, origin: &Self) -> bool {
                *self == 0 || origin.checked_add(*self - 1).is_some()
            }

            #[inline(always)]
            fn decrement(&mut self) {
                *self -= 1;
            }

            #[inline(always)]
            fn offset(self, origin: &Self) -> Self {
                self + *origin
            }

            #[inline]
            fn below<S: $crate::RandomSource + ?Sized>(&self, source: &mut S) -> Self {
                debug_assert!(*self > 0);
                source.below_u64(*self as u64) as $t
            }
        }
    };
}

define_dealable!(u64);
define_dealable!(u32);
define_dealable!(u16);
define_dealable!(u8);
define_dealable!(usize);

#[cfg(feature = "bigint")]
impl Dealable for BigUint {
    /// Little-endian magnitude; zero maps to the empty string.
    type Key = Vec<u8>;

    #[inline]
    fn key(&self) -> Vec<u8> {
        if self.is_zero() {
            Vec::new()
        } else {
            self.to_bytes_le()
        }
    }

    #[inline]
    fn holds(&self, n: usize) -> bool {
        *self >= BigUint::from(n)
    }

    #[inline(always)]
    fn fits_after(&self, _origin: &Self) -> bool {
        true
    }

    #[inline]
    fn decrement(&mut self) {
        *self -= 1u32;
    }

    #[inline]
    fn offset(self, origin: &Self) -> Self {
        self + origin
    }

    #[inline]
    fn below<S: RandomSource + ?Sized>(&self, source: &mut S) -> Self {
        debug_assert!(!self.is_zero());
        source.below_big(self)
    }
}
