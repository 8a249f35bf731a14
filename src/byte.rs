// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The opaque one-byte value used by byte views.
//!
//! `Byte` is a `u8` that is not a number: it supports bit operations and
//! explicit conversion, not arithmetic.

use core::fmt;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use serde::{Deserialize, Serialize};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// One raw byte of storage.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromBytes,
    IntoBytes,
    Immutable,
    KnownLayout,
    Unaligned,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Byte(u8);

static_assertions::assert_eq_size!(Byte, u8);
static_assertions::assert_eq_align!(Byte, u8);

impl Byte {
    #[inline]
    pub const fn new(value: u8) -> Self {
        Byte(value)
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Widen into any integer that every `u8` fits in.
    #[inline]
    pub fn to_integer<I: From<u8>>(self) -> I {
        I::from(self.0)
    }
}

/// A `Byte` from a constant, rejected at compile time outside `0..=255`.
///
/// ```
/// use spanguard::{to_byte, Byte};
///
/// assert_eq!(to_byte::<0x2A>(), Byte::new(42));
/// ```
///
/// ```compile_fail
/// let _ = spanguard::to_byte::<256>();
/// ```
#[inline]
pub const fn to_byte<const V: i32>() -> Byte {
    const { assert!(0 <= V && V <= 255, "byte constant out of range") };
    Byte(V as u8)
}

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Byte(value)
    }
}

impl From<Byte> for u8 {
    fn from(byte: Byte) -> Self {
        byte.0
    }
}

macro_rules! impl_bit_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op for Byte {
            type Output = Byte;

            #[inline]
            fn $op(self, rhs: Byte) -> Byte {
                Byte(self.0.$op(rhs.0))
            }
        }

        impl $OpAssign for Byte {
            #[inline]
            fn $op_assign(&mut self, rhs: Byte) {
                self.0.$op_assign(rhs.0);
            }
        }
    };
}

impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for Byte {
    type Output = Byte;

    #[inline]
    fn not(self) -> Byte {
        Byte(!self.0)
    }
}

// Shifts drop bits past the edge, like `u8 << n` for n < 8; n >= 8 yields 0.
impl Shl<u32> for Byte {
    type Output = Byte;

    #[inline]
    fn shl(self, shift: u32) -> Byte {
        Byte(self.0.checked_shl(shift).unwrap_or(0))
    }
}

impl Shr<u32> for Byte {
    type Output = Byte;

    #[inline]
    fn shr(self, shift: u32) -> Byte {
        Byte(self.0.checked_shr(shift).unwrap_or(0))
    }
}

impl ShlAssign<u32> for Byte {
    #[inline]
    fn shl_assign(&mut self, shift: u32) {
        *self = *self << shift;
    }
}

impl ShrAssign<u32> for Byte {
    #[inline]
    fn shr_assign(&mut self, shift: u32) {
        *self = *self >> shift;
    }
}

impl fmt::LowerHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
