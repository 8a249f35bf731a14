// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeric narrowing.
//!
//! | Function          | On loss of value          |
//! |-------------------|---------------------------|
//! | [`narrow_cast`]   | truncates or wraps (`as`) |
//! | [`narrow`]        | `Err(NarrowingError)`     |

use core::any::type_name;
use core::fmt;

use num_traits::{AsPrimitive, Zero};
use thiserror::Error;

/// A [`narrow`] conversion that would have changed the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("narrowing {value} from {source_type} to {target_type} changes its value")]
pub struct NarrowingError {
    pub value: String,
    pub source_type: &'static str,
    pub target_type: &'static str,
}

/// Unchecked narrowing: a plain `as` conversion, spelled out so the intent
/// is visible at the call site.
///
/// ```
/// use spanguard::narrow_cast;
///
/// assert_eq!(narrow_cast::<u8, _>(300_i32), 44);
/// ```
#[inline]
pub fn narrow_cast<T, U>(value: U) -> T
where
    U: AsPrimitive<T>,
    T: Copy + 'static,
{
    value.as_()
}

/// Checked narrowing.
///
/// Succeeds only when converting back gives the original value and the sign
/// survived. NaN never round-trips, so it always fails.
///
/// ```
/// use spanguard::narrow;
///
/// assert_eq!(narrow::<u8, _>(120_i32), Ok(120));
/// assert!(narrow::<u8, _>(300_i32).is_err());
/// assert!(narrow::<u32, _>(-1_i32).is_err());
/// ```
pub fn narrow<T, U>(value: U) -> Result<T, NarrowingError>
where
    U: AsPrimitive<T> + PartialOrd + Zero + fmt::Display,
    T: AsPrimitive<U> + PartialOrd + Zero,
{
    let narrowed: T = value.as_();
    let round_trip: U = narrowed.as_();
    // INVARIANT: value preserved and sign preserved
    let sign_flipped = (narrowed < T::zero()) != (value < U::zero());
    if round_trip != value || sign_flipped {
        return Err(NarrowingError {
            value: value.to_string(),
            source_type: type_name::<U>(),
            target_type: type_name::<T>(),
        });
    }
    Ok(narrowed)
}
