// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pure bounds arithmetic behind every view operation.
//!
//! Nothing here touches memory: each function maps lengths and offsets to an
//! index range or a [`ContractViolation`]. The same functions are model
//! checked in `kani-proofs/` (no overflow, result always inside `[0, len]`).

use core::ops::Range;

use crate::contracts::ContractViolation;
use crate::extent::DYNAMIC_EXTENT;

/// Range of the leading `count` elements.
#[inline]
pub(crate) fn leading(len: usize, count: usize) -> Result<Range<usize>, ContractViolation> {
    if count > len {
        return Err(ContractViolation::CountOutOfRange { count, len });
    }
    Ok(0..count)
}

/// Range of the trailing `count` elements.
#[inline]
pub(crate) fn trailing(len: usize, count: usize) -> Result<Range<usize>, ContractViolation> {
    if count > len {
        return Err(ContractViolation::CountOutOfRange { count, len });
    }
    Ok(len - count..len)
}

/// Range `[offset, offset + count)`; `count == DYNAMIC_EXTENT` runs to the end.
#[inline]
pub(crate) fn window(
    len: usize,
    offset: usize,
    count: usize,
) -> Result<Range<usize>, ContractViolation> {
    if offset > len {
        return Err(ContractViolation::OffsetOutOfRange { offset, len });
    }
    // INVARIANT: offset <= len, so `available` cannot underflow.
    let available = len - offset;
    if count == DYNAMIC_EXTENT {
        return Ok(offset..len);
    }
    if count > available {
        return Err(ContractViolation::CountOutOfRange {
            count,
            len: available,
        });
    }
    Ok(offset..offset + count)
}

/// Validate an element index.
#[inline]
pub(crate) fn element(len: usize, index: usize) -> Result<usize, ContractViolation> {
    if index >= len {
        return Err(ContractViolation::IndexOutOfRange { index, len });
    }
    Ok(index)
}

/// Move a cursor position by `delta`, staying inside `[0, len]`.
#[inline]
pub(crate) fn step(position: usize, delta: isize, len: usize) -> Result<usize, ContractViolation> {
    let moved = if delta >= 0 {
        position.checked_add(delta.unsigned_abs())
    } else {
        position.checked_sub(delta.unsigned_abs())
    };
    // INVARIANT: a cursor may rest on `len` (one past the end) but never beyond.
    match moved {
        Some(target) if target <= len => Ok(target),
        _ => Err(ContractViolation::CursorOutOfRange {
            position: (position as isize).saturating_add(delta),
            len,
        }),
    }
}

/// Signed distance `to - from` between two positions of the same view.
#[inline]
pub(crate) fn distance(from: usize, to: usize) -> isize {
    (to as isize).wrapping_sub(from as isize)
}

/// Total byte size of `len` elements, bounded by `isize::MAX`.
#[inline]
pub(crate) fn byte_len(len: usize, elem_size: usize) -> Result<usize, ContractViolation> {
    match len.checked_mul(elem_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(bytes),
        _ => Err(ContractViolation::SizeOverflow { len, elem_size }),
    }
}

/// Element count spanned by the byte distance between two addresses.
#[inline]
pub(crate) fn range_len(
    first: usize,
    last: usize,
    elem_size: usize,
) -> Result<usize, ContractViolation> {
    let bytes = last
        .checked_sub(first)
        .ok_or(ContractViolation::InvertedRange)?;
    if elem_size == 0 {
        return Ok(0);
    }
    if bytes % elem_size != 0 {
        return Err(ContractViolation::UnalignedRange { bytes, elem_size });
    }
    Ok(bytes / elem_size)
}
