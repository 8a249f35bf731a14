//! Construction: raw parts, pointer ranges, arrays, containers, extent conversion.

#![allow(unsafe_code)]

use super::common::{assert_view_well_formed, assert_violation, Triple, FIVE};
use spanguard::{make_view, BoundedView, Dynamic, Fixed};
use std::ptr;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// RAW PARTS
// ============================================================================

#[test]
fn test_null_with_zero_length() {
    let s: BoundedView<'_, i32> = unsafe { BoundedView::from_raw_parts(ptr::null(), 0) };
    assert_eq!(s.len(), 0);
    assert!(s.as_ptr().is_null());
    assert_view_well_formed(&s);

    let s: BoundedView<'_, i32, Fixed<0>> =
        unsafe { BoundedView::from_raw_parts_fixed(ptr::null(), 0) };
    assert_eq!(s.len(), 0);
    assert!(s.as_ptr().is_null());
}

#[test]
fn test_null_with_length_violates() {
    assert_violation("null base address with length 1", || {
        let _: BoundedView<'_, i32> = unsafe { BoundedView::from_raw_parts(ptr::null(), 1) };
    });
    assert_violation("null base address with length 1", || {
        let _: BoundedView<'_, i32, Fixed<0>> =
            unsafe { BoundedView::from_raw_parts_fixed(ptr::null(), 1) };
    });
    assert_violation("null base address with length 1", || {
        let _: BoundedView<'_, i32, Fixed<1>> =
            unsafe { BoundedView::from_raw_parts_fixed(ptr::null(), 0) };
    });
}

#[test]
fn test_pointer_and_length() {
    let arr = [1, 2, 3, 4];
    for i in 0..4 {
        let s: BoundedView<'_, i32> = unsafe { BoundedView::from_raw_parts(arr.as_ptr(), i) };
        assert_eq!(s.len(), i);
        assert_eq!(s.as_ptr(), arr.as_ptr());
        assert_eq!(s.is_empty(), i == 0);
        for j in 0..i {
            assert_eq!(s[j], arr[j]);
        }

        let tail: BoundedView<'_, i32> =
            unsafe { BoundedView::from_raw_parts(arr.as_ptr().add(i), 4 - i) };
        assert_eq!(tail.len(), 4 - i);
        for j in 0..4 - i {
            assert_eq!(tail[j], arr[j + i]);
        }
    }

    let s: BoundedView<'_, i32, Fixed<2>> = unsafe { BoundedView::from_raw_parts_fixed(arr.as_ptr(), 2) };
    assert_eq!(s, [1, 2]);
}

#[test]
fn test_fixed_extent_length_mismatch() {
    let arr = [1, 2, 3, 4];
    assert_violation("fixed extent 2 bound to storage of length 3", || {
        let _: BoundedView<'_, i32, Fixed<2>> =
            unsafe { BoundedView::from_raw_parts_fixed(arr.as_ptr(), 3) };
    });
}

#[test]
fn test_size_overflow() {
    let arr = [0u64; 1];
    assert_violation("overflow isize::MAX", || {
        let _: BoundedView<'_, u64> =
            unsafe { BoundedView::from_raw_parts(arr.as_ptr(), usize::MAX / 4) };
    });
}

// ============================================================================
// POINTER RANGES
// ============================================================================

#[test]
fn test_pointer_range() {
    let arr = [1, 2, 3, 4];
    let first = arr.as_ptr();

    let s: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(first, first.add(2)) };
    assert_eq!(s, [1, 2]);
    assert_eq!(s.as_ptr(), first);

    let s: BoundedView<'_, i32, Fixed<2>> =
        unsafe { BoundedView::from_ptr_range_fixed(first, first.add(2)) };
    assert_eq!(s, [1, 2]);

    let s: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(first, first) };
    assert!(s.is_empty());
    assert_eq!(s.as_ptr(), first);

    let s: BoundedView<'_, i32, Fixed<0>> = unsafe { BoundedView::from_ptr_range_fixed(first, first) };
    assert_eq!(s.as_ptr(), first);
}

#[test]
fn test_null_pointer_range() {
    let s: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(ptr::null(), ptr::null()) };
    assert_eq!(s.len(), 0);
    assert!(s.as_ptr().is_null());

    let s: BoundedView<'_, i32, Fixed<0>> =
        unsafe { BoundedView::from_ptr_range_fixed(ptr::null(), ptr::null()) };
    assert!(s.as_ptr().is_null());
}

#[test]
fn test_inverted_pointer_range() {
    let arr = [1, 2, 3, 4];
    let first = arr.as_ptr();
    assert_violation("end precedes its start", || {
        let _: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(first.add(1), first) };
    });
    assert_violation("end precedes its start", || {
        let _: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(first, ptr::null()) };
    });
    assert_violation("end precedes its start", || {
        let _: BoundedView<'_, i32> = unsafe { BoundedView::from_ptr_range(ptr::null(), first) };
    });
}

#[test]
fn test_unaligned_pointer_range() {
    let arr = [Triple::default(); 4];
    let first = arr.as_ptr();
    let last = unsafe { first.cast::<u8>().add(4).cast::<Triple>() };
    assert_violation("not a multiple of element size 3", || {
        let _: BoundedView<'_, Triple> = unsafe { BoundedView::from_ptr_range(first, last) };
    });
}

// ============================================================================
// ARRAYS AND CONTAINERS
// ============================================================================

#[test]
fn test_from_array() {
    let s: BoundedView<'_, i32> = BoundedView::from_array(&FIVE);
    assert_eq!(s.len(), 5);
    assert_eq!(s.as_ptr(), FIVE.as_ptr());

    let s: BoundedView<'_, i32, Fixed<5>> = BoundedView::from(&FIVE);
    assert_eq!(s.len(), 5);
    assert_view_well_formed(&s);

    let empty: [i32; 0] = [];
    let s: BoundedView<'_, i32, Fixed<0>> = BoundedView::from_array_fixed(&empty);
    assert!(s.is_empty());
    assert!(!s.as_ptr().is_null());
}

#[test]
fn test_from_containers() {
    let vec = vec![1, 2, 3];
    let boxed: Box<[i32]> = vec.clone().into_boxed_slice();
    let rc: Rc<[i32]> = Rc::from(vec.as_slice());
    let arc: Arc<[i32]> = Arc::from(vec.as_slice());

    let views = [
        BoundedView::from_storage(&vec),
        BoundedView::from_storage(&boxed),
        BoundedView::from_storage(&rc),
        BoundedView::from_storage(&arc),
        BoundedView::from(&vec),
        make_view(&vec),
    ];
    for view in views {
        assert_eq!(view, [1, 2, 3]);
        assert_view_well_formed(&view);
    }

    let fixed: BoundedView<'_, i32, Fixed<3>> = BoundedView::from_storage_fixed(&vec);
    assert_eq!(fixed.as_ptr(), vec.as_ptr());
}

#[test]
fn test_from_container_wrong_fixed_extent() {
    let vec = vec![1, 2, 3];
    assert_violation("fixed extent 4 bound to storage of length 3", || {
        let _: BoundedView<'_, i32, Fixed<4>> = BoundedView::from_storage_fixed(&vec);
    });
}

#[test]
fn test_from_strings() {
    let text = String::from("hello");
    let view = make_view(&text);
    assert_eq!(view.len(), 5);
    assert_eq!(view[0], b'h');
    assert_eq!(make_view("hi"), *b"hi");
}

// ============================================================================
// EXTENT CONVERSION
// ============================================================================

#[test]
fn test_fixed_to_dynamic() {
    let fixed: BoundedView<'_, i32, Fixed<5>> = BoundedView::from_array_fixed(&FIVE);
    let dynamic: BoundedView<'_, i32> = fixed.into();
    assert_eq!(dynamic.len(), 5);
    assert_eq!(dynamic.as_ptr(), fixed.as_ptr());
}

#[test]
fn test_dynamic_to_fixed() {
    let dynamic = BoundedView::from_slice(&FIVE[..]);
    let fixed: BoundedView<'_, i32, Fixed<5>> = dynamic.to_extent();
    assert_eq!(fixed, dynamic);

    assert_violation("fixed extent 2 bound to storage of length 5", || {
        let _: BoundedView<'_, i32, Fixed<2>> = dynamic.to_extent();
    });
}

#[test]
fn test_null_dynamic_to_fixed_zero() {
    let null: BoundedView<'_, i32> = BoundedView::default();
    let fixed: BoundedView<'_, i32, Fixed<0>> = null.to_extent();
    assert!(fixed.as_ptr().is_null());

    assert_violation("null base address with length 3", || {
        let _: BoundedView<'_, i32, Fixed<3>> = null.to_extent();
    });
}

#[test]
fn test_copy_and_assignment_alias() {
    let a = BoundedView::from_slice(&FIVE[..]);
    let mut b: BoundedView<'_, i32, Dynamic> = BoundedView::default();
    assert!(b.is_empty());
    b = a;
    assert_eq!(b.as_ptr(), a.as_ptr());
    assert_eq!(b.len(), a.len());
}

#[test]
fn test_static_and_local_views_unify() {
    fn longer<'x>(a: BoundedView<'x, i32>, b: BoundedView<'x, i32>) -> BoundedView<'x, i32> {
        if a.len() >= b.len() {
            a
        } else {
            b
        }
    }
    let local = [7, 8];
    let global: BoundedView<'static, i32> = BoundedView::from_array(&FIVE);
    let picked = longer(global, BoundedView::from_slice(&local[..]));
    assert_eq!(picked, FIVE);
    assert_eq!(*picked.front(), 1);

    let fixed: BoundedView<'static, i32, Fixed<5>> = BoundedView::from_array_fixed(&FIVE);
    let vec = vec![0; 5];
    let same = [fixed, BoundedView::from_slice_fixed(&vec[..])];
    assert_eq!(same[1].len(), 5);
}
