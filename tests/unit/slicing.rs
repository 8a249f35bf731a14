//! Sub-views: first, last, subspan, and their fixed-extent forms.

use super::common::{assert_view_well_formed, assert_violation, FIVE};
use spanguard::{BoundedView, Fixed, DYNAMIC_EXTENT};

fn fixed_five() -> BoundedView<'static, i32, Fixed<5>> {
    BoundedView::from_array_fixed(&FIVE)
}

// ============================================================================
// FIRST / LAST
// ============================================================================

#[test]
fn test_first() {
    let av = fixed_five();
    assert_eq!(av.first_fixed::<2>().len(), 2);
    assert_eq!(av.first(2).len(), 2);
    assert_eq!(av.first_fixed::<0>().len(), 0);
    assert_eq!(av.first(0).len(), 0);
    assert_eq!(av.first_fixed::<5>().len(), 5);
    assert_eq!(av.first(5), av);

    let empty: BoundedView<'_, i32> = BoundedView::default();
    assert_eq!(empty.first_fixed::<0>().len(), 0);
    assert_eq!(empty.first(0).len(), 0);
}

#[test]
fn test_first_past_end() {
    let av = fixed_five();
    assert_violation("count 6 out of range for view of length 5", || av.first(6));

    let empty: BoundedView<'_, i32> = BoundedView::default();
    assert_violation("count 1 out of range for view of length 0", || {
        empty.first_fixed::<1>()
    });
}

#[test]
fn test_last() {
    let av = fixed_five();
    assert_eq!(av.last_fixed::<2>(), [4, 5]);
    assert_eq!(av.last(2), [4, 5]);
    assert_eq!(av.last_fixed::<0>().len(), 0);
    assert_eq!(av.last(0).len(), 0);
    assert_eq!(av.last_fixed::<5>().len(), 5);
    assert_eq!(av.last(5), av);

    let empty: BoundedView<'_, i32> = BoundedView::default();
    assert_eq!(empty.last_fixed::<0>().len(), 0);
    assert_eq!(empty.last(0).len(), 0);
}

#[test]
fn test_last_past_end() {
    let av = fixed_five();
    assert_violation("count 6 out of range", || av.last(6));
}

// ============================================================================
// SUBSPAN
// ============================================================================

#[test]
fn test_subspan_fixed() {
    let av = fixed_five();

    let two: BoundedView<'_, i32, Fixed<2>> = av.subspan_fixed::<2, 2>();
    assert_eq!(two, [3, 4]);
    assert_eq!(av.subspan(2, 2).len(), 2);
    assert_eq!(av.subspan(2, 3).len(), 3);

    let none: BoundedView<'_, i32, Fixed<0>> = av.subspan_fixed::<0, 0>();
    assert!(none.is_empty());
    let all: BoundedView<'_, i32, Fixed<5>> = av.subspan_fixed::<0, 5>();
    assert_eq!(all, av);

    let tail_zero: BoundedView<'_, i32, Fixed<0>> = av.subspan_fixed::<4, 0>();
    assert!(tail_zero.is_empty());
    assert_eq!(av.subspan(4, 0).len(), 0);
    assert_eq!(av.subspan(5, 0).len(), 0);
}

#[test]
fn test_subspan_tail() {
    let av = fixed_five();
    let tail = av.subspan_tail::<1>();
    assert_eq!(tail.len(), 4);
    let fixed_tail: BoundedView<'_, i32, Fixed<4>> = tail.to_extent();
    assert_eq!(fixed_tail, [2, 3, 4, 5]);
    assert!(av.subspan_tail::<5>().is_empty());
}

#[test]
fn test_subspan_past_end() {
    let av = fixed_five();
    assert_violation("count 6 out of range for view of length 5", || av.subspan(0, 6));
    assert_violation("count 5 out of range for view of length 4", || av.subspan(1, 5));
    assert_violation("offset 6 out of range for view of length 5", || av.subspan(6, 0));
    assert_violation("offset 6 out of range", || av.subspan_from(6));
}

#[test]
fn test_subspan_on_empty() {
    let av: BoundedView<'_, i32> = BoundedView::default();
    assert_eq!(av.subspan_fixed::<0, 0>().len(), 0);
    assert_eq!(av.subspan(0, 0).len(), 0);
    assert_eq!(av.subspan_from(0).len(), 0);
    assert_violation("offset 1 out of range for view of length 0", || {
        av.subspan_fixed::<1, 0>()
    });
    assert_violation("offset 1 out of range", || av.subspan_from(1));
}

#[test]
fn test_subspan_from() {
    for av in [BoundedView::from_slice(&FIVE[..]), fixed_five().into()] {
        assert_eq!(av.subspan_from(0).len(), 5);
        assert_eq!(av.subspan_from(1).len(), 4);
        assert_eq!(av.subspan_from(4).len(), 1);
        assert_eq!(av.subspan_from(5).len(), 0);
        let av2 = av.subspan_from(1);
        for i in 0..4 {
            assert_eq!(av2[i], i as i32 + 2);
        }
    }
}

#[test]
fn test_dynamic_extent_means_rest() {
    let av = fixed_five();
    assert_eq!(av.subspan(2, DYNAMIC_EXTENT), [3, 4, 5]);
    assert_eq!(av.subspan(2, DYNAMIC_EXTENT), av.subspan_from(2));
}

#[test]
fn test_subviews_alias_parent() {
    let av = fixed_five();
    let mid = av.subspan(1, 3);
    assert_eq!(mid, [2, 3, 4]);
    assert_eq!(mid.as_ptr(), FIVE.as_ptr().wrapping_add(1));
    assert_eq!(mid.first(1).as_ptr(), mid.as_ptr());
    assert_eq!(av.last(0).as_ptr(), FIVE.as_ptr().wrapping_add(5));
    assert_view_well_formed(&mid);
}

#[test]
fn test_repeated_empty_slicing() {
    let av = fixed_five();
    let mut cur = av.subspan_from(0);
    while !cur.is_empty() {
        cur = cur.subspan_from(1);
    }
    for _ in 0..3 {
        cur = cur.first(0).last(0).subspan(0, 0);
        assert_eq!(cur.len(), 0);
    }
}

// ============================================================================
// ELEMENT ACCESS
// ============================================================================

#[test]
fn test_front_back() {
    let av = fixed_five();
    assert_eq!(*av.front(), 1);
    assert_eq!(*av.back(), 5);

    let empty: BoundedView<'_, i32> = BoundedView::default();
    assert_violation("front() called on an empty view", || empty.front());
    assert_violation("back() called on an empty view", || empty.back());
}

#[test]
fn test_index_and_get() {
    let av = fixed_five();
    assert_eq!(av[0], 1);
    assert_eq!(av[4], 5);
    assert_eq!(av.get(4), Some(&5));
    assert_eq!(av.get(5), None);
    assert_violation("index 5 out of range for view of length 5", || av[5]);
}

#[test]
fn test_len_and_size_bytes() {
    let av = fixed_five();
    assert_eq!(av.len(), 5);
    assert_eq!(av.size_bytes(), 5 * std::mem::size_of::<i32>());
    assert_eq!(spanguard::ssize(&av), 5);
}
