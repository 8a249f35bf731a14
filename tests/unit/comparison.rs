//! Content comparison between views.

use spanguard::{BoundedView, Fixed};
use std::cmp::Ordering;

fn view(items: &[i32]) -> BoundedView<'_, i32> {
    BoundedView::from_slice(items)
}

/// Every relational operator must agree with `cmp`.
fn assert_ordering(a: BoundedView<'_, i32>, b: BoundedView<'_, i32>, expected: Ordering) {
    assert_eq!(a.cmp(&b), expected);
    assert_eq!(b.cmp(&a), expected.reverse());
    assert_eq!(a == b, expected == Ordering::Equal);
    assert_eq!(a != b, expected != Ordering::Equal);
    assert_eq!(a < b, expected == Ordering::Less);
    assert_eq!(a <= b, expected != Ordering::Greater);
    assert_eq!(a > b, expected == Ordering::Greater);
    assert_eq!(a >= b, expected != Ordering::Less);
}

#[test]
fn test_empty_views_are_equal() {
    let s1: BoundedView<'_, i32> = BoundedView::default();
    let s2: BoundedView<'_, i32> = BoundedView::default();
    assert_ordering(s1, s2, Ordering::Equal);
}

#[test]
fn test_same_storage_is_equal() {
    let arr = [2, 1];
    assert_ordering(view(&arr), view(&arr), Ordering::Equal);
}

#[test]
fn test_empty_is_less_than_non_empty() {
    let arr = [2, 1];
    assert_ordering(BoundedView::default(), view(&arr), Ordering::Less);
}

#[test]
fn test_distinct_storage_equal_content() {
    let arr1 = [1, 2];
    let arr2 = [1, 2];
    assert_ordering(view(&arr1), view(&arr2), Ordering::Equal);
}

#[test]
fn test_prefix_is_less() {
    let arr = [1, 2, 3];
    assert_ordering(view(&arr[..2]), view(&arr), Ordering::Less);
}

#[test]
fn test_first_difference_decides() {
    let arr1 = [1, 2, 3];
    let arr2 = [1, 3];
    assert_ordering(view(&arr1), view(&arr2), Ordering::Less);

    let arr1 = [1, 2, 3];
    let arr2 = [1, 2, 4];
    assert_ordering(view(&arr1), view(&arr2), Ordering::Less);
}

#[test]
fn test_fixed_and_dynamic_compare() {
    let arr = [1, 2, 3];
    let fixed: BoundedView<'_, i32, Fixed<3>> = BoundedView::from_array_fixed(&arr);
    let other = vec![1, 2, 4];
    let dynamic = BoundedView::from_slice(other.as_slice());
    assert!(fixed != dynamic);
    assert!(fixed < dynamic);
    assert!(dynamic > fixed);
}

#[test]
fn test_usable_as_map_key() {
    use std::collections::{BTreeSet, HashSet};

    let a = [1, 2];
    let b = [1, 2];
    let c = [3];

    let hashed: HashSet<BoundedView<'_, i32>> = [view(&a), view(&b), view(&c)].into_iter().collect();
    assert_eq!(hashed.len(), 2);

    let ordered: BTreeSet<BoundedView<'_, i32>> = [view(&c), view(&a)].into_iter().collect();
    assert_eq!(ordered.first(), Some(&view(&a)));
}
