//! Byte reinterpretation and the `Byte` type.

use spanguard::{as_bytes, as_writable_bytes, to_byte, BoundedView, BoundedViewMut, Byte, Fixed};

#[test]
fn test_as_bytes_same_address_and_size() {
    let a = [1i32, 2, 3, 4];
    let s = BoundedView::from_slice(&a[..]);
    assert_eq!(s.len(), 4);

    let bs = as_bytes(s);
    assert_eq!(bs.as_ptr().cast::<u8>(), s.as_ptr().cast::<u8>());
    assert_eq!(bs.len(), s.size_bytes());
    assert_eq!(bs.len(), 16);
}

#[test]
fn test_as_bytes_of_fixed_view() {
    let a = [1u16, 2, 3];
    let s: BoundedView<'_, u16, Fixed<3>> = BoundedView::from_array_fixed(&a);
    let bs = s.as_bytes();
    assert_eq!(bs.len(), 6);
    let expected: Vec<Byte> = a.iter().flat_map(|v| v.to_ne_bytes()).map(Byte::new).collect();
    assert_eq!(bs, expected);
}

#[test]
fn test_as_bytes_of_null_view() {
    let s: BoundedView<'_, i32> = BoundedView::default();
    let bs = as_bytes(s);
    assert_eq!(bs.len(), s.len());
    assert_eq!(bs.len(), 0);
    assert_eq!(bs.size_bytes(), 0);
    assert!(bs.as_ptr().is_null());
}

#[test]
fn test_as_writable_bytes() {
    let mut a = [1i32, 2, 3, 4];
    let base = a.as_ptr().cast::<u8>();
    {
        let s = BoundedViewMut::from_slice(&mut a[..]);
        let bs = as_writable_bytes(s);
        assert_eq!(bs.as_ptr().cast::<u8>(), base);
        assert_eq!(bs.len(), 16);
    }

    let mut s = BoundedViewMut::from_slice(&mut a[..]);
    s.as_writable_bytes().fill(Byte::new(0));
    assert_eq!(a, [0; 4]);
}

#[test]
fn test_as_writable_bytes_of_null_view() {
    let s: BoundedViewMut<'_, i32> = BoundedViewMut::default();
    let bs = as_writable_bytes(s);
    assert_eq!(bs.len(), 0);
    assert!(bs.as_ptr().is_null());
}

// ============================================================================
// BYTE
// ============================================================================

#[test]
fn test_byte_construction() {
    let b = Byte::new(4);
    assert_eq!(b.to_u8(), 4);
    assert_eq!(to_byte::<12>(), Byte::new(12));
    assert_eq!(Byte::from(12u8), to_byte::<12>());
    assert_eq!(Byte::default(), Byte::new(0));
}

#[test]
fn test_byte_to_integer() {
    let b = Byte::new(0b1111_0000);
    assert_eq!(b.to_integer::<u8>(), 0b1111_0000);
    assert_eq!(b.to_integer::<u16>(), 0b1111_0000);
    assert_eq!(b.to_integer::<u32>(), 0b1111_0000);
    assert_eq!(b.to_integer::<u64>(), 0b1111_0000);
    assert_eq!(b.to_integer::<i16>(), 0b1111_0000);
    assert_eq!(b.to_integer::<i32>(), 0b1111_0000);
}

#[test]
fn test_byte_bitwise() {
    let mut b = to_byte::<0xFF>();
    let a = to_byte::<0x00>();
    assert_eq!(b | a, to_byte::<0xFF>());
    assert_eq!(a & b, a);
    assert_eq!(!b, a);
    b ^= to_byte::<0x0F>();
    assert_eq!(b, to_byte::<0xF0>());
    assert_eq!(b >> 4, to_byte::<0x0F>());
    assert_eq!(b << 1, to_byte::<0xE0>());
}

#[test]
fn test_byte_aliasing_reads_storage() {
    let storage = [0x0102_0304_i32];
    let bytes = as_bytes(BoundedView::<i32>::from_array(&storage));
    let expected = storage[0].to_ne_bytes();
    for (byte, raw) in bytes.iter().zip(expected) {
        assert_eq!(byte.to_u8(), raw);
    }
}
