use fixbn::{Fixed, U256, U64, U64x32};

use std::cmp::Ordering;

fn u64v(value: u64) -> U64 {
    U64::try_from(value).unwrap()
}

#[test]
fn fixed_constants() {
    assert_eq!(U64::BITS, 64);
    assert_eq!(U64::LIMBS, 4);
    assert_eq!(U256::BITS, 256);

    assert_eq!(U64::ZERO.limbs(), &[0u16; 4]);
    assert_eq!(U64::MAX.limbs(), &[0xFFFFu16; 4]);
    assert_eq!(U64::one().limbs(), &[1u16, 0, 0, 0]);
    assert_eq!(U64::default(), U64::ZERO);
}

#[test]
fn fixed_clear_and_copy() {
    let mut a = u64v(0xDEAD_BEEF_0000_1234);
    assert!(!a.is_zero());

    let mut b = U64::ZERO;
    b.copy_from(&a);
    assert_eq!(b, a);

    a.clear();
    assert!(a.is_zero());
    assert_eq!(a, U64::ZERO);

    // the copy is independent of its source
    assert_eq!(b, u64v(0xDEAD_BEEF_0000_1234));
}

#[test]
fn fixed_is_zero_checks_every_limb() {
    assert!(U64::ZERO.is_zero());
    assert!(!U64::from_limbs([0, 0, 0, 1]).is_zero());
    assert!(!U64::from_limbs([1, 0, 0, 0]).is_zero());
}

#[test]
fn fixed_compare_is_most_significant_first() {
    // limb 0 differs the other way from limb 3, limb 3 must win
    let high = U64::from_limbs([0x0000, 0, 0, 0x0001]);
    let low = U64::from_limbs([0xFFFF, 0, 0, 0x0000]);

    assert_eq!(U64::compare(&high, &low), Ordering::Greater);
    assert_eq!(U64::compare(&low, &high), Ordering::Less);
    assert_eq!(U64::compare(&high, &high), Ordering::Equal);

    assert!(high > low);
    assert_eq!(high.cmp(&low), Ordering::Greater);

    let mut sorted = vec![u64v(300), u64v(1 << 40), u64v(7), u64v(1 << 16)];
    sorted.sort();
    assert_eq!(sorted, vec![u64v(7), u64v(300), u64v(1 << 16), u64v(1 << 40)]);
}

#[test]
fn fixed_get_and_set_bit() {
    let mut v = U64::ZERO;

    v.set_bit(0, true);
    v.set_bit(17, true);
    v.set_bit(63, true);

    assert!(v.bit(0));
    assert!(v.bit(17));
    assert!(v.bit(63));
    assert!(!v.bit(1));
    assert!(!v.bit(16));

    assert_eq!(v.limbs(), &[0x0001, 0x0002, 0x0000, 0x8000]);

    v.set_bit(17, false);
    assert!(!v.bit(17));
    assert_eq!(v.limbs(), &[0x0001, 0x0000, 0x0000, 0x8000]);

    // clearing an already clear bit is a no-op
    v.set_bit(40, false);
    assert_eq!(v.limbs(), &[0x0001, 0x0000, 0x0000, 0x8000]);
}

#[test]
fn fixed_checked_bit_bounds() {
    let v = U64::MAX;

    assert_eq!(v.checked_bit(63), Some(true));
    assert_eq!(v.checked_bit(64), None);
}

#[test]
#[should_panic(expected = "bit index out of range")]
fn fixed_bit_out_of_range_panics() {
    let _ = U64::ZERO.bit(64);
}

#[test]
#[should_panic(expected = "bit index out of range")]
fn fixed_set_bit_out_of_range_panics() {
    let mut v = U64::ZERO;
    v.set_bit(64, true);
}

#[test]
fn fixed_leading_zeros_and_bit_len() {
    assert_eq!(U64::ZERO.leading_zeros(), 64);
    assert_eq!(U64::ZERO.bit_len(), 0);

    assert_eq!(U64::one().leading_zeros(), 63);
    assert_eq!(U64::MAX.leading_zeros(), 0);

    assert_eq!(u64v(0x0001_0000).leading_zeros(), 47);
    assert_eq!(u64v(0x0001_0000).bit_len(), 17);

    let wide = U64x32::from_limbs([0, 0x10]);
    assert_eq!(wide.leading_zeros(), 27);
}

#[test]
fn fixed_as_ref_exposes_limbs() {
    let v = u64v(0x0004_0003_0002_0001);
    let limbs: &[u16] = v.as_ref();

    assert_eq!(limbs, &[1, 2, 3, 4]);

    let arr: [u16; 4] = v.into();
    assert_eq!(Fixed::from(arr), v);
}
