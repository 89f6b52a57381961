use fixbn::{Error, U64, U128};

fn u64v(value: u64) -> U64 {
    U64::try_from(value).unwrap()
}

fn as_u64(value: U64) -> u64 {
    u64::try_from(value).unwrap()
}

#[test]
fn pow_mod_textbook_example() {
    let mut result = U64::ZERO;

    U64::pow_mod(&u64v(4), &u64v(13), &u64v(497), &mut result).unwrap();

    assert_eq!(as_u64(result), 445);
}

#[test]
fn pow_mod_zero_exponent_is_one() {
    let mut result = U64::ZERO;

    U64::pow_mod(&u64v(12_345), &U64::ZERO, &u64v(497), &mut result).unwrap();
    assert_eq!(result, U64::one());

    U64::pow_mod(&U64::ZERO, &U64::ZERO, &u64v(497), &mut result).unwrap();
    assert_eq!(result, U64::one());
}

#[test]
fn pow_mod_modulus_one_is_zero() {
    let mut result = U64::MAX;

    U64::pow_mod(&u64v(5), &U64::ZERO, &U64::one(), &mut result).unwrap();
    assert!(result.is_zero());

    U64::pow_mod(&u64v(5), &u64v(3), &U64::one(), &mut result).unwrap();
    assert!(result.is_zero());
}

#[test]
fn pow_mod_base_larger_than_modulus() {
    let mut result = U64::ZERO;

    // 1001 ≡ 4 (mod 997), 4^3 = 64
    U64::pow_mod(&u64v(1_001), &u64v(3), &u64v(997), &mut result).unwrap();
    assert_eq!(as_u64(result), 64);

    // 1004 ≡ 7 (mod 997), 7^3 = 343
    U64::pow_mod(&u64v(1_004), &u64v(3), &u64v(997), &mut result).unwrap();
    assert_eq!(as_u64(result), 343);
}

#[test]
fn pow_mod_32_bit_modulus() {
    let mut result = U64::ZERO;

    U64::pow_mod(
        &u64v(0xDEAD_BEEF),
        &u64v(0x1_0001),
        &u64v(0xFFFF_FFFB),
        &mut result,
    )
    .unwrap();

    assert_eq!(as_u64(result), 2_385_742_825);
}

#[test]
fn pow_mod_fermat_little_theorem() {
    // p = 2^61 - 1 is prime; squares of residues fit in 128 bits
    let p = U128::try_from((1u128 << 61) - 1).unwrap();
    let exponent = p - U128::one();

    for base in [2u128, 3, 0xDEAD_BEEF, 1 << 60] {
        let b = U128::try_from(base).unwrap();

        assert_eq!(b.checked_pow_mod(exponent, p).unwrap(), U128::one());
    }
}

#[test]
fn pow_mod_zero_modulus_is_divide_by_zero() {
    let mut result = U64::ZERO;

    assert_eq!(
        U64::pow_mod(&u64v(4), &u64v(13), &U64::ZERO, &mut result),
        Err(Error::DivideByZero)
    );
    assert_eq!(
        U64::pow_mod(&u64v(4), &U64::ZERO, &U64::ZERO, &mut result),
        Err(Error::DivideByZero)
    );
}

#[test]
fn pow_mod_reports_products_wider_than_width() {
    let mut result = U64::ZERO;
    let modulus = u64v(0xFFFF_FFFF_FFFF_FFC5);

    assert_eq!(
        U64::pow_mod(&u64v(0xFFFF_FFFF_0000_0000), &u64v(2), &modulus, &mut result),
        Err(Error::Overflow)
    );
}
