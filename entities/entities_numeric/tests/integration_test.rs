//! Integration tests for entities_numeric crate
//!
//! These tests exercise the big number primitive at sizes well past the
//! native integer range, together with the radix and digit sequence types.

use entities_numeric::*;

#[test]
fn test_divmod_contract_across_magnitudes() {
    let dividends = [
        "0",
        "1",
        "4503599627370495",
        "4503599627370496",
        "18446744073709551617",
        "8320987112741390144276341183223364380754172606361245952449277696409600000000000000",
    ];
    let divisors = ["1", "2", "7", "4503599627370496", "18446744073709551629"];

    for a in dividends {
        let a: BigNumber = a.parse().unwrap();
        for b in divisors {
            let b: BigNumber = b.parse().unwrap();
            let (q, r) = a.div_mod(&b).unwrap();
            assert_eq!(q.mul_add(&b, &r), a, "a == q*b + r for {} / {}", a, b);
            assert!(!r.is_negative());
            assert!(r < b);
        }
    }
}

#[test]
fn test_divmod_by_zero_is_reported() {
    let a: BigNumber = "123456789012345678901234567890".parse().unwrap();
    let result = a.div_mod(&BigNumber::zero());
    assert_eq!(result, Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_accumulated_product_matches_power() {
    // 2^52 multiplied by itself five times through the public primitive
    let radix = Radix::DEFAULT.to_big();
    let mut acc = BigNumber::one();
    for _ in 0..5 {
        acc = acc.times(&radix);
    }
    assert_eq!(acc, BigNumber::from_u64(2).pow(260));
    assert_eq!(acc.bit_length(), 261);
}

#[test]
fn test_sum_of_many_words() {
    let mut acc = BigNumber::zero();
    for _ in 0..1000 {
        acc = acc.plus_small(u64::MAX);
    }
    let expected = BigNumber::from_u64(u64::MAX).times_small(1000);
    assert_eq!(acc, expected);
}

#[test]
fn test_digit_sequence_canonical_against_radix() {
    let radix = Radix::new(1 << 52).unwrap();
    let canonical = DigitSequence::from(vec![
        0,
        4472561264986224,
        2043848730123310,
        3657033000183100,
        1533264680407645,
        4491,
    ]);
    assert!(canonical.is_canonical(radix));

    let out_of_range = DigitSequence::from(vec![1 << 52]);
    assert!(!out_of_range.is_canonical(radix));
    assert!(out_of_range.is_canonical(Radix::new((1 << 52) + 1).unwrap()));
}

#[test]
fn test_error_messages() {
    let err = Radix::new(0).unwrap_err();
    assert!(err.to_string().contains("positive"));

    let err = "x".parse::<BigNumber>().unwrap_err();
    assert!(matches!(err, ArithmeticError::InvalidArgument(_)));
}
