//! Integration tests for `Money`, `Ratio` arithmetic on money, and the
//! default-currency setting.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use tam_core::{Error, Ratio, RoundingMode, ScopedDefaultCurrency};
use tam_money::currencies::{EUR, JPY, USD};
use tam_money::{Currency, Money};

fn dollars(amount: Decimal) -> Money {
    Money::dollars(amount).unwrap()
}

fn yens(amount: i64) -> Money {
    Money::yens(amount).unwrap()
}

// ─── Construction ─────────────────────────────────────────────────────────────

#[test]
fn scale_must_match_currency() {
    assert!(matches!(
        Money::new(dec!(1.000), &USD),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(Money::new(dec!(1.0), &JPY), Err(Error::InvalidArgument(_))));
    assert!(Money::new(dec!(1.00), &USD).is_ok());
    assert_eq!(
        Money::rounded(dec!(1.005), &USD, RoundingMode::HalfUp).unwrap(),
        dollars(dec!(1.01))
    );
}

// ─── Arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn yen_arithmetic() {
    let y50 = yens(50);
    assert_eq!(y50.plus(&yens(30)).unwrap(), yens(80));
    assert_eq!(y50.times(dec!(1.6)).unwrap(), yens(80));
    assert_eq!(yens(100).minus(&yens(-100)).unwrap(), yens(200));
    assert_eq!(yens(-100).abs(), yens(100));
}

#[test]
fn divide() {
    let d100 = dollars(dec!(100));
    assert_eq!(
        d100.divided_by(dec!(3), RoundingMode::HalfEven).unwrap(),
        dollars(dec!(33.33))
    );
    assert_eq!(
        d100.divided_by(dec!(6), RoundingMode::HalfEven).unwrap(),
        dollars(dec!(16.67))
    );
    assert_eq!(
        yens(100).divided_by(dec!(6), RoundingMode::HalfEven).unwrap(),
        yens(17)
    );
    assert_eq!(
        yens(50).divided_by(dec!(5), RoundingMode::Unnecessary).unwrap(),
        yens(10)
    );
    assert!(matches!(
        d100.divided_by(Decimal::ZERO, RoundingMode::HalfEven),
        Err(Error::DivisionByZero)
    ));
}

#[test]
fn multiply() {
    let d15 = dollars(dec!(15));
    let d100 = dollars(dec!(100));
    assert_eq!(d15.times(dec!(10)).unwrap(), dollars(dec!(150)));
    assert_eq!(d15.times(dec!(0.1)).unwrap(), dollars(dec!(1.5)));
    assert_eq!(d100.times(dec!(0.7)).unwrap(), dollars(dec!(70)));
    assert_eq!(d100.times(dec!(0.66666667)).unwrap(), dollars(dec!(66.67)));
    assert_eq!(
        d100.times_rounded(dec!(0.66666667), RoundingMode::Down).unwrap(),
        dollars(dec!(66.66))
    );
    assert_eq!(
        d100.negated()
            .times_rounded(dec!(0.666666), RoundingMode::Down)
            .unwrap(),
        dollars(dec!(-66.66))
    );
}

#[test]
fn minimum_increment() {
    assert_eq!(dollars(dec!(100)).minimum_increment(), dollars(dec!(0.01)));
    assert_eq!(yens(50).minimum_increment(), yens(1));
    assert_eq!(dollars(dec!(2.51)).incremented().unwrap(), dollars(dec!(2.52)));
    assert_eq!(yens(50).incremented().unwrap(), yens(51));
}

#[test]
fn different_currencies_do_not_mix() {
    let d15 = dollars(dec!(15));
    let e2_51 = Money::euros(dec!(2.51)).unwrap();
    assert!(matches!(d15.plus(&e2_51), Err(Error::CurrencyMismatch { .. })));
    assert!(matches!(d15.minus(&e2_51), Err(Error::CurrencyMismatch { .. })));
    assert!(matches!(
        d15.is_greater_than(&e2_51),
        Err(Error::CurrencyMismatch { .. })
    ));
    assert!(matches!(
        d15.divided_by_money(&e2_51),
        Err(Error::CurrencyMismatch { .. })
    ));
    assert_ne!(dollars(dec!(2.51)), e2_51);
}

#[test]
fn zero_is_currency_neutral() {
    let d15 = dollars(dec!(15));
    let d0 = Money::zero(&USD);
    let y0 = Money::zero(&JPY);
    assert_eq!(d15.plus(&dollars(dec!(100))).unwrap(), dollars(dec!(115)));
    assert_eq!(yens(100).plus(&yens(-100)).unwrap(), yens(0));
    assert_eq!(d15.plus(&d0).unwrap(), d15);
    assert_eq!(d15.plus(&y0).unwrap(), d15);
    assert_eq!(d0.plus(&y0).unwrap(), d0);
    assert_eq!(y0.plus(&d0).unwrap(), y0);
    assert_eq!(
        d15.compare_to(&y0).unwrap(),
        std::cmp::Ordering::Greater
    );
}

#[test]
fn division_by_money() {
    let ratio = |a: Decimal, b: Decimal| dollars(a).divided_by_money(&dollars(b)).unwrap();
    assert_eq!(
        ratio(dec!(5), dec!(2))
            .decimal_value(1, RoundingMode::Unnecessary)
            .unwrap(),
        dec!(2.5)
    );
    assert_eq!(
        ratio(dec!(5), dec!(4))
            .decimal_value(2, RoundingMode::Unnecessary)
            .unwrap(),
        dec!(1.25)
    );
    assert_eq!(
        ratio(dec!(5), dec!(1))
            .decimal_value(0, RoundingMode::Unnecessary)
            .unwrap(),
        dec!(5)
    );
    assert!(matches!(
        ratio(dec!(5), dec!(2)).decimal_value(0, RoundingMode::Unnecessary),
        Err(Error::InexactResult(_))
    ));
    assert!(matches!(
        ratio(dec!(10), dec!(3)).decimal_value(5, RoundingMode::Unnecessary),
        Err(Error::InexactResult(_))
    ));
    assert_eq!(
        ratio(dec!(100), dec!(3))
            .decimal_value(2, RoundingMode::HalfEven)
            .unwrap(),
        dec!(33.33)
    );
    assert!(matches!(
        dollars(dec!(5)).divided_by_money(&Money::zero(&USD)),
        Err(Error::DivisionByZero)
    ));
}

// ─── Comparison / equality ────────────────────────────────────────────────────

#[test]
fn sort_by_compare_to() {
    let mut monies = vec![
        dollars(dec!(0)),
        dollars(dec!(10.1)),
        dollars(dec!(0)),
        dollars(dec!(9.99)),
        dollars(dec!(-9.00)),
        dollars(dec!(-10)),
        dollars(dec!(10)),
    ];
    monies.sort_by(|a, b| a.compare_to(b).unwrap());
    let expected: Vec<_> = [
        dec!(-10),
        dec!(-9),
        dec!(0),
        dec!(0),
        dec!(9.99),
        dec!(10),
        dec!(10.1),
    ]
    .into_iter()
    .map(dollars)
    .collect();
    assert_eq!(monies, expected);

    let d15 = dollars(dec!(15));
    let d2_51 = dollars(dec!(2.51));
    assert!(d15.is_greater_than(&d2_51).unwrap());
    assert!(d2_51.is_less_than(&d15).unwrap());
    assert!(!d15.is_greater_than(&d15).unwrap());
    assert!(!d15.is_less_than(&d15).unwrap());
}

#[test]
fn equality_and_hash() {
    let a = dollars(dec!(2.51));
    let b = Money::of(dec!(2.510), &USD).unwrap();
    assert_eq!(a, b);
    let set: HashSet<_> = [a, b, dollars(dec!(15))].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert_eq!(a.negated().negated(), a);
    assert_eq!(dollars(dec!(15)).negated(), dollars(dec!(-15)));
}

#[test]
fn sign_predicates() {
    let d15 = dollars(dec!(15));
    let minus10 = dollars(dec!(-10));
    let zero = dollars(dec!(0));
    assert!(d15.is_positive() && !d15.is_negative() && !d15.is_zero());
    assert!(minus10.is_negative() && !minus10.is_positive());
    assert!(zero.is_zero() && !zero.is_positive() && !zero.is_negative());
}

// ─── Ratios ───────────────────────────────────────────────────────────────────

#[test]
fn social_security_split() {
    let benefit = dollars(dec!(200));
    let two_thirds = Ratio::of(2, 3).unwrap();
    let one_third = Ratio::of(1, 3).unwrap();
    assert_eq!(
        benefit.applying(&two_thirds, 0, RoundingMode::Down).unwrap(),
        dollars(dec!(133))
    );
    assert_eq!(
        benefit.applying(&one_third, 0, RoundingMode::Down).unwrap(),
        dollars(dec!(66))
    );
    assert_eq!(
        dollars(dec!(100))
            .applying(&one_third, 1, RoundingMode::Up)
            .unwrap(),
        dollars(dec!(33.40))
    );
    assert_eq!(
        dollars(dec!(100))
            .applying_at_currency_scale(&one_third, RoundingMode::HalfEven)
            .unwrap(),
        dollars(dec!(33.33))
    );
    assert!(matches!(
        dollars(dec!(100)).applying(&one_third, 3, RoundingMode::HalfEven),
        Err(Error::InexactResult(_))
    ));
}

// ─── Sums and the default currency ────────────────────────────────────────────

#[test]
fn sum_uses_default_currency_when_empty() {
    {
        let _guard = ScopedDefaultCurrency::new("JPY");
        assert_eq!(Money::sum(&Vec::<Money>::new()).unwrap(), yens(0));
        assert_eq!(Currency::default_currency().unwrap(), &JPY);

        let mut monies: Vec<_> = [1, 2, 4, 8, 16, 32].into_iter().map(yens).collect();
        assert_eq!(Money::sum(&monies).unwrap(), yens(63));

        monies.push(dollars(dec!(64)));
        assert!(matches!(
            Money::sum(&monies),
            Err(Error::CurrencyMismatch { .. })
        ));
    }
    {
        let _guard = ScopedDefaultCurrency::new("EUR");
        assert_eq!(Money::sum(&Vec::<Money>::new()).unwrap(), Money::zero(&EUR));
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn cents() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000).prop_map(|c| Money::new(Decimal::new(c, 2), &USD).unwrap())
}

proptest! {
    #[test]
    fn plus_then_minus_is_identity(a in cents(), b in cents()) {
        prop_assert_eq!(a.plus(&b).unwrap().minus(&b).unwrap(), a);
    }

    #[test]
    fn scale_is_preserved(a in cents(), factor in -10_000i64..10_000) {
        let product = a.times(Decimal::new(factor, 3)).unwrap();
        prop_assert_eq!(product.amount().scale(), 2);
        let quotient = a.divided_by(dec!(7), RoundingMode::HalfEven).unwrap();
        prop_assert_eq!(quotient.amount().scale(), 2);
    }

    #[test]
    fn split_by_ratio_never_exceeds_whole(a in cents(), n in 1i64..100, d in 100i64..1000) {
        let part = a.abs().applying_at_currency_scale(&Ratio::of(n, d).unwrap(), RoundingMode::Down).unwrap();
        prop_assert!(!part.is_greater_than(&a.abs()).unwrap());
        prop_assert!(!part.is_negative());
    }
}
