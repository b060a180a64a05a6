use crate::core::{Counter, Element};
use crate::tests::util::WeightedSum;

#[test]
fn plain_increment_adds_one() {
    let mut count = 0_u64;
    count.increment();
    count.increment();
    assert_eq!(2, count);

    let mut value = 0.5_f64;
    value.increment();
    assert_approx_eq!(value, 1.5, 0.0000001);
}

#[test]
fn plain_add_adds_weight() {
    let mut count = 3_i32;
    count.add(-5);
    assert_eq!(-2, count);

    let mut value = 1.0_f32;
    value.add(0.25);
    assert_approx_eq!(value, 1.25, 0.0000001);
}

#[test]
fn repeated_increments_match_single_add() {
    for k in 0..50_u32 {
        let mut incremented = 0_u32;
        for _ in 0..k {
            incremented.increment();
        }
        let mut added = 0_u32;
        added.add(k);
        assert_eq!(incremented, added);
    }
}

#[test]
fn plain_merge_adds_other() {
    let mut count = 7_u16;
    count.merge(&5);
    assert_eq!(12, count);
}

#[test]
fn integer_scale_truncates() {
    let mut count = 7_u32;
    Element::scale(&mut count, 0.5);
    assert_eq!(3, count);

    let mut negative = -7_i64;
    Element::scale(&mut negative, 0.5);
    assert_eq!(-3, negative);
}

#[test]
fn integer_scale_saturates() {
    let mut count = 200_u8;
    Element::scale(&mut count, 2.0);
    assert_eq!(u8::MAX, count);

    let mut infinite = 1_u64;
    Element::scale(&mut infinite, 1.0 / 0.0);
    assert_eq!(u64::MAX, infinite);
}

#[test]
fn float_scale_by_inverse_zero_is_infinite() {
    let mut value = 2.0_f64;
    Element::scale(&mut value, 1.0 / 0.0);
    assert!(value.is_infinite());
}

#[test]
fn counter_scaled_and_as_f64() {
    assert_eq!(10, 4_i32.scaled(2.5));
    assert_approx_eq!(5.0_f32.as_f64(), 5.0, 0.0);
}

#[test]
fn accumulator_increment_calls_without_weight() {
    let mut acc = WeightedSum::default();
    acc.increment();
    acc.increment();
    assert_eq!(WeightedSum::new(2.0, 2), acc);
}

#[test]
fn accumulator_add_calls_with_weight() {
    let mut acc = WeightedSum::default();
    Element::add(&mut acc, 2.5);
    Element::add(&mut acc, 0.5);
    assert_eq!(WeightedSum::new(3.0, 2), acc);
}

#[test]
fn accumulator_merge_and_scale() {
    let mut acc = WeightedSum::new(1.0, 1);
    Element::merge(&mut acc, &WeightedSum::new(3.0, 2));
    assert_eq!(WeightedSum::new(4.0, 3), acc);
    Element::scale(&mut acc, 0.5);
    assert_eq!(WeightedSum::new(2.0, 3), acc);
}
