//! Property tests over arbitrary timestamps and detail levels

use beat_core::{daily_bound, Timestamp, DAY, MAX_NUMERIC_DETAIL, UTC_OFFSET};
use beat_time::{
    convert, convert_beats, convert_centibeats, display, display_beats, display_centibeats,
    format_value, in_beats, BeatDigits,
};
use proptest::prelude::*;

fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    prop_oneof![
        any::<i64>().prop_map(Timestamp::from_millis),
        (-4_000_000_000_000i64..4_000_000_000_000).prop_map(Timestamp::from_millis),
        (-1e15f64..1e15).prop_map(|v| Timestamp::from_millis_f64(v).unwrap()),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(|v| Timestamp::from_millis_f64(v).unwrap()),
    ]
}

fn arb_numeric_detail() -> impl Strategy<Value = u32> {
    0..=MAX_NUMERIC_DETAIL
}

proptest! {
    #[test]
    fn convert_in_daily_range(t in arb_timestamp(), detail in arb_numeric_detail()) {
        let value = convert(detail, t).unwrap();
        prop_assert!(value < daily_bound(detail).unwrap());
    }

    #[test]
    fn display_width_and_roundtrip(t in arb_timestamp(), detail in arb_numeric_detail()) {
        let text = display(detail, t);
        let digits: String = text.chars().filter(|c| *c != '.').collect();
        prop_assert_eq!(digits.len(), 3 + detail as usize);
        prop_assert_eq!(text.len(), digits.len() + usize::from(detail > 0));
        prop_assert_eq!(text.contains('.'), detail > 0);
        prop_assert_eq!(digits.parse::<u128>().unwrap(), convert(detail, t).unwrap());
        prop_assert_eq!(text, format_value(detail, convert(detail, t).unwrap()));
    }

    #[test]
    fn wrappers_are_partial_applications(t in arb_timestamp()) {
        prop_assert_eq!(u128::from(convert_beats(t)), convert(0, t).unwrap());
        prop_assert_eq!(u128::from(convert_centibeats(t)), convert(2, t).unwrap());
        prop_assert_eq!(display_beats(t), display(0, t));
        prop_assert_eq!(display_centibeats(t), display(2, t));
    }

    #[test]
    fn periodic_over_one_day(millis in -(1i64 << 60)..(1i64 << 60), detail in arb_numeric_detail()) {
        let t = Timestamp::from_millis(millis);
        let next = Timestamp::from_millis(millis + i64::from(DAY));
        prop_assert_eq!(convert(detail, t).unwrap(), convert(detail, next).unwrap());
    }

    #[test]
    fn monotonic_within_day(
        day in -20_000i64..40_000,
        a in 0i64..86_400_000,
        b in 0i64..86_400_000,
        detail in 0u32..12,
    ) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let midnight = day * i64::from(DAY) - UTC_OFFSET;
        let v1 = convert(detail, Timestamp::from_millis(midnight + early)).unwrap();
        let v2 = convert(detail, Timestamp::from_millis(midnight + late)).unwrap();
        prop_assert!(v1 <= v2);
    }

    #[test]
    fn integral_floats_match_integers(millis in -(1i64 << 53)..(1i64 << 53), detail in arb_numeric_detail()) {
        let fixed = Timestamp::from_millis(millis);
        let float = Timestamp::from_millis_f64(millis as f64).unwrap();
        prop_assert_eq!(convert(detail, fixed).unwrap(), convert(detail, float).unwrap());
    }

    #[test]
    fn agrees_with_float_formula_on_beats(millis in -4_000_000_000_000i64..4_000_000_000_000) {
        // away from beat boundaries the float formula cannot round differently
        let shifted = (millis + UTC_OFFSET).rem_euclid(i64::from(DAY));
        prop_assume!(shifted % 86_400 != 0 && shifted % 86_400 != 86_399);
        let float = (((millis + UTC_OFFSET) as f64 / 86_400.0).floor() as i64).rem_euclid(1000);
        prop_assert_eq!(i64::from(convert_beats(Timestamp::from_millis(millis))), float);
    }

    #[test]
    fn length_is_plain_division(millis in any::<i32>()) {
        let t = Timestamp::from_millis(i64::from(millis));
        prop_assert_eq!(in_beats(t), f64::from(millis) / 86_400.0);
    }

    #[test]
    fn display_prefix_stable_past_numeric_range(t in arb_timestamp(), extra in 1u32..40) {
        let short = display(MAX_NUMERIC_DETAIL, t);
        let long = display(MAX_NUMERIC_DETAIL + extra, t);
        prop_assert!(long.starts_with(&short));
        let digits = BeatDigits::at(t);
        prop_assert_eq!(&long[..3], format!("{:03}", digits.beats()));
    }
}
