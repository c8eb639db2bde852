#![no_main]
//! Fuzz the daily conversion with arbitrary timestamps and detail levels

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use beat_core::{daily_bound, Timestamp, MAX_NUMERIC_DETAIL};
use beat_time::{convert, display};

#[derive(Arbitrary, Debug)]
enum Input {
    Millis(i64),
    Float(f64),
}

#[derive(Arbitrary, Debug)]
struct Case {
    input: Input,
    detail: u8,
}

fuzz_target!(|case: Case| {
    let timestamp = match case.input {
        Input::Millis(millis) => Timestamp::from_millis(millis),
        Input::Float(millis) => match Timestamp::from_millis_f64(millis) {
            Ok(timestamp) => timestamp,
            Err(_) => {
                assert!(!millis.is_finite());
                return;
            }
        },
    };
    let detail = u32::from(case.detail);

    let text = display(detail, timestamp);
    let digits: String = text.chars().filter(|c| *c != '.').collect();
    assert_eq!(digits.len(), 3 + detail as usize);
    assert_eq!(text.contains('.'), detail > 0);

    match convert(detail, timestamp) {
        Ok(value) => {
            assert!(value < daily_bound(detail).unwrap());
            assert_eq!(digits.parse::<u128>().unwrap(), value);
        }
        Err(_) => assert!(detail > MAX_NUMERIC_DETAIL),
    }
});
