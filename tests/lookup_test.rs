//! Value → name and name → value on plain enums

use enum_names::prelude::*;
use enum_names::{EnumRange, ReflectError, cast, name_in, name_table, value_in, value_in_checked};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(range = -1..=3)]
#[repr(i8)]
enum Rgb {
    red,
    green,
    blue,
    unknown = -1,
}

// No attributes: default window.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
enum Plain {
    First,
    Second,
    Far = 120,
    Outside = 500,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(range = 0..=8)]
enum Sparse {
    A = 0,
    B = 5,
}

#[test]
fn test_name_of_declared() {
    assert_eq!(name_of(Rgb::blue), "blue");
    assert_eq!(name_of(Rgb::red), "red");
    assert_eq!(name_of(Rgb::unknown), "unknown");
}

#[test]
fn test_name_in_narrow_window() {
    let window = EnumRange::between(0, 2);
    assert_eq!(name_in(Rgb::unknown, window), "");
    assert_eq!(name_in(Rgb::green, window), "green");
}

#[test]
fn test_value_of_declared() {
    assert_eq!(value_of::<Rgb>("blue"), Some(Rgb::blue));
    assert_eq!(value_of::<Rgb>("unknown"), Some(Rgb::unknown));
}

#[test]
fn test_value_of_outside_window() {
    let window = EnumRange::between(0, 2);
    assert_eq!(value_in::<Rgb>("unknown", window), None);

    let err = value_in_checked::<Rgb>("unknown", window).unwrap_err();
    assert_eq!(
        err,
        ReflectError::InvalidAccess {
            name: "unknown".into(),
            min: 0,
            max: 2,
        }
    );
    assert!(err.to_string().contains("unknown"));
}

#[test]
fn test_value_of_checked_ok() {
    assert_eq!(value_of_checked::<Rgb>("green"), Ok(Rgb::green));
}

#[test]
fn test_unknown_and_empty_text() {
    assert_eq!(value_of::<Rgb>("purple"), None);
    assert_eq!(value_of::<Rgb>(""), None);
    // Exact, case-sensitive match.
    assert_eq!(value_of::<Rgb>("Blue"), None);
}

#[test]
fn test_round_trip_all_named() {
    let mut checked = 0;
    for pair in for_each::<Rgb>().filter(|p| p.is_named()) {
        assert_eq!(value_of::<Rgb>(pair.name), Some(pair.value));
        checked += 1;
    }
    assert_eq!(checked, 4);
}

#[test]
fn test_default_window() {
    assert_eq!(<Plain as enum_names::Reflect>::RANGE, EnumRange::DEFAULT);
    assert_eq!(name_of(Plain::Second), "Second");
    assert_eq!(name_of(Plain::Far), "Far");
    // Declared, but outside [-128, 128].
    assert_eq!(name_of(Plain::Outside), "");
    assert_eq!(value_of::<Plain>("Outside"), None);
    assert_eq!(
        name_in(Plain::Outside, EnumRange::between(0, 600)),
        "Outside"
    );
}

#[test]
fn test_underlying_value() {
    let raw: i8 = underlying_value(Rgb::unknown);
    assert_eq!(raw, -1);
    assert_eq!(underlying_value(Rgb::blue), 2);
}

#[test]
fn test_cast() {
    assert_eq!(cast::<Rgb>(2), Some(Rgb::blue));
    assert_eq!(cast::<Rgb>(-1), Some(Rgb::unknown));
    assert_eq!(cast::<Rgb>(7), None);
    assert_eq!(cast::<Sparse>(3), None);
    // Declared but outside the default window.
    assert_eq!(cast::<Plain>(500), None);
}

#[test]
fn test_gaps_are_unnamed() {
    let table = name_table::<Sparse>(EnumRange::between(0, 8));
    let names: Vec<_> = table.entries().map(|(_, name)| name).collect();
    assert_eq!(names, ["A", "", "", "", "", "B", "", "", ""]);
    assert_eq!(table.named_count(), 2);
}

#[test]
fn test_table_is_shared() {
    let window = EnumRange::between(-1, 3);
    let first = name_table::<Rgb>(window);
    let second = name_table::<Rgb>(window);
    assert!(std::ptr::eq(first, second));
    // Repeated queries give the same borrowed text.
    assert!(std::ptr::eq(name_of(Rgb::blue), name_of(Rgb::blue)));
}
