//! Shared table cache under concurrent first use

use std::sync::{Arc, Barrier};
use std::thread;

use enum_names::prelude::*;
use enum_names::{EnumRange, NameTable, name_in, name_table, table::cached_tables};

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(range = -4..=64)]
enum Shared {
    Zero,
    One,
    Big = 60,
    Negative = -4,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("enum_names=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_concurrent_first_use_builds_once() {
    init_tracing();
    const THREADS: usize = 8;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let table: &'static NameTable = name_table::<Shared>(Shared::RANGE);
                assert_eq!(name_of(Shared::Big), "Big");
                table as *const NameTable as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_windows_get_their_own_tables() {
    init_tracing();
    let wide = name_table::<Shared>(EnumRange::between(-4, 64));
    let narrow = name_table::<Shared>(EnumRange::between(0, 2));
    assert!(!std::ptr::eq(wide, narrow));
    assert_eq!(narrow.range(), EnumRange::between(0, 2));
    assert_eq!(narrow.len(), 4);

    assert_eq!(name_in(Shared::Negative, EnumRange::between(0, 2)), "");
    assert_eq!(name_of(Shared::Negative), "Negative");
    assert!(cached_tables() >= 2);
}

#[test]
fn test_tables_are_immutable_after_build() {
    init_tracing();
    let before = name_table::<Shared>(Shared::RANGE).clone();
    for _ in 0..100 {
        let _ = value_of::<Shared>("missing");
        let _ = name_of(Shared::One);
    }
    assert_eq!(&before, name_table::<Shared>(Shared::RANGE));
}
