//! Flag-style colors: names, parsing, iteration and a custom window.
//!
//! Run with `RUST_LOG=enum_names=debug` to see tables being built.

use enum_names::prelude::*;
use enum_names::{EnumRange, name_in};
use tracing_subscriber::EnvFilter;

bitmask! {
    #[reflect(range = -1..=5, display)]
    pub struct RgbColor: i32 {
        const RED = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        #[reflect(rename = "UNKNOWN")]
        const UNKNOWN_COLOR = -1;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let x = RgbColor::BLUE;
    let y = value_of::<RgbColor>("GREEN|RED");

    for pair in for_each::<RgbColor>() {
        if pair.is_named() && pair.name != "UNKNOWN" {
            println!("{} \t: {}", pair.name, underlying_value(pair.value));
        }
    }

    println!("{x}");
    println!("{}", y.unwrap_or(RgbColor::UNKNOWN_COLOR));

    // Same value, explicit window that leaves BLUE out.
    let narrow = EnumRange::between(-1, 3);
    println!("{:?}", name_in(RgbColor::RED | RgbColor::BLUE, narrow));
}
