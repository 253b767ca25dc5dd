//! # Layer 2: Name Tables
//!
//! ```text
//! table/
//! ├── builder.rs - NameTable: one scanned name per value of the window
//! └── cache.rs   - at-most-once construction per (type, min, max)
//! ```

mod builder;
mod cache;

pub use builder::NameTable;
pub use cache::{cached_tables, table};
