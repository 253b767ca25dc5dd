//! Process-wide table cache.
//!
//! Tables are keyed by `(TypeId, min, max)`. A table is built inside the
//! shard's entry lock, so concurrent first lookups build it exactly once;
//! afterwards it is leaked and read without locking through the returned
//! `&'static` reference.

use core::any::{TypeId, type_name};

use dashmap::DashMap;
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;

use super::NameTable;
use crate::primitives::EnumRange;
use crate::reflect::Reflect;

type TableKey = (TypeId, i64, i64);

static TABLES: Lazy<DashMap<TableKey, &'static NameTable, FxBuildHasher>> =
    Lazy::new(|| DashMap::with_hasher(FxBuildHasher));

/// Cached name table for `E` over `range`, built on first use.
pub fn table<E: Reflect>(range: EnumRange) -> &'static NameTable {
    let key = (TypeId::of::<E>(), range.min(), range.max());

    if let Some(table) = TABLES.get(&key) {
        return *table;
    }

    *TABLES.entry(key).or_insert_with(|| {
        let table = NameTable::build::<E>(range);
        tracing::debug!(
            ty = type_name::<E>(),
            %range,
            named = table.named_count(),
            "built enum name table"
        );
        Box::leak(Box::new(table))
    })
}

/// Number of distinct tables built so far.
pub fn cached_tables() -> usize {
    TABLES.len()
}
