//! Lookup Engine: value→name and name→value over a [`NameTable`].

use crate::table::NameTable;

/// Name stored for `value`, or the sentinel's empty name outside the window.
#[inline]
pub fn name_at(table: &NameTable, value: i64) -> &'static str {
    let offset = table.offset_of(value).unwrap_or(0);
    table.get(offset).unwrap_or("")
}

/// Underlying value of the first slot named exactly `name`.
///
/// The sentinel is skipped and an empty `name` never matches, so unnamed
/// slots cannot be found by searching for `""`.
pub fn value_at(table: &NameTable, name: &str) -> Option<i64> {
    if name.is_empty() {
        return None;
    }

    let found = table
        .names()
        .iter()
        .skip(1)
        .position(|candidate| *candidate == name)
        .and_then(|index| table.value_at(index + 1));

    if found.is_none() {
        tracing::trace!(name, range = %table.range(), "no enumerator with this name");
    }
    found
}
