//! Per-column statistics: counts, cardinality and top-k frequencies.

use std::hash::Hash;

use indexmap::IndexMap;

use super::classifier::parse_number;
use super::missing::Partition;
use crate::error::{ProfileError, Result};
use crate::schema::{ColumnStats, ColumnType, TopEntry, TopValue};

/// Number of top values reported when not configured.
pub const DEFAULT_TOP_K: usize = 5;

/// A hashable grouping key that can be turned back into a reported value.
trait FrequencyKey: Hash + Eq {
    fn into_value(self) -> TopValue;
}

/// Numbers are grouped by bit pattern after folding `-0.0` into `0.0` and
/// every NaN payload into one NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NumberKey(u64);

impl NumberKey {
    fn new(value: f64) -> Self {
        let canonical = if value.is_nan() {
            f64::NAN
        } else if value == 0.0 {
            0.0
        } else {
            value
        };
        Self(canonical.to_bits())
    }
}

impl FrequencyKey for NumberKey {
    fn into_value(self) -> TopValue {
        TopValue::Number(f64::from_bits(self.0))
    }
}

impl FrequencyKey for &str {
    fn into_value(self) -> TopValue {
        TopValue::Text(self.to_string())
    }
}

/// Group keys and count them. Returns `(count, unique, top)`.
///
/// Ties keep first-encountered order: groups are built in insertion order and
/// the ranking sort is stable.
fn group_and_count<K: FrequencyKey>(
    keys: impl IntoIterator<Item = K>,
    top_k: usize,
) -> (usize, usize, Vec<TopEntry>) {
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    let mut count = 0;
    for key in keys {
        count += 1;
        *counts.entry(key).or_insert(0) += 1;
    }
    let unique = counts.len();

    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let top = ranked
        .into_iter()
        .take(top_k)
        .map(|(key, n)| TopEntry::new(key.into_value(), n))
        .collect();

    (count, unique, top)
}

/// Compute statistics for one column's raw values under a known type.
///
/// For [`ColumnType::Number`] every usable value must parse; one that does not
/// is reported as [`ProfileError::DataInconsistency`].
pub fn aggregate(values: &[&str], column_type: ColumnType, top_k: usize) -> Result<ColumnStats> {
    let partition = Partition::of(values);

    let (count, unique, top) = match column_type {
        ColumnType::Number => {
            let keys = partition
                .usable
                .iter()
                .map(|v| {
                    parse_number(v)
                        .map(NumberKey::new)
                        .ok_or_else(|| ProfileError::DataInconsistency {
                            value: v.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            group_and_count(keys, top_k)
        }
        ColumnType::Text => group_and_count(partition.usable.iter().copied(), top_k),
    };

    Ok(ColumnStats {
        count,
        missing: partition.missing,
        unique,
        top,
    })
}
