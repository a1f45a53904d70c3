//! Pure partition of a practice collection into frequency buckets.

use std::collections::BTreeMap;

use crate::models::{Frequency, Practice};

/// Partition `practices` into the four fixed frequency buckets.
///
/// Every frequency appears as a key even when its bucket is empty; the
/// presentation layer decides whether to skip empty groups. Within a
/// bucket, the collection's insertion order is preserved. Each practice
/// lands in exactly the bucket matching its `frequency`, so the bucket
/// sizes always sum to the collection size. `Frequency`'s ordering is its
/// declaration order, so iterating the map yields daily, weekly, monthly,
/// seasonal.
pub fn group_by_frequency(practices: &[Practice]) -> BTreeMap<Frequency, Vec<Practice>> {
    let mut buckets: BTreeMap<Frequency, Vec<Practice>> = Frequency::ALL
        .iter()
        .map(|frequency| (*frequency, Vec::new()))
        .collect();

    for practice in practices {
        buckets
            .entry(practice.frequency)
            .or_default()
            .push(practice.clone());
    }

    buckets
}
