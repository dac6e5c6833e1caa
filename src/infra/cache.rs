//! In-memory memoization of price responses, keyed by the exact identifier
//! list that was requested.

use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use crate::domain::PriceRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    pub fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn payload(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Cached)
    }
}

/// Session-long memo of price lists. Entries never expire on their own;
/// [`PriceMemo::clear`] drops them all.
#[derive(Default)]
pub struct PriceMemo {
    entries: HashMap<Vec<String>, Cached<Vec<PriceRecord>>>,
}

impl PriceMemo {
    pub fn get(&self, identifiers: &[String]) -> Option<CachedPayload<Vec<PriceRecord>>> {
        self.entries.get(identifiers).map(Cached::payload)
    }

    pub fn insert(
        &mut self,
        identifiers: &[String],
        data: Vec<PriceRecord>,
    ) -> CachedPayload<Vec<PriceRecord>> {
        let fetched_at = SystemTime::now();
        let payload = CachedPayload::new(data.clone(), fetched_at, CacheStatus::Fresh);
        self.entries
            .insert(identifiers.to_vec(), Cached::new(data, fetched_at));
        payload
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short human-readable age, e.g. `42s`, `5m`, `3h`, `2d`.
pub fn age_string(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}
