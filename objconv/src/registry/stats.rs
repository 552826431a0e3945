//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Lookup and construction counters for a registry.
//!
//! Counters use relaxed atomics; values are exact once all concurrent calls
//! have returned but may lag while calls are in flight.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking registry activity.
///
/// # Examples
///
/// ```rust
/// use objconv::registry::SerializerRegistry;
/// use objconv::serialization::JsonFactory;
///
/// let registry = SerializerRegistry::new(JsonFactory::default());
/// registry.get::<u32>().unwrap();
/// registry.get::<u32>().unwrap();
///
/// let snapshot = registry.stats().snapshot();
/// assert_eq!(snapshot.lookups(), 2);
/// assert_eq!(snapshot.hits, 1);
/// assert_eq!(snapshot.constructions, 1);
/// ```
///
/// Counters are only updated by the registry itself:
///
/// ```compile_fail
/// use objconv::registry::SerializerRegistry;
/// use objconv::serialization::JsonFactory;
///
/// let registry = SerializerRegistry::new(JsonFactory::default());
/// registry.stats().record_hit();
/// ```
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Lookups answered by an already present entry
    hits: AtomicU64,
    /// Lookups that found no present entry
    misses: AtomicU64,
    /// Successful factory calls
    constructions: AtomicU64,
    /// Failed factory calls
    construction_failures: AtomicU64,
}

impl RegistryStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup served from the cache.
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a lookup that had to wait for or perform construction.
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful factory call.
    pub(crate) fn record_construction(&self) {
        self.constructions.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed factory call.
    pub(crate) fn record_construction_failure(&self) {
        self.construction_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of cache hits.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of cache misses.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Returns the number of successful constructions.
    #[must_use]
    pub fn constructions(&self) -> u64 {
        self.constructions.load(Ordering::Relaxed)
    }

    /// Returns the number of failed constructions.
    #[must_use]
    pub fn construction_failures(&self) -> u64 {
        self.construction_failures.load(Ordering::Relaxed)
    }

    /// Captures the current counter values.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            constructions: self.constructions(),
            construction_failures: self.construction_failures(),
        }
    }
}

/// Point-in-time copy of [`RegistryStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lookups answered by an already present entry.
    pub hits: u64,
    /// Lookups that found no present entry.
    pub misses: u64,
    /// Successful factory calls.
    pub constructions: u64,
    /// Failed factory calls.
    pub construction_failures: u64,
}

impl StatsSnapshot {
    /// Total number of lookups.
    #[must_use]
    pub const fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from the cache, or `0.0` with no lookups.
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = RegistryStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.snapshot().hit_ratio(), 0.0);
    }

    #[test]
    fn test_counters() {
        let stats = RegistryStats::new();
        stats.record_miss();
        stats.record_construction_failure();
        stats.record_miss();
        stats.record_construction();
        stats.record_hit();
        stats.record_hit();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 2);
        assert_eq!(stats.constructions(), 1);
        assert_eq!(stats.construction_failures(), 1);
        assert_eq!(stats.snapshot().lookups(), 4);
        assert!((stats.snapshot().hit_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_concurrent_updates() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(RegistryStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_hit();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.hits(), 8000);
    }
}
