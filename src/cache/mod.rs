// ABOUTME: Caller-owned cache for the ingredient category table
// ABOUTME: Memoizes one store fetch with an optional TTL and explicit invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

//! Category Cache
//!
//! The category table changes rarely, so planners keep one fetched copy
//! around. There is no process-wide state: each owner holds its own cache,
//! and a stale table is tolerated until the TTL passes or the owner calls
//! [`CategoryCache::invalidate`].

use crate::config::PlannerConfig;
use crate::errors::AppResult;
use crate::models::CategoryTable;
use crate::store::RecipeStore;
use chrono::{DateTime, Duration, Utc};
use std::time;
use tracing::debug;

// ============================================================================
// Category Cache
// ============================================================================

#[derive(Debug, Clone)]
struct CachedTable {
    table: CategoryTable,
    fetched_at: DateTime<Utc>,
}

/// Memoized category table
#[derive(Debug, Clone, Default)]
pub struct CategoryCache {
    cached: Option<CachedTable>,
    /// `None` keeps the table until invalidated
    ttl: Option<Duration>,
}

impl CategoryCache {
    /// Cache with the given lifetime
    ///
    /// A lifetime too large for `chrono` behaves like no expiry.
    #[must_use]
    pub fn new(ttl: Option<time::Duration>) -> Self {
        Self {
            cached: None,
            ttl: ttl.and_then(|ttl| Duration::from_std(ttl).ok()),
        }
    }

    /// Cache using the configured lifetime
    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.category_cache_ttl)
    }

    fn entry_is_fresh(&self, cached: &CachedTable, now: DateTime<Utc>) -> bool {
        self.ttl
            .is_none_or(|ttl| now.signed_duration_since(cached.fetched_at) < ttl)
    }

    /// Whether a table is held and still fresh at `now`
    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|cached| self.entry_is_fresh(cached, now))
    }

    /// Whether a fresh table is held now
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }

    /// Store a table fetched at `fetched_at`
    pub fn put(&mut self, table: CategoryTable, fetched_at: DateTime<Utc>) {
        self.cached = Some(CachedTable { table, fetched_at });
    }

    /// Drop the held table so the next read refetches
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            debug!("Category table cache invalidated");
        }
    }

    /// Cached table, fetching from `store` when missing or expired
    ///
    /// # Errors
    ///
    /// Propagates the store error; the previous table is dropped in that case
    pub async fn get_or_fetch<S>(&mut self, store: &S) -> AppResult<&CategoryTable>
    where
        S: RecipeStore + ?Sized,
    {
        let now = Utc::now();
        let cached = match self.cached.take() {
            Some(cached) if self.entry_is_fresh(&cached, now) => cached,
            _ => {
                let table = store.fetch_categories().await?;
                debug!(categories = table.len(), "Fetched category table");
                CachedTable {
                    table,
                    fetched_at: now,
                }
            }
        };
        Ok(&self.cached.insert(cached).table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_freshness_respects_ttl() {
        let mut cache = CategoryCache::new(Some(time::Duration::from_secs(60)));
        let fetched = Utc::now();
        cache.put(CategoryTable::new(), fetched);

        assert!(cache.is_fresh_at(fetched + Duration::seconds(59)));
        assert!(!cache.is_fresh_at(fetched + Duration::seconds(60)));
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let mut cache = CategoryCache::new(None);
        assert!(!cache.is_cached());
        let fetched = Utc::now();
        cache.put(CategoryTable::new(), fetched);
        assert!(cache.is_fresh_at(fetched + Duration::days(365)));

        cache.invalidate();
        assert!(!cache.is_cached());
    }

    #[tokio::test]
    async fn test_get_or_fetch_keeps_stale_copy_until_invalidated() {
        let store = InMemoryStore::new();
        store
            .set_categories(CategoryTable::new().with_category("Hús", ["csirke"]))
            .await;
        let mut cache = CategoryCache::new(None);

        assert_eq!(cache.get_or_fetch(&store).await.unwrap().len(), 1);

        store.set_categories(CategoryTable::new()).await;
        assert_eq!(cache.get_or_fetch(&store).await.unwrap().len(), 1);

        cache.invalidate();
        assert!(cache.get_or_fetch(&store).await.unwrap().is_empty());
    }
}
