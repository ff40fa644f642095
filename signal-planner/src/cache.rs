//! Caching layer for optimization results.
//!
//! The optimizer is deterministic, so a plan for a given (horizon, schedule)
//! pair never changes while the configuration stays fixed. Repeated requests
//! for the same forecast are served from memory instead of re-running the
//! search. Errors are never cached.
//!
//! Searches run on the blocking thread pool so a long horizon never stalls
//! the async runtime.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::task;
use tracing::debug;

use crate::domain::ArrivalSchedule;
use crate::planner::{OptimizeError, Optimizer, Plan, SignalConfig};

/// Cache key: horizon plus the full arrival schedule.
type PlanKey = (usize, ArrivalSchedule);

/// Error from a cached optimization.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The optimizer rejected the request
    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    /// The blocking search task panicked or was cancelled
    #[error("search task failed: {0}")]
    Task(#[from] task::JoinError),
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Optimizer with result caching.
///
/// Wraps an `Optimizer` and caches the plans it produces.
pub struct CachedOptimizer {
    optimizer: Optimizer,
    plans: MokaCache<PlanKey, Arc<Plan>>,
}

impl CachedOptimizer {
    /// Create a new cached optimizer.
    pub fn new(optimizer: Optimizer, cache_config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { optimizer, plans }
    }

    /// Optimal plan for `schedule` over `horizon` steps, using the cache if available.
    pub async fn plan(
        &self,
        horizon: usize,
        schedule: &ArrivalSchedule,
    ) -> Result<Arc<Plan>, PlanError> {
        let key = (horizon, schedule.clone());

        // Try cache first
        if let Some(cached) = self.plans.get(&key).await {
            debug!(horizon, "plan cache hit");
            return Ok(cached);
        }

        let optimizer = self.optimizer.clone();
        let owned = schedule.clone();
        let outcome = task::spawn_blocking(move || optimizer.run(horizon, &owned)).await??;
        let plan = Arc::new(outcome.plan());

        self.plans.insert(key, plan.clone()).await;

        Ok(plan)
    }

    /// Configuration of the wrapped optimizer.
    pub fn config(&self) -> &SignalConfig {
        self.optimizer.config()
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.plans.invalidate_all();
    }
}
