//! In-Memory Duty Clock Adapter
//!
//! Tracks shift start times per decision-maker and reports elapsed minutes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::DutyClock;

/// Shift-start based duty clock.
///
/// Decision-makers with no recorded shift report `fallback_minutes`.
#[derive(Debug, Clone)]
pub struct InMemoryDutyClock {
    shifts: Arc<RwLock<HashMap<String, Timestamp>>>,
    fallback_minutes: u32,
}

impl InMemoryDutyClock {
    pub fn new(fallback_minutes: u32) -> Self {
        Self {
            shifts: Arc::new(RwLock::new(HashMap::new())),
            fallback_minutes,
        }
    }

    /// Record the start of a shift, replacing any earlier one
    pub async fn start_shift(&self, decision_maker_id: impl Into<String>, started_at: Timestamp) {
        self.shifts
            .write()
            .await
            .insert(decision_maker_id.into(), started_at);
    }

    /// Forget a decision-maker's shift
    pub async fn end_shift(&self, decision_maker_id: &str) {
        self.shifts.write().await.remove(decision_maker_id);
    }

    /// Minutes on duty as of `now`.
    pub async fn minutes_at(&self, decision_maker_id: &str, now: Timestamp) -> u32 {
        match self.shifts.read().await.get(decision_maker_id) {
            Some(started_at) => {
                let minutes = now.duration_since(started_at).num_minutes();
                u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
            }
            None => self.fallback_minutes,
        }
    }
}

impl Default for InMemoryDutyClock {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl DutyClock for InMemoryDutyClock {
    async fn time_on_duty(&self, decision_maker_id: &str) -> Result<u32, DomainError> {
        Ok(self.minutes_at(decision_maker_id, Timestamp::now()).await)
    }
}

/// Reports the same time on duty for everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedDutyClock {
    minutes: u32,
}

impl FixedDutyClock {
    pub fn new(minutes: u32) -> Self {
        Self { minutes }
    }
}

#[async_trait]
impl DutyClock for FixedDutyClock {
    async fn time_on_duty(&self, _decision_maker_id: &str) -> Result<u32, DomainError> {
        Ok(self.minutes)
    }
}
