//! # Schedule Registry
//!
//! Holds the published fork schedule.
//!
//! Readers take an `Arc` snapshot and work on it without holding the lock.
//! A new schedule is built completely before the pointer is swapped, so a
//! reader sees either the old schedule or the new one, never a mix.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::algorithms::ScheduleLoader;
use crate::domain::{ForkSchedule, ScheduleResult};
use crate::ports::inbound::ForkScheduleApi;
use crate::ports::outbound::GenesisSource;

/// Shared, atomically replaceable fork schedule.
#[derive(Debug)]
pub struct ScheduleRegistry {
    current: RwLock<Arc<ForkSchedule>>,
}

impl ScheduleRegistry {
    /// Create a registry publishing `schedule`.
    pub fn new(schedule: ForkSchedule) -> Self {
        Self {
            current: RwLock::new(Arc::new(schedule)),
        }
    }

    /// Load the initial schedule from `source`.
    pub fn load(source: &dyn GenesisSource, loader: &ScheduleLoader) -> ScheduleResult<Self> {
        let schedule = loader.load(&source.read_document()?)?;
        info!(
            source = %source.describe(),
            engine = schedule.consensus_engine_name(),
            "Fork schedule published"
        );
        Ok(Self::new(schedule))
    }

    /// Snapshot of the published schedule.
    pub fn current(&self) -> Arc<ForkSchedule> {
        self.current.read().clone()
    }

    /// Publish `schedule`, returning the one it replaces.
    pub fn replace(&self, schedule: ForkSchedule) -> Arc<ForkSchedule> {
        self.publish(Arc::new(schedule))
    }

    fn publish(&self, next: Arc<ForkSchedule>) -> Arc<ForkSchedule> {
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Re-read `source` and publish the result.
    ///
    /// On failure the published schedule is left untouched and the error is
    /// returned. Returns whether the new schedule differs from the old one.
    pub fn reload(
        &self,
        source: &dyn GenesisSource,
        loader: &ScheduleLoader,
    ) -> ScheduleResult<bool> {
        let schedule = match source
            .read_document()
            .and_then(|document| loader.load(&document))
        {
            Ok(schedule) => schedule,
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "Fork schedule reload failed");
                return Err(e);
            }
        };

        let next = Arc::new(schedule);
        let previous = self.publish(Arc::clone(&next));
        let changed = *previous != *next;
        info!(
            source = %source.describe(),
            changed,
            "Fork schedule published"
        );
        Ok(changed)
    }
}

impl Default for ScheduleRegistry {
    fn default() -> Self {
        Self::new(ForkSchedule::default())
    }
}

impl ForkScheduleApi for ScheduleRegistry {
    fn snapshot(&self) -> Arc<ForkSchedule> {
        self.current()
    }
}
