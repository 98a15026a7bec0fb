use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Whether the host currently allows autoplay.
///
/// Suspended by gesture start and pointer enter, allowed again by gesture
/// end and pointer leave. Autoplay only runs when this is `Allowed` and no
/// gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayPermission {
    #[default]
    Allowed,
    Suspended,
}

/// A repeating task driven by host-supplied elapsed time.
///
/// The task never runs on its own; `advance` reports how many intervals
/// completed. Dropping the value cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    id: u64,
    interval: Duration,
    elapsed: Duration,
}

impl ScheduledTask {
    #[must_use]
    fn new(id: u64, interval: Duration) -> Self {
        Self {
            id,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next fire.
    #[must_use]
    pub fn until_next_fire(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Adds elapsed time and returns the number of completed intervals.
    fn advance(&mut self, elapsed: Duration) -> u64 {
        let interval_nanos = self.interval.as_nanos();
        if interval_nanos == 0 {
            return 0;
        }
        let total = self.elapsed.as_nanos() + elapsed.as_nanos();
        let fires = total / interval_nanos;
        let remainder = total % interval_nanos;
        self.elapsed = Duration::from_nanos(u64::try_from(remainder).unwrap_or(u64::MAX));
        u64::try_from(fires).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AutoplayState {
    #[default]
    Disarmed,
    Armed(ScheduledTask),
}

impl AutoplayState {
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }
}

/// Edge produced by [`AutoplayScheduler::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayTransition {
    Armed { task_id: u64 },
    Disarmed { task_id: u64 },
}

/// Lifetime counters, mostly useful to assert timer hygiene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayStats {
    pub scheduled: u64,
    pub cancelled: u64,
    pub fired: u64,
}

impl AutoplayStats {
    /// Tasks scheduled and not yet cancelled. Never exceeds one.
    #[must_use]
    pub fn live_tasks(self) -> u64 {
        self.scheduled - self.cancelled
    }
}

/// Owns the single autoplay task.
///
/// The task is created and dropped only on the edges of the armed condition,
/// so at most one is ever outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplayScheduler {
    permission: AutoplayPermission,
    state: AutoplayState,
    next_task_id: u64,
    stats: AutoplayStats,
}

impl AutoplayScheduler {
    #[must_use]
    pub fn permission(&self) -> AutoplayPermission {
        self.permission
    }

    /// Returns `true` when the permission changed.
    pub fn set_permission(&mut self, permission: AutoplayPermission) -> bool {
        if self.permission == permission {
            return false;
        }
        self.permission = permission;
        true
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.permission == AutoplayPermission::Allowed
    }

    #[must_use]
    pub fn state(&self) -> &AutoplayState {
        &self.state
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state.is_armed()
    }

    #[must_use]
    pub fn stats(&self) -> AutoplayStats {
        self.stats
    }

    /// Brings the task in line with `should_arm`.
    ///
    /// Arming first cancels any existing task; a call that does not cross an
    /// edge leaves the running task and its phase untouched.
    pub fn reconcile(
        &mut self,
        should_arm: bool,
        interval: Duration,
    ) -> Option<AutoplayTransition> {
        match (should_arm, self.state.is_armed()) {
            (true, false) => {
                self.cancel();
                self.next_task_id += 1;
                let task = ScheduledTask::new(self.next_task_id, interval);
                self.state = AutoplayState::Armed(task);
                self.stats.scheduled += 1;
                Some(AutoplayTransition::Armed {
                    task_id: self.next_task_id,
                })
            }
            (false, true) => self
                .cancel()
                .map(|task_id| AutoplayTransition::Disarmed { task_id }),
            _ => None,
        }
    }

    /// Cancels the live task, if any, and returns its id.
    pub fn cancel(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.state) {
            AutoplayState::Armed(task) => {
                self.stats.cancelled += 1;
                Some(task.id())
            }
            AutoplayState::Disarmed => None,
        }
    }

    /// Advances the live task and returns how many times it fired.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let AutoplayState::Armed(task) = &mut self.state else {
            return 0;
        };
        let fires = task.advance(elapsed);
        self.stats.fired = self.stats.fired.saturating_add(fires);
        fires
    }
}
