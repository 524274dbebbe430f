use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueState {
    Idle,
    Running,
}

struct ActiveTransition<T> {
    transition: Transition<T>,
    started_at_ms: f64,
}

/// Runs transitions one at a time in FIFO order.
///
/// The queue never schedules frames itself. After `enqueue` or `frame` the
/// host checks [`AnimationQueue::needs_frame`] and calls
/// [`AnimationQueue::frame`] again on the next display refresh.
pub struct AnimationQueue<T> {
    active: Option<ActiveTransition<T>>,
    pending: VecDeque<Transition<T>>,
    completed: u64,
}

impl<T> Default for AnimationQueue<T> {
    fn default() -> Self {
        Self {
            active: None,
            pending: VecDeque::new(),
            completed: 0,
        }
    }
}

impl<T> AnimationQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transition`, starting it right away when nothing is active.
    ///
    /// Starting runs the transition's initializer and its progress-0 callback
    /// before returning.
    pub fn enqueue(&mut self, target: &mut T, transition: Transition<T>, now_ms: f64) {
        self.pending.push_back(transition);
        debug!(
            pending = self.pending.len(),
            active = self.active.is_some(),
            "transition enqueued"
        );
        if self.active.is_none() {
            self.promote(target, now_ms);
        }
    }

    /// Advances the active transition to `now_ms`.
    ///
    /// Once progress reaches 1 the callback receives exactly `1.0` and the
    /// next pending transition starts within the same frame.
    pub fn frame(&mut self, target: &mut T, now_ms: f64) -> QueueState {
        let Some(active) = self.active.as_mut() else {
            return QueueState::Idle;
        };

        let progress = active
            .transition
            .progress_at(now_ms - active.started_at_ms);
        if progress < 1.0 {
            trace!(progress, "transition frame");
            active.transition.step(target, progress);
            return QueueState::Running;
        }

        active.transition.finish(target);
        self.active = None;
        self.completed += 1;
        debug!(
            completed = self.completed,
            pending = self.pending.len(),
            "transition finished"
        );
        self.promote(target, now_ms);
        self.state()
    }

    fn promote(&mut self, target: &mut T, now_ms: f64) {
        let Some(mut transition) = self.pending.pop_front() else {
            return;
        };
        debug!(
            duration_ms = transition.duration_ms(),
            easing = ?transition.easing(),
            "transition started"
        );
        transition.start(target);
        self.active = Some(ActiveTransition {
            transition,
            started_at_ms: now_ms,
        });
    }

    #[must_use]
    pub fn state(&self) -> QueueState {
        if self.active.is_some() {
            QueueState::Running
        } else {
            QueueState::Idle
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state() == QueueState::Idle
    }

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of transitions that have delivered their final callback.
    #[must_use]
    pub fn completed_count(&self) -> u64 {
        self.completed
    }
}

impl<T> fmt::Debug for AnimationQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationQueue")
            .field("state", &self.state())
            .field("pending", &self.pending.len())
            .field("completed", &self.completed)
            .finish()
    }
}
