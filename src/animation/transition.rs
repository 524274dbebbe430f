use std::fmt;

use crate::animation::Easing;

trait TransitionDriver<T> {
    fn start(&mut self, target: &T);
    fn step(&mut self, target: &mut T, progress: f64);
}

struct Driver<S, I, F> {
    init: Option<I>,
    state: Option<S>,
    callback: F,
}

impl<T, S, I, F> TransitionDriver<T> for Driver<S, I, F>
where
    I: FnOnce(&T) -> S,
    F: FnMut(&mut T, f64, &mut S),
{
    fn start(&mut self, target: &T) {
        if let Some(init) = self.init.take() {
            self.state = Some(init(target));
        }
    }

    fn step(&mut self, target: &mut T, progress: f64) {
        if let Some(state) = self.state.as_mut() {
            (self.callback)(target, progress, state);
        }
    }
}

/// One timed, eased animation over a target of type `T`.
///
/// `init` runs once when the transition becomes active and its result is
/// handed to every `callback` invocation together with the eased progress.
pub struct Transition<T> {
    duration_ms: f64,
    easing: Easing,
    driver: Box<dyn TransitionDriver<T>>,
}

impl<T: 'static> Transition<T> {
    #[must_use]
    pub fn new<S, I, F>(duration_ms: f64, easing: Easing, init: I, callback: F) -> Self
    where
        S: 'static,
        I: FnOnce(&T) -> S + 'static,
        F: FnMut(&mut T, f64, &mut S) + 'static,
    {
        Self {
            duration_ms,
            easing,
            driver: Box::new(Driver {
                init: Some(init),
                state: None,
                callback,
            }),
        }
    }

    /// Transition whose callback needs no captured start state.
    #[must_use]
    pub fn stateless<F>(duration_ms: f64, easing: Easing, mut callback: F) -> Self
    where
        F: FnMut(&mut T, f64) + 'static,
    {
        Self::new(
            duration_ms,
            easing,
            |_: &T| (),
            move |target: &mut T, progress, _: &mut ()| callback(target, progress),
        )
    }
}

impl<T> Transition<T> {
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress at `elapsed_ms`, clamped to `[0, 1]`.
    ///
    /// A zero or negative duration completes immediately.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let raw = elapsed_ms / self.duration_ms;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    pub(crate) fn start(&mut self, target: &mut T) {
        self.driver.start(target);
        let initial = self.easing.apply(0.0);
        self.driver.step(target, initial);
    }

    pub(crate) fn step(&mut self, target: &mut T, progress: f64) {
        let eased = self.easing.apply(progress);
        self.driver.step(target, eased);
    }

    pub(crate) fn finish(&mut self, target: &mut T) {
        self.driver.step(target, 1.0);
    }
}

impl<T> fmt::Debug for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
