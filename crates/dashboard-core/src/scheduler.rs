//! Cancellable deferred callbacks.
//!
//! The debounce timer is modelled as a callback scheduled on some clock plus a
//! handle that can cancel it. UI runtimes supply their own [`Scheduler`] (the
//! app crate spawns a Dioxus task that sleeps); [`ManualScheduler`] drives a
//! virtual clock so debounce behavior can be tested without real time.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Callback run when a timer fires.
pub type Callback = Box<dyn FnOnce() + 'static>;

/// Handle to a scheduled callback.
pub trait TimerHandle {
    /// Prevents the callback from running. Cancelling a timer that already
    /// fired is a no-op.
    fn cancel(self);
}

/// Schedules callbacks to run after a delay.
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    /// Runs `callback` once `delay` has elapsed, unless the returned handle is
    /// cancelled first.
    fn schedule(&self, delay: Duration, callback: Callback) -> Self::Handle;
}

/// Timers ordered by deadline, then by scheduling order.
type TimerKey = (Duration, u64);

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<TimerKey, Callback>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Nothing fires until [`advance`](ManualScheduler::advance) moves the clock
/// past a timer's deadline. Timers with equal deadlines fire in the order they
/// were scheduled, and callbacks may schedule further timers.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use dashboard_core::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// scheduler.schedule(Duration::from_millis(100), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(99));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Moves the clock forward by `by`, firing every timer that comes due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            // Release the borrow before running the callback so it can reschedule.
            let due = {
                let mut clock = self.clock.borrow_mut();
                match clock.timers.first_key_value() {
                    Some((&(deadline, _), _)) if deadline <= target => {
                        clock.now = deadline;
                        clock.timers.pop_first().map(|(_, callback)| callback)
                    }
                    _ => None,
                }
            };

            match due {
                Some(callback) => callback(),
                None => break,
            }
        }

        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, callback: Callback) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now + delay, clock.next_seq);
        clock.next_seq += 1;
        clock.timers.insert(key, callback);

        ManualTimer {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

/// Handle returned by [`ManualScheduler::schedule`].
#[derive(Debug)]
pub struct ManualTimer {
    key: TimerKey,
    clock: Weak<RefCell<VirtualClock>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().timers.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Callback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Callback {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule(Duration::from_millis(300), make("late"));
        scheduler.schedule(Duration::from_millis(100), make("early"));
        scheduler.schedule(Duration::from_millis(100), make("early-second"));

        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let handle = scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
        assert_eq!(scheduler.pending(), 1);
        handle.cancel();
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_millis(50));
        assert!(!fired.get());
    }

    #[test]
    fn test_callback_can_schedule_within_same_advance() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();
        let inner = scheduler.clone();
        let follow_up = make("second");

        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner.schedule(Duration::from_millis(10), follow_up);
            }),
        );

        scheduler.advance(Duration::from_millis(15));
        assert!(log.borrow().is_empty());
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_cancel_after_scheduler_dropped_is_noop() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(1), Box::new(|| {}));
        drop(scheduler);
        handle.cancel();
    }
}
