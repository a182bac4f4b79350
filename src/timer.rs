//! Timers
//!
//! Scheduling seam for the widgets that own a timer. Every handle cancels its
//! timer when dropped, so a view that drops its handle on teardown can never
//! be called back afterwards.

use gloo_timers::callback::{Interval, Timeout};

/// Source of one-shot and repeating timers
pub trait Scheduler {
    /// Cancels the timer when dropped
    type Handle;

    /// Run `callback` once after `delay_ms`
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `period_ms` until the handle is dropped
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers (`setTimeout` / `setInterval`) via gloo
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// A live browser timer; dropping it clears the timer
#[allow(dead_code)] // held only for its Drop
pub enum TimerHandle {
    Once(Timeout),
    Every(Interval),
}

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Once(Timeout::new(delay_ms, callback))
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Every(Interval::new(period_ms, callback))
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::Scheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_once_fires_at_deadline() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _handle = scheduler.once(100, Box::new(move || flag.set(true)));

        scheduler.advance(99);
        assert!(!fired.get());
        scheduler.advance(1);
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropped_handle_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.once(100, Box::new(move || flag.set(true)));

        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1000);
        assert!(!fired.get());
    }

    #[test]
    fn test_every_repeats_until_dropped() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = scheduler.every(10, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(35);
        assert_eq!(ticks.get(), 3);

        drop(handle);
        scheduler.advance(100);
        assert_eq!(ticks.get(), 3);
    }
}
