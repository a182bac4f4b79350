//! Loading Simulation
//!
//! The lifecycle page's fake data load: a one-shot timer that clears the
//! loading flag when it expires. Cancelling (or tearing the page down) drops
//! the timer handle, so the completion callback cannot run afterwards.

use std::cell::Cell;
use std::rc::Rc;

use crate::timer::Scheduler;

pub struct LoadingSimulation<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    loading: Rc<Cell<bool>>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> LoadingSimulation<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            loading: Rc::new(Cell::new(false)),
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Start loading when idle, cancel when loading.
    ///
    /// `on_done` runs once the delay expires, unless cancelled first.
    /// Returns the new loading flag.
    pub fn toggle(&mut self, on_done: impl FnOnce() + 'static) -> bool {
        if self.is_loading() {
            self.cancel();
        } else {
            self.start(on_done);
        }
        self.is_loading()
    }

    fn start(&mut self, on_done: impl FnOnce() + 'static) {
        let loading = self.loading.clone();
        loading.set(true);
        self.pending = Some(self.scheduler.once(
            self.delay_ms,
            Box::new(move || {
                loading.set(false);
                tracing::debug!("simulated load finished");
                on_done();
            }),
        ));
        tracing::debug!(delay_ms = self.delay_ms, "simulated load started");
    }

    /// Stop a running load without completing it
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() && self.is_loading() {
            tracing::debug!("simulated load cancelled");
        }
        self.loading.set(false);
    }

    /// Teardown: release the timer
    pub fn close(&mut self) {
        self.cancel();
    }
}

/// Toggle button text
pub fn button_label(loading: bool) -> &'static str {
    if loading {
        "Cancelar Carga"
    } else {
        "Iniciar Carga"
    }
}

/// Status line under the button
pub fn status_text(loading: bool) -> &'static str {
    if loading {
        "Cargando datos... ⏳"
    } else {
        "Datos cargados correctamente! ✅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_load_completes_after_delay() {
        let scheduler = ManualScheduler::new();
        let mut sim = LoadingSimulation::new(scheduler.clone(), 4000);
        let (done, on_done) = counter();

        assert!(sim.toggle(on_done));
        scheduler.advance(3_999);
        assert!(sim.is_loading());
        assert_eq!(done.get(), 0);

        scheduler.advance(1);
        assert!(!sim.is_loading());
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_cancel_before_expiry_never_completes() {
        let scheduler = ManualScheduler::new();
        let mut sim = LoadingSimulation::new(scheduler.clone(), 4000);
        let (done, on_done) = counter();

        sim.toggle(on_done);
        scheduler.advance(2_000);
        assert!(!sim.toggle(|| {}));

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(60_000);
        assert_eq!(done.get(), 0);
        assert!(!sim.is_loading());
    }

    #[test]
    fn test_restart_after_cancel_fires_once() {
        let scheduler = ManualScheduler::new();
        let mut sim = LoadingSimulation::new(scheduler.clone(), 100);
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        sim.toggle(on_first);
        scheduler.advance(50);
        sim.toggle(|| {});
        sim.toggle(on_second);
        scheduler.advance(200);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_close_on_teardown() {
        let scheduler = ManualScheduler::new();
        let mut sim = LoadingSimulation::new(scheduler.clone(), 100);
        let (done, on_done) = counter();

        sim.toggle(on_done);
        sim.close();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(1_000);
        assert_eq!(done.get(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let scheduler = ManualScheduler::new();
        let (done, on_done) = counter();
        {
            let mut sim = LoadingSimulation::new(scheduler.clone(), 100);
            sim.toggle(on_done);
        }
        scheduler.advance(1_000);
        assert_eq!(done.get(), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(button_label(false), "Iniciar Carga");
        assert_eq!(button_label(true), "Cancelar Carga");
        assert!(status_text(true).starts_with("Cargando"));
    }
}
