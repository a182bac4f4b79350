//! Browser tests for the gloo-backed scheduler and the widgets built on it.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use conceptos_ui::clock::Ticker;
use conceptos_ui::lifecycle::LoadingSimulation;
use conceptos_ui::timer::{BrowserScheduler, Scheduler};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn once_fires_after_delay() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _handle = BrowserScheduler.once(20, Box::new(move || flag.set(true)));

    assert!(!fired.get());
    TimeoutFuture::new(80).await;
    assert!(fired.get());
}

#[wasm_bindgen_test]
async fn cancelled_load_never_completes() {
    let done = Rc::new(Cell::new(false));
    let flag = done.clone();
    let mut sim = LoadingSimulation::new(BrowserScheduler, 40);

    assert!(sim.toggle(move || flag.set(true)));
    TimeoutFuture::new(10).await;
    assert!(!sim.toggle(|| {}));

    TimeoutFuture::new(120).await;
    assert!(!done.get());
    assert!(!sim.is_loading());
}

#[wasm_bindgen_test]
async fn closed_ticker_stops_ticking() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let mut ticker = Ticker::start(&BrowserScheduler, 10, move || counter.set(counter.get() + 1));

    TimeoutFuture::new(60).await;
    ticker.close();
    let seen = ticks.get();
    assert!(seen >= 1);

    TimeoutFuture::new(60).await;
    assert_eq!(ticks.get(), seen);
}
