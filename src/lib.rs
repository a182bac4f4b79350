//! Conceptos UI
//!
//! Educational site about component-based interfaces: props, state,
//! lifecycle effects, hooks, the virtual DOM and a global store. Page logic
//! lives in plain modules so it can be tested without a browser; the Leptos
//! views in `pages` only wire it to signals.

pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod counter;
pub mod error;
pub mod lifecycle;
pub mod markdown;
pub mod pages;
pub mod routes;
pub mod temperature;
pub mod timer;
pub mod todo;
