//! Render Counter
//!
//! Click counter for the virtual DOM page that also tallies how many times
//! its view was rebuilt.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderTally {
    /// Value shown by the counter
    pub count: u32,
    /// Times the counter's view has run
    pub renders: u32,
}

impl RenderTally {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Called from inside the view; returns the new render number
    pub fn record_render(&mut self) -> u32 {
        self.renders = self.renders.saturating_add(1);
        self.renders
    }
}
