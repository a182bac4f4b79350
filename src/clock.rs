//! Clock
//!
//! Time formatting and the repeating ticker for the hooks page.

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SiteError};
use crate::timer::Scheduler;

/// 24-hour time without a leading zero on the hour, as `es-ES` prints it
const TIME_FORMAT: &str = "%-H:%M:%S";

fn format_in<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    instant.with_timezone(zone).format(TIME_FORMAT).to_string()
}

/// Format `instant` in `zone` (an IANA id), or in local time for `None`
pub fn format_time(instant: DateTime<Utc>, zone: Option<&str>) -> Result<String> {
    match zone {
        None => Ok(format_in(instant, &Local)),
        Some(id) => {
            let tz: Tz = id
                .parse()
                .map_err(|_| SiteError::UnknownTimeZone(id.to_string()))?;
            Ok(format_in(instant, &tz))
        }
    }
}

/// Like [`format_time`], falling back to local time for unknown zones
pub fn display_time(instant: DateTime<Utc>, zone: Option<&str>) -> String {
    format_time(instant, zone).unwrap_or_else(|e| {
        tracing::warn!("{}, showing local time", e);
        format_in(instant, &Local)
    })
}

/// Repeating timer that stays alive until closed or dropped
pub struct Ticker<S: Scheduler> {
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn start(scheduler: &S, period_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        tracing::debug!(period_ms, "clock ticker started");
        Self {
            handle: Some(scheduler.every(period_ms, Box::new(on_tick))),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer; further ticks never fire
    pub fn close(&mut self) {
        if self.handle.take().is_some() {
            tracing::debug!("clock ticker stopped");
        }
    }
}
