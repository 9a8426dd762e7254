//! Time range and time-to-x mapping.

use chrono::{NaiveDateTime, TimeDelta};

use crate::config::RenderConfig;
use crate::error::LayoutError;
use crate::syntax::types::Schedule;

/// Maps instants onto the horizontal plot area.
///
/// The plot area starts after the group-label column; the time range covers
/// `width_scale` of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    plot_offset: f64,
    plot_width: f64,
    width_scale: f64,
}

impl TimeScale {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, config: &RenderConfig) -> Self {
        Self {
            start,
            end,
            plot_offset: config.width * config.group_column_size,
            plot_width: config.width * (1.0 - config.group_column_size),
            width_scale: config.width_scale,
        }
    }

    /// Scale spanning every task and milestone in the schedule.
    pub fn from_schedule(
        schedule: &Schedule,
        now: NaiveDateTime,
        config: &RenderConfig,
    ) -> Result<Self, LayoutError> {
        let (start, end) = chart_range(schedule, now)?;
        Ok(Self::new(start, end, config))
    }

    /// Position of `date` as a fraction of the plot area.
    pub fn fraction(&self, date: NaiveDateTime) -> f64 {
        let total = millis(self.end - self.start);
        millis(date - self.start) / total * self.width_scale
    }

    pub fn x(&self, date: NaiveDateTime) -> f64 {
        self.fraction(date) * self.plot_width + self.plot_offset
    }

    /// `count` evenly spaced instants from start to end, both included.
    pub fn ticks(&self, count: usize) -> Result<Vec<NaiveDateTime>, LayoutError> {
        match count {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.start]),
            _ => {
                let step = millis(self.end - self.start) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let offset = (step * i as f64).round() as i64;
                        TimeDelta::try_milliseconds(offset)
                            .and_then(|d| self.start.checked_add_signed(d))
                            .ok_or(LayoutError::DateOutOfRange)
                    })
                    .collect()
            }
        }
    }
}

fn millis(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64
}

/// Earliest and latest instant across tasks and milestones.
///
/// An empty schedule spans "now". A range shorter than one millisecond, the
/// scale's unit, is widened to one day from its start.
pub fn chart_range(
    schedule: &Schedule,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime), LayoutError> {
    let instants = schedule
        .tasks
        .iter()
        .flat_map(|t| [t.item.start, t.end])
        .chain(schedule.milestones.iter().map(|m| m.item.start));

    let (start, end) = instants.fold(None, |range, date| match range {
        None => Some((date, date)),
        Some((lo, hi)) => Some((date.min(lo), date.max(hi))),
    })
    .unwrap_or((now, now));

    if (end - start).num_milliseconds() == 0 {
        let end = start
            .checked_add_signed(TimeDelta::days(1))
            .ok_or(LayoutError::DateOutOfRange)?;
        return Ok((start, end));
    }
    Ok((start, end))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_scale.rs"]
mod tests;
