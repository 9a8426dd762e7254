//! Row ordering, group bands and vertical row metrics.

use chrono::NaiveDateTime;

use crate::config::RenderConfig;
use crate::syntax::types::{GroupId, Item, Schedule};

use super::types::{GroupBand, ItemKind, RowItem};

/// Tasks and milestones merged and sorted into rows.
///
/// Sort key is `start_ms × (group_index + 1)`, ungrouped items counting as
/// index -1 (key 0). This is not chronological across groups: a later group
/// multiplies its timestamps by a larger factor. Ties keep declaration
/// order, tasks before milestones.
pub fn order_rows(schedule: &Schedule) -> Vec<RowItem> {
    let tasks = schedule
        .tasks
        .iter()
        .map(|t| row_item(&t.item, ItemKind::Task, t.end));
    let milestones = schedule
        .milestones
        .iter()
        .map(|m| row_item(&m.item, ItemKind::Milestone, m.item.start));

    let mut rows: Vec<RowItem> = tasks.chain(milestones).collect();
    rows.sort_by_key(sort_key);
    for (index, row) in rows.iter_mut().enumerate() {
        row.row = index;
    }
    rows
}

fn row_item(item: &Item, kind: ItemKind, end: NaiveDateTime) -> RowItem {
    RowItem {
        id: item.id.clone(),
        title: item.title.clone(),
        class: item.class.clone(),
        kind,
        start: item.start,
        end,
        dependencies: item.dependencies.clone(),
        progress: item.progress,
        group: item.group,
        row: 0,
    }
}

pub fn sort_key(row: &RowItem) -> i128 {
    let group_index = row.group.map_or(-1, |GroupId(i)| i as i128);
    i128::from(row.start.and_utc().timestamp_millis()) * (group_index + 1)
}

/// Contiguous row ranges per group, in declaration order.
pub fn group_bands(schedule: &Schedule, rows: &[RowItem]) -> Vec<GroupBand> {
    let mut position = 0;
    schedule
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let id = GroupId(index);
            let count = rows.iter().filter(|r| r.group == Some(id)).count();
            let band = GroupBand {
                group: id,
                title: group.title.clone(),
                start: position,
                end: position + count,
                class: if index % 2 == 0 { "even" } else { "odd" },
            };
            position += count;
            band
        })
        .collect()
}

// ─── RowMetrics ──────────────────────────────────────────────────────────────

/// Vertical placement of rows on the canvas.
///
/// The canvas is divided into `rows + 2` equal slots; row `r` occupies
/// slot `r + 1`, leaving one slot above for the title and one below for
/// the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub rows: usize,
    pub height: f64,
    pub row_height: f64,
    pub task_padding: f64,
}

impl RowMetrics {
    pub fn new(rows: usize, config: &RenderConfig) -> Self {
        Self {
            rows,
            height: config.height_for(rows),
            row_height: config.row_height,
            task_padding: config.task_padding,
        }
    }

    /// Height of one slot.
    pub fn pitch(&self) -> f64 {
        self.height / (self.rows as f64 + 2.0)
    }

    pub fn row_top(&self, row: usize) -> f64 {
        (row as f64 + 1.0) * self.pitch()
    }

    pub fn row_center(&self, row: usize) -> f64 {
        self.row_top(row) + self.row_height / 2.0
    }

    pub fn bar_top(&self, row: usize) -> f64 {
        self.row_top(row) + self.task_padding
    }

    pub fn bar_height(&self) -> f64 {
        self.row_height - 2.0 * self.task_padding
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_rows.rs"]
mod tests;
