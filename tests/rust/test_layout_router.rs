use super::*;
use chrono::{NaiveDate, NaiveDateTime};

use crate::config::RenderConfig;

fn dt(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn item(id: &str, kind: ItemKind, start: u32, end: u32, row: usize) -> RowItem {
    RowItem {
        id: id.to_string(),
        title: id.to_string(),
        class: "c".to_string(),
        kind,
        start: dt(start),
        end: dt(end),
        dependencies: Vec::new(),
        progress: None,
        group: None,
        row,
    }
}

fn setup() -> (TimeScale, RowMetrics) {
    let config = RenderConfig::new();
    (
        TimeScale::new(dt(1), dt(11), &config),
        RowMetrics::new(3, &config),
    )
}

#[test]
fn test_route_task_to_task_downward() {
    let (scale, metrics) = setup();
    let source = item("t1", ItemKind::Task, 1, 3, 0);
    let target = item("t2", ItemKind::Task, 5, 7, 1);
    let c = route(&source, &target, &scale, &metrics).unwrap();

    let sx = scale.x(dt(3));
    let tx = scale.x(dt(5));
    let turn = (sx + 50.0).min(tx);
    let bend = (turn + 25.0).min(tx);
    assert_eq!(
        c.path,
        vec![
            PathCommand::MoveTo(Point::new(sx, 75.0)),
            PathCommand::LineTo(Point::new(turn, 75.0)),
            PathCommand::LineTo(Point::new(turn, 100.0)),
            PathCommand::CubicTo(
                Point::new(turn, 125.0),
                Point::new(turn, 125.0),
                Point::new(bend, 125.0)
            ),
            PathCommand::LineTo(Point::new(tx, 125.0)),
        ]
    );
    assert_eq!(c.arrow_head, arrow_head(Point::new(tx, 125.0)));
}

#[test]
fn test_route_upward_approaches_from_below() {
    let (scale, metrics) = setup();
    let source = item("t1", ItemKind::Task, 1, 3, 2);
    let target = item("t2", ItemKind::Task, 5, 7, 0);
    let c = route(&source, &target, &scale, &metrics).unwrap();
    let turn = (scale.x(dt(3)) + 50.0).min(scale.x(dt(5)));
    assert_eq!(c.path[2], PathCommand::LineTo(Point::new(turn, 100.0)));
}

#[test]
fn test_route_into_milestone_lands_left_of_anchor() {
    let (scale, metrics) = setup();
    let source = item("t1", ItemKind::Task, 1, 3, 0);
    let target = item("m1", ItemKind::Milestone, 8, 8, 1);
    let c = route(&source, &target, &scale, &metrics).unwrap();
    let landing = scale.x(dt(8)) - 0.65 * 50.0;
    assert_eq!(c.path[4], PathCommand::LineTo(Point::new(landing, 125.0)));
}

#[test]
fn test_route_from_milestone_leaves_center() {
    let (scale, metrics) = setup();
    let source = item("m1", ItemKind::Milestone, 2, 2, 0);
    let target = item("t2", ItemKind::Task, 6, 7, 1);
    let c = route(&source, &target, &scale, &metrics).unwrap();
    assert_eq!(c.path[0], PathCommand::MoveTo(Point::new(scale.x(dt(2)), 75.0)));
}

#[test]
fn test_route_overlap_clamps_to_target() {
    let (scale, metrics) = setup();
    let source = item("t1", ItemKind::Task, 1, 9, 0);
    let target = item("t2", ItemKind::Task, 4, 6, 1);
    let c = route(&source, &target, &scale, &metrics).unwrap();
    let tx = scale.x(dt(4));
    assert_eq!(c.path[0], PathCommand::MoveTo(Point::new(tx, 75.0)));
    assert_eq!(c.path[1], PathCommand::LineTo(Point::new(tx, 75.0)));
}

#[test]
fn test_back_edges_not_routed() {
    let (scale, metrics) = setup();
    let source = item("t1", ItemKind::Task, 4, 6, 0);
    let same_start = item("t2", ItemKind::Task, 4, 8, 1);
    let earlier = item("t3", ItemKind::Task, 2, 8, 2);
    assert!(route(&source, &same_start, &scale, &metrics).is_none());
    assert!(route(&source, &earlier, &scale, &metrics).is_none());
}

#[test]
fn test_arrow_head_triangle() {
    assert_eq!(
        arrow_head(Point::new(100.0, 50.0)),
        vec![
            PathCommand::MoveTo(Point::new(100.0, 50.0)),
            PathCommand::LineTo(Point::new(90.0, 55.0)),
            PathCommand::LineTo(Point::new(90.0, 45.0)),
            PathCommand::Close,
        ]
    );
}
