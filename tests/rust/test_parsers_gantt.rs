use super::*;
use chrono::{NaiveDate, NaiveDateTime};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn parse(src: &str) -> Result<Schedule, ParseError> {
    GanttParser.parse(src)
}

fn parse_err(src: &str) -> ParseError {
    parse(src).unwrap_err()
}

// ─── Tasks ───────────────────────────────────────────────────────────────────

#[test]
fn test_relative_task_chain() {
    let s = parse("task A,t1,class1,2024-01-01,3D\ntask B,t2,class1,3D after t1,2D").unwrap();
    assert_eq!(s.tasks.len(), 2);
    assert!(s.groups.is_empty());
    assert_eq!(s.tasks[0].item.start, dt(2024, 1, 1));
    assert_eq!(s.tasks[0].end, dt(2024, 1, 4));
    // The duration counts from t1's end (Jan 4).
    assert_eq!(s.tasks[1].item.start, dt(2024, 1, 7));
    assert_eq!(s.tasks[1].end, dt(2024, 1, 9));
    assert!(s.tasks.iter().all(|t| t.item.dependencies.is_empty()));
}

#[test]
fn test_task_after_prefix_starts_at_reference_end() {
    let s = parse("task A,t1,c,2024-01-01,3D\ntask B,t2,c,after t1,2D").unwrap();
    assert_eq!(s.tasks[1].item.start, dt(2024, 1, 4));
    assert_eq!(s.tasks[1].end, dt(2024, 1, 6));
}

#[test]
fn test_task_fields_trimmed() {
    let s = parse("task  Design doc , t1 , design , 2024-01-01 , 2024-01-05 ").unwrap();
    let t = &s.tasks[0];
    assert_eq!(t.item.title, "Design doc");
    assert_eq!(t.item.id, "t1");
    assert_eq!(t.item.class, "design");
    assert_eq!(t.end, dt(2024, 1, 5));
}

#[test]
fn test_task_dependencies_and_progress() {
    let src = "task A,t1,c,2024-01-01,1D\n\
               task B,t2,c,2024-01-01,1D\n\
               task C,t3,c,after t2,1D,t1 t2, 40 %";
    let s = parse(src).unwrap();
    let t3 = &s.tasks[2].item;
    assert_eq!(t3.dependencies, vec!["t1", "t2"]);
    assert_eq!(t3.progress, Some(0.4));
}

#[test]
fn test_task_empty_progress_is_none() {
    let s = parse("task A,t1,c,2024-01-01,1D,,").unwrap();
    assert!(s.tasks[0].item.dependencies.is_empty());
    assert_eq!(s.tasks[0].item.progress, None);
}

#[test]
fn test_task_bad_progress() {
    let e = parse_err("task A,t1,c,2024-01-01,1D,,lots");
    assert_eq!(e.line, 1);
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
}

#[test]
fn test_task_field_count() {
    let e = parse_err("task A,t1,c,2024-01-01");
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
    let e = parse_err("task A,t1,c,2024-01-01,1D,,,extra");
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
}

#[test]
fn test_task_empty_id() {
    let e = parse_err("task A, ,c,2024-01-01,1D");
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
}

#[test]
fn test_task_invalid_end() {
    let e = parse_err("task A,t1,c,2024-01-01,whenever");
    assert_eq!(e.kind, ErrorKind::InvalidDate("whenever".to_string()));
}

// ─── Milestones ──────────────────────────────────────────────────────────────

#[test]
fn test_milestone_fields() {
    let src = "task A,t1,c,2024-01-01,2D\nmilestone Ship,m1,ship,1D after t1,t1,100%";
    let s = parse(src).unwrap();
    let m = &s.milestones[0].item;
    assert_eq!(m.start, dt(2024, 1, 4));
    assert_eq!(m.dependencies, vec!["t1"]);
    assert_eq!(m.progress, Some(1.0));
}

#[test]
fn test_milestone_field_count() {
    let e = parse_err("milestone Ship,m1,ship");
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
}

// ─── Identity and references ─────────────────────────────────────────────────

#[test]
fn test_duplicate_id_across_kinds() {
    let e = parse_err("task A,t1,c,2024-01-01,1D\nmilestone M,t1,c,2024-01-02");
    assert_eq!(e, ParseError::new(2, ErrorKind::DuplicateKey("t1".to_string())));
}

#[test]
fn test_duplicate_task_id_on_second_line() {
    let e = parse_err("task A,t1,c,2024-01-01,2024-01-02\ntask B,t1,c,2024-01-03,2024-01-04");
    assert_eq!(e, ParseError::new(2, ErrorKind::DuplicateKey("t1".to_string())));
}

#[test]
fn test_duplicate_id_milestone_then_task() {
    let e = parse_err("milestone M,m1,c,2024-01-01\ntask A,m1,c,2024-01-02,1D");
    assert_eq!(e, ParseError::new(2, ErrorKind::DuplicateKey("m1".to_string())));
}

#[test]
fn test_forward_dependency_rejected() {
    let src = "task A,t1,c,2024-01-01,1D,t2\ntask B,t2,c,2024-01-01,1D";
    let e = parse_err(src);
    assert_eq!(e.line, 1);
    assert_eq!(e.kind, ErrorKind::ReferenceNotFound("t2".to_string()));
}

#[test]
fn test_forward_relative_date_rejected() {
    let src = "task A,t1,c,after t2,1D\ntask B,t2,c,2024-01-01,1D";
    assert_eq!(
        parse_err(src).kind,
        ErrorKind::ReferenceNotFound("t2".to_string())
    );
}

// ─── Click ───────────────────────────────────────────────────────────────────

#[test]
fn test_click_goto() {
    let s = parse("milestone M,m1,class1,2024-01-01\nclick m1,goto,https://example.com").unwrap();
    assert_eq!(
        s.events,
        vec![Event {
            task_id: "m1".to_string(),
            event_type: EventType::GoTo,
            url: "https://example.com".to_string(),
        }]
    );
}

#[test]
fn test_click_type_case_insensitive() {
    let s = parse("milestone M,m1,c,2024-01-01\nclick m1, PopUp ,https://example.com").unwrap();
    assert_eq!(s.events[0].event_type, EventType::Popup);
}

#[test]
fn test_click_bad_type() {
    let e = parse_err("milestone M,m1,class1,2024-01-01\nclick m1,badtype,https://example.com");
    assert_eq!(e.line, 2);
    assert_eq!(e.kind, ErrorKind::UnknownEventType("badtype".to_string()));
}

#[test]
fn test_click_unknown_target() {
    let e = parse_err("click m1,goto,https://example.com");
    assert_eq!(e.kind, ErrorKind::ReferenceNotFound("m1".to_string()));
}

#[test]
fn test_click_before_target_defined() {
    let e = parse_err("click m1,goto,https://example.com\nmilestone M,m1,c,2024-01-01");
    assert_eq!(
        e,
        ParseError::new(1, ErrorKind::ReferenceNotFound("m1".to_string()))
    );
}

#[test]
fn test_click_field_count() {
    let e = parse_err("milestone M,m1,c,2024-01-01\nclick m1,goto");
    assert!(matches!(e.kind, ErrorKind::Syntax(_)));
}

// ─── Groups, options and line handling ───────────────────────────────────────

#[test]
fn test_group_assignment() {
    let src = "task Loose,t0,c,2024-01-01,1D\n\
               group Alpha\n\
               task A,t1,c,2024-01-01,1D\n\
               group Beta\n\
               milestone M,m1,c,2024-01-02";
    let s = parse(src).unwrap();
    assert_eq!(s.groups.len(), 2);
    assert_eq!(s.groups[1].title, "Beta");
    assert_eq!(s.tasks[0].item.group, None);
    assert_eq!(s.tasks[1].item.group, Some(GroupId(0)));
    assert_eq!(s.milestones[0].item.group, Some(GroupId(1)));
}

#[test]
fn test_options() {
    let src = "option Title My   release plan\n\
               option axisTicks 4\n\
               option todaymarker on\n\
               option colour blue\n\
               option lonely";
    let s = parse(src).unwrap();
    assert_eq!(s.options.title(), Some("My release plan"));
    assert_eq!(s.options.get(OptionKey::AxisTicks), Some("4"));
    assert!(s.options.is_on(OptionKey::TodayMarker));
    assert_eq!(s.options.len(), 3);
}

#[test]
fn test_comments_blank_lines_and_crlf() {
    let src = "%% header\r\n\r\n   \r\ntask A,t1,c,2024-01-01,1D\r\n";
    let s = parse(src).unwrap();
    assert_eq!(s.tasks.len(), 1);
    assert_eq!(s.tasks[0].end, dt(2024, 1, 2));
}

#[test]
fn test_unknown_keyword() {
    let e = parse_err("task A,t1,c,2024-01-01,1D\nsection Foo");
    assert_eq!(e.line, 2);
    match e.kind {
        ErrorKind::Syntax(msg) => assert!(msg.contains("click, group, milestone, option, task")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    let s = parse("").unwrap();
    assert!(s.is_empty());
    assert!(s.options.is_empty());
}

#[test]
fn test_parse_is_deterministic() {
    let src = "group G\ntask A,t1,c,2024-01-01,1W\nmilestone M,m1,c,after t1,t1";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
}
