use bureaulog_engine::{
    DEFAULT_BUREAU_LOGGER, Extractor, Outcome, REFERENCE_CATALOG, Report,
    check_stream, classify_path, find_reference, reconstruct_all, reconstruct_path,
};
use bureaulog_testing::LogBuilder;
use bureaulog_types::{AgentId, Classification, TransitionKind::*, parse_log_timestamp};
use std::io::Cursor;

fn extract(log: &str) -> Extractor {
    let mut extractor = Extractor::with_default_logger().unwrap();
    extractor.ingest(Cursor::new(log.to_string()), "test.log").unwrap();
    extractor
}

#[test]
fn test_pending_stillborn_end_to_end() {
    let log = LogBuilder::new()
        .transition(PendingCreate, 9)
        .transition(DelayedCreate, 9)
        .transition(Destroy, 9)
        .transition(CreateConfirmed, 9)
        .transition(DestroyConfirmed, 9)
        .build();

    let report = check_stream(Cursor::new(log), "test.log", DEFAULT_BUREAU_LOGGER).unwrap();

    assert_eq!(report.agents.len(), 1);
    let agent = &report.agents[0];
    assert_eq!(agent.path.agent_id, AgentId::new(9));
    assert_eq!(agent.outcome, Outcome::Exact);
    assert_eq!(agent.reference, Some("Pending-stillborn"));
    assert_eq!(report.completion_count("Pending-stillborn"), 1);
    assert_eq!(report.diagnostics().count(), 0);
}

#[test]
fn test_later_duplicate_replaces_earlier() {
    let log = LogBuilder::new()
        .transition(PendingCreate, 5)
        .transition_raw(Destroy, "2008/03/14 10:00:00:000", "5")
        .noise("Bureau launch requested")
        .transition_raw(Destroy, "2008/03/14 11:30:00:250", "5")
        .build();

    let extractor = extract(&log);
    let path = reconstruct_path(extractor.registry(), AgentId::new(5));

    assert_eq!(path.transitions(), vec![PendingCreate, Destroy]);
    let destroy = path.last_event().unwrap();
    assert_eq!(destroy.sequence, 4);
    assert_eq!(
        destroy.timestamp,
        parse_log_timestamp("2008/03/14 11:30:00:250").unwrap()
    );
    assert_eq!(extractor.stats().superseded, 1);
}

#[test]
fn test_paths_sorted_by_sequence_without_duplicates() {
    let log = LogBuilder::new()
        .transition(ImmediateCreate, 1)
        .transition(PendingCreate, 2)
        .transition(Destroy, 1)
        .transition(DelayedCreate, 2)
        .transition(CreateConfirmed, 1)
        .transition(CreateConfirmed, 2)
        .transition(Destroy, 1)
        .transition(DestroyConfirmed, 1)
        .transition(CreateFailed, 3)
        .build();

    let extractor = extract(&log);
    for path in reconstruct_all(extractor.registry()) {
        let sequences: Vec<u64> = path.events.iter().map(|e| e.sequence).collect();
        assert!(sequences.windows(2).all(|w| w[0] <= w[1]), "{:?}", sequences);

        let mut kinds = path.transitions();
        let len = kinds.len();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), len);
    }
}

#[test]
fn test_duplicate_destroy_reorders_path() {
    // The second Destroy wins, moving it after the confirmation
    let log = LogBuilder::new()
        .transition(ImmediateCreate, 1)
        .transition(Destroy, 1)
        .transition(CreateConfirmed, 1)
        .transition(Destroy, 1)
        .transition(DestroyConfirmed, 1)
        .build();

    let extractor = extract(&log);
    let path = reconstruct_path(extractor.registry(), AgentId::new(1));
    assert_eq!(
        classify_path(&path),
        Classification::Exact(find_reference("Normal").unwrap())
    );
}

#[test]
fn test_mixed_outcomes() {
    let log = LogBuilder::new()
        .transition(PendingCreate, 10)
        .transition(Destroy, 10)
        .transition(ImmediateCreate, 2)
        .transition(CreateConfirmed, 2)
        .transition(Destroy, 7)
        .transition(ImmediateCreate, 7)
        .transition(PendingCreate, 30)
        .build();

    let report = Report::build(&extract(&log));

    let outcomes: Vec<(u64, Outcome, Option<&str>)> = report
        .agents
        .iter()
        .map(|a| (a.path.agent_id.value(), a.outcome, a.reference))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (2, Outcome::Partial, Some("Normal")),
            (7, Outcome::Invalid, None),
            (10, Outcome::Exact, Some("Aborted")),
            (30, Outcome::Partial, Some("Aborted")),
        ]
    );

    let diagnosed: Vec<u64> = report
        .diagnostics()
        .map(|a| a.path.agent_id.value())
        .collect();
    assert_eq!(diagnosed, vec![2, 7, 30]);
}

#[test]
fn test_completions_cover_catalog_in_order() {
    let log = LogBuilder::new()
        .transition(ImmediateCreate, 1)
        .transition(Destroy, 1)
        .transition(CreateConfirmed, 1)
        .transition(DestroyConfirmed, 1)
        .build();

    let report = Report::build(&extract(&log));
    let rendered: Vec<String> = report
        .completions
        .iter()
        .map(|c| format!("{}={}", c.label, c.count))
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    Aborted=0
    Pending-normal=0
    Pending-stillborn=0
    Normal=0
    Stillborn=1
    ");
    assert_eq!(report.completions.len(), REFERENCE_CATALOG.len());
}

#[test]
fn test_elapsed_measured_against_last_log_line() {
    let log = LogBuilder::new()
        .transition(PendingCreate, 4)
        .advance(chrono::Duration::seconds(7200))
        .noise("Bureau launch requested")
        .build();

    let report = Report::build(&extract(&log));
    // 1s step after the transition plus the advance
    assert_eq!(report.agents[0].elapsed_seconds, Some(7201));
}

#[test]
fn test_malformed_timestamp_does_not_abort_run() {
    let log = LogBuilder::new()
        .transition_raw(PendingCreate, "2008/02/31 09:00:00:000", "3")
        .transition(ImmediateCreate, 3)
        .transition(CreateConfirmed, 3)
        .build();

    let report = Report::build(&extract(&log));
    assert_eq!(report.stats.parse_failures, 1);
    assert_eq!(report.parse_failures[0].sequence, 1);
    assert_eq!(report.agents[0].path.transitions(), vec![ImmediateCreate, CreateConfirmed]);
    assert_eq!(report.agents[0].reference, Some("Normal"));
}

#[test]
fn test_summary_counts() {
    let log = LogBuilder::new()
        .transition(ImmediateCreate, 1)
        .transition(CreateConfirmed, 1)
        .transition(PendingCreate, 2)
        .transition(DelayedCreate, 2)
        .transition(CreateFailed, 2)
        .transition(ImmediateCreate, 3)
        .transition(ImmediateCreate, 4)
        .transition(CreateConfirmed, 4)
        .build();

    let summary = Report::build(&extract(&log)).summary;
    assert_eq!(summary.created, 4);
    assert_eq!(summary.confirmed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.orphaned, 1);
    assert_eq!(summary.orphaned_percent, 25.0);
}

#[test]
fn test_report_serializes() {
    let log = LogBuilder::new()
        .transition(PendingCreate, 8)
        .build();

    let report = Report::build(&extract(&log));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["agents"][0]["outcome"], "partial");
    assert_eq!(json["agents"][0]["reference"], "Aborted");
    assert_eq!(json["agents"][0]["path"]["agent_id"], 8);
    assert_eq!(json["agents"][0]["path"]["events"][0]["kind"], "pending_create");
    assert_eq!(json["completions"].as_array().unwrap().len(), 5);
}
