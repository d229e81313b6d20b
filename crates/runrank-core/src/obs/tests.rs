use crate::{
    config::TrackerConfig,
    obs::{EventReport, metrics_report, metrics_reset_all, with_metrics_sink},
    test_support::RecordingSink,
    udf::{HostType, RankFunction},
};
use std::rc::Rc;

fn drive(values: &[Option<i64>]) {
    let mut function =
        RankFunction::init(TrackerConfig::default(), &[HostType::Int]).expect("setup should succeed");
    for value in values {
        let bytes = value.map(i64::to_ne_bytes);
        function.row(&[bytes.as_ref().map(|raw| &raw[..])]);
    }
    let _ = function.teardown();
}

#[test]
fn global_sink_accumulates_lifecycle_counters() {
    metrics_reset_all();

    drive(&[Some(1), Some(1), None, Some(1), Some(2)]);
    let _ = RankFunction::init(TrackerConfig::default(), &[HostType::Row]);
    let _ = RankFunction::init(TrackerConfig::default(), &[HostType::Unknown(40)]);

    let report = metrics_report();
    assert_eq!(report.ops.setups_accepted, 1);
    assert_eq!(report.ops.setups_rejected, 2);
    assert_eq!(report.ops.rejected_invalid_argument, 1);
    assert_eq!(report.ops.rejected_unsupported, 1);
    assert_eq!(report.ops.columns_tracked, 1);
    assert_eq!(report.ops.rows_observed, 5);
    assert_eq!(report.ops.rows_null, 1);
    assert_eq!(report.ops.streak_extends, 2);
    assert_eq!(report.ops.streak_resets, 2);
    assert_eq!(report.ops.teardowns, 1);
    assert_eq!(report.max_streak, 2);
}

#[test]
fn reset_clears_the_report() {
    drive(&[Some(3), Some(3)]);
    metrics_reset_all();

    assert_eq!(metrics_report(), EventReport::default());
}

#[test]
fn scoped_override_bypasses_global_state() {
    metrics_reset_all();
    let sink = Rc::new(RecordingSink::default());

    with_metrics_sink(sink.clone(), || drive(&[Some(9)]));

    assert_eq!(sink.events().len(), 3);
    assert_eq!(metrics_report(), EventReport::default());
}

#[test]
fn override_is_restored_after_scope() {
    metrics_reset_all();
    let sink = Rc::new(RecordingSink::default());

    with_metrics_sink(sink.clone(), || drive(&[Some(1)]));
    drive(&[Some(1)]);

    assert_eq!(sink.events().len(), 3);
    assert_eq!(metrics_report().ops.rows_observed, 1);
}

#[test]
fn report_serializes_for_endpoints() {
    metrics_reset_all();
    drive(&[Some(4), Some(4), Some(4)]);

    let json = serde_json::to_string(&metrics_report()).expect("report should serialize");
    let back: EventReport = serde_json::from_str(&json).expect("report should deserialize");

    assert_eq!(back.max_streak, 2);
    assert_eq!(back.ops.rows_observed, 3);
}
