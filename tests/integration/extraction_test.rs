//! Tests for the extraction engine through the public API.

use logsift::extract::{self, grouper, normalize};
use logsift::{FileSpec, KeywordSpec, Strategy};

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn app_spec(strategy: Strategy) -> FileSpec {
    FileSpec {
        source_path: "app.log".into(),
        label: "app".to_string(),
        record_start_marker: "BEGIN".to_string(),
        context_marker: "app.log".to_string(),
        keywords: vec![KeywordSpec {
            match_pattern: "ERR".to_string(),
            tag: "error".to_string(),
        }],
        strategy,
        emit_epoch: false,
    }
}

#[test]
fn end_to_end_scenario() {
    // Two records: the first carries the error value taken from its
    // context line, the second saw no keyword match at all.
    let input = lines(&[
        "BEGIN",
        "app.log: 10/10/2023 01:02:03.345 UTC",
        "ERR something bad",
        "BEGIN",
        "app.log: 10/10/2023 01:02:04.000 UTC",
    ]);
    let records = extract::run(&input, &app_spec(Strategy::Direct), false).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["label"], "app");
    assert_eq!(records[0]["error"], "10/10/2023 01:02:03.345");
    assert_eq!(records[1]["label"], "app");
    assert!(!records[1].contains_key("error"));
}

#[test]
fn timestamp_round_trip() {
    // 2023-10-10T01:02:03.345Z
    assert_eq!(normalize("10/10/2023 01:02:03.345").unwrap(), 1696899723345);
}

#[test]
fn grouping_keeps_each_transaction_contiguous() {
    let marker = |id: &str, tail: &str| format!("w x y z q TransactionId[{id}] {tail}");
    let input = lines(&[
        "unrelated noise",
        &marker("alpha", "open"),
        "alpha payload 1",
        &marker("beta", "open"),
        "beta payload 1",
        &marker("alpha", "close"),
        "alpha payload 2",
        "trailing noise",
    ]);

    let flat = grouper::flatten(grouper::group(&input));

    // First-seen order, each id's lines contiguous, noise dropped.
    assert_eq!(
        flat,
        lines(&[
            &marker("alpha", "open"),
            "alpha payload 1",
            &marker("alpha", "close"),
            "alpha payload 2",
            &marker("beta", "open"),
            "beta payload 1",
        ])
    );
}

#[test]
fn unsupported_strategy_is_rejected_per_file() {
    let err = extract::run(&[], &app_spec(Strategy::Unsupported("IDM".into())), false).unwrap_err();
    assert!(err.to_string().contains("IDM"));
}

#[test]
fn epoch_columns_accompany_raw_values() {
    let input = lines(&[
        "BEGIN",
        "app.log: 10/10/2023 01:02:03.345 UTC",
        "ERR something bad",
    ]);
    let records = extract::run(&input, &app_spec(Strategy::Direct), true).unwrap();
    assert_eq!(records[0]["error"], "10/10/2023 01:02:03.345");
    assert_eq!(records[0]["error-epoch"], "1696899723345");
}
