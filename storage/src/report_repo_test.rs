//! Unit tests for PollReportRepository.

use tempfile::TempDir;

use crate::database::Database;
use crate::error::StorageError;
use crate::models::ReportKind;

async fn open_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("test.db");
    let db = Database::connect(path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to open database");
    (dir, db)
}

fn weekdays() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

#[tokio::test]
async fn test_insert_and_get_report() {
    let (_dir, db) = open_test_db().await;
    db.polls()
        .start_new_poll(1, 100, "poll-1", &weekdays())
        .await
        .expect("Failed to seed poll");
    let reports = db.reports();

    reports
        .insert_report("poll-1", 1, 500, Some(2), 1_700_000_000)
        .await
        .expect("Failed to insert report");

    let report = reports
        .get_report(1, 500)
        .await
        .expect("Failed to get report");

    assert_eq!(report.poll_id, "poll-1");
    assert_eq!(report.sent_timestamp, 1_700_000_000);
    assert_eq!(report.kind(), ReportKind::SingleDay { option_id: 2 });
}

#[tokio::test]
async fn test_full_week_report_kind() {
    let (_dir, db) = open_test_db().await;
    db.polls()
        .start_new_poll(1, 100, "poll-1", &weekdays())
        .await
        .expect("Failed to seed poll");
    let reports = db.reports();

    reports
        .insert_report("poll-1", 1, 501, None, 1_700_000_000)
        .await
        .expect("Failed to insert report");

    let report = reports
        .get_report(1, 501)
        .await
        .expect("Failed to get report");

    assert_eq!(report.kind(), ReportKind::FullWeek);
}

#[tokio::test]
async fn test_get_report_not_found() {
    let (_dir, db) = open_test_db().await;

    let err = db
        .reports()
        .get_report(1, 999)
        .await
        .expect_err("Missing report should fail");

    assert!(matches!(
        err,
        StorageError::ReportNotFound { chat_id: 1, message_id: 999 }
    ));
}

#[tokio::test]
async fn test_get_all_reports_filters_by_poll() {
    let (_dir, db) = open_test_db().await;
    let polls = db.polls();
    polls
        .start_new_poll(1, 100, "poll-a", &weekdays())
        .await
        .expect("Failed to seed poll");
    polls
        .start_new_poll(1, 200, "poll-b", &weekdays())
        .await
        .expect("Failed to seed poll");
    let reports = db.reports();

    reports
        .insert_report("poll-a", 1, 500, None, 1_700_000_000)
        .await
        .expect("Failed to insert report");
    reports
        .insert_report("poll-a", 1, 501, Some(0), 1_700_000_100)
        .await
        .expect("Failed to insert report");
    reports
        .insert_report("poll-b", 1, 502, Some(1), 1_700_000_200)
        .await
        .expect("Failed to insert report");

    let for_a = reports
        .get_all_reports("poll-a")
        .await
        .expect("Failed to list reports");

    assert_eq!(for_a.len(), 2);
    assert!(for_a.iter().all(|r| r.poll_id == "poll-a"));
}
