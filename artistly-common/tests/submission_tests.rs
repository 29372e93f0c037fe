//! Integration tests for the manager dashboard
//!
//! Tests cover:
//! - Status counts always partition the full collection
//! - Approve/reject only touch the targeted record
//! - Unknown ids and non-pending records are refused without side effects

use artistly_common::models::SubmissionStatus;
use artistly_common::submissions::{ReviewDecision, SubmissionBoard, SubmissionFilter, SubmissionStats};
use artistly_common::{Error, Selection};

fn status_filter(status: SubmissionStatus) -> SubmissionFilter {
    SubmissionFilter {
        query: String::new(),
        status: Selection::Only(status),
    }
}

fn assert_partition(stats: SubmissionStats) {
    assert_eq!(stats.pending + stats.approved + stats.rejected, stats.total);
}

#[test]
fn test_counts_partition_collection_through_reviews() {
    let mut board = SubmissionBoard::seeded();
    assert_partition(board.stats());

    board.review("1", ReviewDecision::Approve).unwrap();
    assert_partition(board.stats());

    let _ = board.review("1", ReviewDecision::Reject);
    let _ = board.review("missing", ReviewDecision::Reject);
    assert_partition(board.stats());
    assert_eq!(board.stats().total, 3);
}

#[test]
fn test_empty_board_counts() {
    let board = SubmissionBoard::new(Vec::new());
    assert_eq!(board.stats(), SubmissionStats::default());
    assert!(board.filter(&SubmissionFilter::default()).is_empty());
}

#[test]
fn test_approve_changes_only_target_status() {
    let mut board = SubmissionBoard::seeded();
    let before = board.all().to_vec();

    let updated = board.review("1", ReviewDecision::Approve).unwrap().clone();
    assert_eq!(updated.status, SubmissionStatus::Approved);

    let after = board.all();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        if old.id == "1" {
            let mut expected = old.clone();
            expected.status = SubmissionStatus::Approved;
            assert_eq!(new, &expected);
        } else {
            assert_eq!(new, old);
        }
    }

    // Re-filtering reflects the transition
    let approved = board.filter(&status_filter(SubmissionStatus::Approved));
    assert!(approved.iter().any(|s| s.id == "1"));
    let pending = board.filter(&status_filter(SubmissionStatus::Pending));
    assert!(pending.iter().all(|s| s.id != "1"));

    assert_eq!(
        board.stats(),
        SubmissionStats {
            total: 3,
            pending: 0,
            approved: 2,
            rejected: 1,
        }
    );
}

#[test]
fn test_unknown_id_reports_not_found() {
    let mut board = SubmissionBoard::seeded();
    let before = board.all().to_vec();

    let err = board.review("42", ReviewDecision::Approve).unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(board.all(), before.as_slice());
}

#[test]
fn test_reapproving_is_invalid_transition() {
    let mut board = SubmissionBoard::seeded();
    board.review("1", ReviewDecision::Approve).unwrap();
    let before = board.all().to_vec();

    let err = board.review("1", ReviewDecision::Approve).unwrap_err();

    match err {
        Error::InvalidStateTransition { id, from, to } => {
            assert_eq!(id, "1");
            assert_eq!(from, SubmissionStatus::Approved);
            assert_eq!(to, SubmissionStatus::Approved);
        }
        other => panic!("expected InvalidStateTransition, got {:?}", other),
    }
    assert_eq!(board.all(), before.as_slice());
}

#[test]
fn test_query_and_status_combine() {
    let board = SubmissionBoard::seeded();

    let filter = SubmissionFilter {
        query: "mumbai".to_string(),
        status: Selection::Only(SubmissionStatus::Approved),
    };
    assert!(board.filter(&filter).is_empty());

    let filter = SubmissionFilter {
        query: "mumbai".to_string(),
        status: Selection::Only(SubmissionStatus::Pending),
    };
    let visible = board.filter(&filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Neha Kapoor");
}

#[test]
fn test_filter_preserves_source_order() {
    let board = SubmissionBoard::seeded();
    let ids: Vec<&str> = board
        .filter(&SubmissionFilter::default())
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}
