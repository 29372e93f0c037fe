//! Manager dashboard: application filtering, status counts and review
//!
//! The filtered table and the headline counts are independent views over the
//! same collection. Counts always cover the full collection, never the
//! filtered subset.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::directory::contains_folded;
use crate::models::{ArtistSubmission, SubmissionStatus};
use crate::{Error, Result, Selection};

/// Current selections on the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFilter {
    /// Free-text search over applicant name and city (case-insensitive)
    pub query: String,
    pub status: Selection<SubmissionStatus>,
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &ArtistSubmission) -> bool {
        self.matches_folded(submission, &self.query.to_lowercase())
    }

    fn matches_folded(&self, submission: &ArtistSubmission, folded_query: &str) -> bool {
        let text_match = contains_folded(&submission.name, folded_query)
            || contains_folded(&submission.city, folded_query);

        text_match && self.status.admits(|status| submission.status == *status)
    }
}

/// Visible applications for a selection, in source order
pub fn filter_submissions<'a, I>(submissions: I, filter: &SubmissionFilter) -> Vec<&'a ArtistSubmission>
where
    I: IntoIterator<Item = &'a ArtistSubmission>,
{
    let folded_query = filter.query.to_lowercase();
    submissions
        .into_iter()
        .filter(|s| filter.matches_folded(s, &folded_query))
        .collect()
}

/// Result line above the table, e.g. "2 applications found"
pub fn results_summary(count: usize) -> String {
    format!("{} application{} found", count, if count == 1 { "" } else { "s" })
}

/// Headline counts for the dashboard stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl SubmissionStats {
    /// Partition a collection by status
    pub fn tally<'a, I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = &'a ArtistSubmission>,
    {
        submissions
            .into_iter()
            .fold(Self::default(), |mut stats, submission| {
                stats.total += 1;
                match submission.status {
                    SubmissionStatus::Pending => stats.pending += 1,
                    SubmissionStatus::Approved => stats.approved += 1,
                    SubmissionStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }
}

/// Reviewer action on a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn target_status(&self) -> SubmissionStatus {
        match self {
            ReviewDecision::Approve => SubmissionStatus::Approved,
            ReviewDecision::Reject => SubmissionStatus::Rejected,
        }
    }
}

/// The in-process application collection
///
/// A review is the only mutation in the system; it touches one record and
/// only while that record is pending.
#[derive(Debug, Clone)]
pub struct SubmissionBoard {
    submissions: Vec<ArtistSubmission>,
}

impl SubmissionBoard {
    pub fn new(submissions: Vec<ArtistSubmission>) -> Self {
        Self { submissions }
    }

    /// Board loaded with the fixed catalog applications
    pub fn seeded() -> Self {
        Self::new(catalog::submissions())
    }

    pub fn all(&self) -> &[ArtistSubmission] {
        &self.submissions
    }

    pub fn get(&self, id: &str) -> Option<&ArtistSubmission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn filter(&self, filter: &SubmissionFilter) -> Vec<&ArtistSubmission> {
        let visible = filter_submissions(&self.submissions, filter);
        debug!(
            query = %filter.query,
            status = %filter.status,
            results = visible.len(),
            "Filtered submissions"
        );
        visible
    }

    pub fn stats(&self) -> SubmissionStats {
        SubmissionStats::tally(&self.submissions)
    }

    /// Approve or reject a pending application
    ///
    /// # Errors
    /// - `Error::NotFound` if no application has this id
    /// - `Error::InvalidStateTransition` if it was already approved or rejected
    ///
    /// On error the board is left unchanged.
    pub fn review(&mut self, id: &str, decision: ReviewDecision) -> Result<&ArtistSubmission> {
        let target = decision.target_status();

        let Some(submission) = self.submissions.iter_mut().find(|s| s.id == id) else {
            warn!("Review of unknown submission {}", id);
            return Err(Error::NotFound(format!("submission {}", id)));
        };

        if submission.status.is_terminal() {
            warn!(
                "Refusing to move submission {} from {} to {}",
                id, submission.status, target
            );
            return Err(Error::InvalidStateTransition {
                id: id.to_string(),
                from: submission.status,
                to: target,
            });
        }

        submission.status = target;
        info!("Application {} ({}) {}", id, submission.name, target);
        Ok(&*submission)
    }
}

impl Default for SubmissionBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
