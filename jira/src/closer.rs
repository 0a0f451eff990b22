use crate::client::{JiraClient, Transition};
use crate::error::{self, Result};
use log::{error, info};
use snafu::OptionExt;
use std::time::Duration;

/// Transition names that count as closing an issue, most preferred first.
pub const TRANSITION_PREFERENCE: [&str; 5] = ["Done", "Close", "Closed", "Resolve", "Resolved"];

/// What an issue's current status means for the closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Already in a terminal status, nothing to do.
    AlreadyClosed,
    /// Exactly "Release Pending", eligible for closure.
    Eligible,
    /// Any other status, left for manual review.
    NotApplicable,
}

/// Case-insensitive status classification.
pub fn classify(status: &str) -> Classification {
    match status.trim().to_ascii_lowercase().as_str() {
        "done" | "closed" | "resolved" => Classification::AlreadyClosed,
        "release pending" => Classification::Eligible,
        _ => Classification::NotApplicable,
    }
}

/// The first transition matching the preference list, case-insensitively.
pub fn pick_transition<'a>(transitions: &'a [Transition]) -> Option<&'a Transition> {
    TRANSITION_PREFERENCE.iter().find_map(|wanted| {
        transitions
            .iter()
            .find(|transition| transition.name.eq_ignore_ascii_case(wanted))
    })
}

/// An issue recorded for the manual-review section of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualReview {
    pub key: String,
    pub status: String,
    pub assignee: String,
}

/// Per-issue outcome, folded into `CloseStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOutcome {
    Closed,
    AlreadyClosed,
    NotReleasePending,
    DryRunSkipped,
    Failed,
}

/// Tallies for the run summary. Threaded through the loop as a value rather than
/// living in process-wide counters, so a caller (or a test) sees exactly what one
/// run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CloseStats {
    pub closed: usize,
    pub already_closed: usize,
    pub not_release_pending: usize,
    pub dry_run_skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl CloseStats {
    pub fn record(&mut self, outcome: IssueOutcome) {
        self.total += 1;
        match outcome {
            IssueOutcome::Closed => self.closed += 1,
            IssueOutcome::AlreadyClosed => self.already_closed += 1,
            IssueOutcome::NotReleasePending => self.not_release_pending += 1,
            IssueOutcome::DryRunSkipped => self.dry_run_skipped += 1,
            IssueOutcome::Failed => self.failed += 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct CloseReport {
    pub stats: CloseStats,
    pub manual_review: Vec<ManualReview>,
}

/// Options for one closer run.
#[derive(Debug, Clone)]
pub struct CloserOptions {
    /// Log intent only; perform no mutating call.
    pub dry_run: bool,
    /// When present, a comment announcing this release is posted before the
    /// transition.
    pub release_version: Option<String>,
    /// Pause inserted before every outbound call in the per-issue loop.
    pub rate_limit: Duration,
}

impl Default for CloserOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            release_version: None,
            rate_limit: Duration::from_secs(1),
        }
    }
}

/// Walks the extracted keys one at a time. Any per-issue failure is counted and the
/// loop continues; the caller escalates to a non-zero exit only if the final failed
/// count is above zero.
pub async fn close_issues(
    client: &JiraClient,
    keys: &[String],
    options: &CloserOptions,
) -> CloseReport {
    let mut report = CloseReport::default();
    for key in keys {
        let outcome = close_one(client, key, options, &mut report.manual_review).await;
        report.stats.record(outcome);
    }
    report
}

async fn close_one(
    client: &JiraClient,
    key: &str,
    options: &CloserOptions,
    manual_review: &mut Vec<ManualReview>,
) -> IssueOutcome {
    throttle(options).await;
    let issue = match client.get_issue(key).await {
        Ok(issue) => issue,
        Err(e) => {
            error!("unable to fetch issue '{}': {}", key, e);
            return IssueOutcome::Failed;
        }
    };

    if let Some(outcome) = decide(
        key,
        issue.status_name(),
        issue.assignee_name(),
        options.dry_run,
        manual_review,
    ) {
        return outcome;
    }

    match transition_to_done(client, key, options).await {
        Ok(transition_name) => {
            info!("closed issue '{}' via transition '{}'", key, transition_name);
            IssueOutcome::Closed
        }
        Err(e) => {
            error!("unable to close issue '{}': {}", key, e);
            IssueOutcome::Failed
        }
    }
}

/// The pure decision step. Returns `None` exactly when the issue is eligible and
/// this is a live run, i.e. when network mutation is required.
fn decide(
    key: &str,
    status: &str,
    assignee: &str,
    dry_run: bool,
    manual_review: &mut Vec<ManualReview>,
) -> Option<IssueOutcome> {
    match classify(status) {
        Classification::AlreadyClosed => {
            info!("issue '{}' is already '{}'", key, status);
            Some(IssueOutcome::AlreadyClosed)
        }
        Classification::NotApplicable => {
            info!("issue '{}' is '{}', leaving it for manual review", key, status);
            manual_review.push(ManualReview {
                key: key.to_string(),
                status: status.to_string(),
                assignee: assignee.to_string(),
            });
            Some(IssueOutcome::NotReleasePending)
        }
        Classification::Eligible if dry_run => {
            info!("dry run: would close issue '{}'", key);
            Some(IssueOutcome::DryRunSkipped)
        }
        Classification::Eligible => None,
    }
}

async fn transition_to_done(
    client: &JiraClient,
    key: &str,
    options: &CloserOptions,
) -> Result<String> {
    if let Some(version) = &options.release_version {
        throttle(options).await;
        client
            .post_comment(
                key,
                &format!("This issue was resolved in release {}.", version),
            )
            .await?;
    }

    throttle(options).await;
    let transitions = client.transitions(key).await?;
    let transition = pick_transition(&transitions).context(error::NoMatchingTransitionSnafu {
        key,
        wanted: TRANSITION_PREFERENCE
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>(),
    })?;

    throttle(options).await;
    client.post_transition(key, &transition.id).await?;
    Ok(transition.name.clone())
}

async fn throttle(options: &CloserOptions) {
    if !options.rate_limit.is_zero() {
        tokio::time::sleep(options.rate_limit).await;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn transition(id: &str, name: &str) -> Transition {
        Transition {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(classify("Done"), Classification::AlreadyClosed);
        assert_eq!(classify("closed"), Classification::AlreadyClosed);
        assert_eq!(classify("RESOLVED"), Classification::AlreadyClosed);
        assert_eq!(classify("Release Pending"), Classification::Eligible);
        assert_eq!(classify("release pending"), Classification::Eligible);
        assert_eq!(classify("In Progress"), Classification::NotApplicable);
        assert_eq!(classify("New"), Classification::NotApplicable);
        assert_eq!(classify(""), Classification::NotApplicable);
    }

    #[test]
    fn transition_preference_order() {
        let transitions = vec![
            transition("11", "To Do"),
            transition("21", "Closed"),
            transition("31", "done"),
        ];
        // "Done" is preferred over "Closed" even though "Closed" appears first.
        let picked = pick_transition(&transitions).unwrap();
        assert_eq!(picked.id, "31");
    }

    #[test]
    fn no_matching_transition() {
        let transitions = vec![transition("11", "To Do"), transition("21", "In Review")];
        assert!(pick_transition(&transitions).is_none());
    }

    #[test]
    fn dry_run_skips_eligible_issues() {
        let mut manual_review = Vec::new();
        let outcome = decide("ROK-1", "Release Pending", "Unassigned", true, &mut manual_review);
        assert_eq!(outcome, Some(IssueOutcome::DryRunSkipped));
        assert!(manual_review.is_empty());
    }

    #[test]
    fn live_eligible_issues_need_action() {
        let mut manual_review = Vec::new();
        let outcome = decide("ROK-1", "Release Pending", "Unassigned", false, &mut manual_review);
        assert_eq!(outcome, None);
    }

    #[test]
    fn not_applicable_issues_are_recorded_for_review() {
        let mut manual_review = Vec::new();
        let outcome = decide("ROK-2", "In Progress", "A. Developer", false, &mut manual_review);
        assert_eq!(outcome, Some(IssueOutcome::NotReleasePending));
        assert_eq!(
            manual_review,
            vec![ManualReview {
                key: "ROK-2".to_string(),
                status: "In Progress".to_string(),
                assignee: "A. Developer".to_string(),
            }]
        );
    }

    #[test]
    fn stats_accumulate_by_outcome() {
        let mut stats = CloseStats::default();
        stats.record(IssueOutcome::Closed);
        stats.record(IssueOutcome::AlreadyClosed);
        stats.record(IssueOutcome::DryRunSkipped);
        stats.record(IssueOutcome::DryRunSkipped);
        stats.record(IssueOutcome::Failed);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.already_closed, 1);
        assert_eq!(stats.dry_run_skipped, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.not_release_pending, 0);
    }
}
