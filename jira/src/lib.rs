/*!

This library closes "Release Pending" Jira issues referenced by a release changelog.
It extracts issue keys from the changelog text, fetches each issue from the Jira
REST v2 API, and transitions the eligible ones to a closed status, pacing calls to
respect API rate limits.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use changelog::{extract_issue_keys, is_valid_key};
pub use client::{
    Assignee, Issue, IssueFields, IssueStatus, JiraClient, Transition, DEFAULT_JIRA_URL,
    ENV_JIRA_TOKEN, ENV_JIRA_URL,
};
pub use closer::{
    classify, close_issues, pick_transition, Classification, CloseReport, CloseStats,
    CloserOptions, IssueOutcome, ManualReview, TRANSITION_PREFERENCE,
};
pub use error::{Error, Result};

mod changelog;
mod client;
mod closer;
mod error;
