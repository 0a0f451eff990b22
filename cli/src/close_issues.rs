use anyhow::{bail, Context, Result};
use clap::Parser;
use loadsys_jira::{
    close_issues, extract_issue_keys, CloseReport, CloserOptions, JiraClient, DEFAULT_JIRA_URL,
    ENV_JIRA_URL,
};
use std::path::PathBuf;
use std::time::Duration;

/// Close "Release Pending" Jira issues referenced by a changelog.
#[derive(Debug, Parser)]
pub(crate) struct CloseIssues {
    /// Path to the changelog file to scan for issue keys.
    #[clap(long = "changelog")]
    changelog: PathBuf,

    /// Log what would happen without performing any mutating call.
    #[clap(long = "dry-run")]
    dry_run: bool,

    /// Release version announced in the closing comment. No comment is posted when
    /// this is omitted.
    #[clap(long = "version")]
    version: Option<String>,

    /// Base URL of the Jira instance. Defaults to $JIRA_URL, then the public
    /// tracker.
    #[clap(long = "jira-url")]
    jira_url: Option<String>,

    /// Seconds to pause before each API call.
    #[clap(long = "rate-limit", default_value = "1")]
    rate_limit: u64,
}

impl CloseIssues {
    pub(crate) async fn run(self) -> Result<()> {
        let text = tokio::fs::read_to_string(&self.changelog)
            .await
            .context(format!(
                "Unable to read changelog '{}'",
                self.changelog.display()
            ))?;
        let keys = extract_issue_keys(&text);
        if keys.is_empty() {
            println!("No issue keys found in the changelog.");
            return Ok(());
        }
        println!("Found {} issue key(s) in the changelog.", keys.len());

        let base_url = self
            .jira_url
            .or_else(|| std::env::var(ENV_JIRA_URL).ok())
            .unwrap_or_else(|| DEFAULT_JIRA_URL.to_string());
        let client = JiraClient::from_env(&base_url).context("Unable to create the Jira client")?;
        let options = CloserOptions {
            dry_run: self.dry_run,
            release_version: self.version,
            rate_limit: Duration::from_secs(self.rate_limit),
        };

        let report = close_issues(&client, &keys, &options).await;
        print_summary(&report);
        if report.stats.failed > 0 {
            bail!("{} issue(s) could not be processed", report.stats.failed);
        }
        Ok(())
    }
}

fn print_summary(report: &CloseReport) {
    let stats = &report.stats;
    println!();
    println!("Summary:");
    println!("  closed:              {}", stats.closed);
    println!("  already closed:      {}", stats.already_closed);
    println!("  not release pending: {}", stats.not_release_pending);
    println!("  dry-run skipped:     {}", stats.dry_run_skipped);
    println!("  failed:              {}", stats.failed);
    println!("  total:               {}", stats.total);
    if !report.manual_review.is_empty() {
        println!();
        println!("Needs manual review:");
        for item in &report.manual_review {
            println!(
                "  {} ({}, assigned to {})",
                item.key, item.status, item.assignee
            );
        }
    }
}
