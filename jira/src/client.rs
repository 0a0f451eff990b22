use crate::error::{self, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use snafu::{ensure, OptionExt, ResultExt};
use std::time::Duration;

/// The environment variable holding the bearer token.
pub const ENV_JIRA_TOKEN: &str = "JIRA_API_TOKEN";

/// The environment variable holding the base URL, overridable by flag.
pub const ENV_JIRA_URL: &str = "JIRA_URL";

pub const DEFAULT_JIRA_URL: &str = "https://issues.redhat.com";

/// Ceiling for any single REST call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    pub status: IssueStatus,
    #[serde(default)]
    pub assignee: Option<Assignee>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueStatus {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub display_name: String,
}

impl Issue {
    pub fn status_name(&self) -> &str {
        &self.fields.status.name
    }

    /// The assignee's display name, or "Unassigned" when the field is null.
    pub fn assignee_name(&self) -> &str {
        self.fields
            .assignee
            .as_ref()
            .map(|a| a.display_name.as_str())
            .unwrap_or("Unassigned")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TransitionsResponse {
    transitions: Vec<Transition>,
}

/// A minimal Jira REST v2 client covering exactly the calls the closer makes.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl JiraClient {
    /// Builds a client with the bearer token read from `JIRA_API_TOKEN`. Fails before
    /// any network call is made when the token is absent.
    pub fn from_env(base_url: &str) -> Result<Self> {
        let token = std::env::var(ENV_JIRA_TOKEN)
            .ok()
            .filter(|t| !t.is_empty())
            .context(error::MissingTokenSnafu {
                var: ENV_JIRA_TOKEN,
            })?;
        Self::new(base_url, &token)
    }

    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(error::ClientBuildSnafu)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn issue_url(&self, key: &str) -> String {
        format!("{}/rest/api/2/issue/{}", self.base_url, key)
    }

    /// `GET /rest/api/2/issue/{key}`. A 404 is an error like any other; the caller
    /// decides whether it is fatal.
    pub async fn get_issue(&self, key: &str) -> Result<Issue> {
        let response = self
            .http
            .get(self.issue_url(key))
            .bearer_auth(&self.token)
            .send()
            .await
            .context(error::HttpSnafu {
                operation: "get issue",
                key,
            })?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await.context(error::HttpSnafu {
                operation: "parse issue",
                key,
            })?),
            StatusCode::NOT_FOUND => error::IssueNotFoundSnafu { key }.fail()?,
            status => error::UnexpectedStatusSnafu {
                status: status.as_u16(),
                operation: "get issue",
                key,
            }
            .fail()?,
        }
    }

    /// `GET /rest/api/2/issue/{key}/transitions`.
    pub async fn transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let response = self
            .http
            .get(format!("{}/transitions", self.issue_url(key)))
            .bearer_auth(&self.token)
            .send()
            .await
            .context(error::HttpSnafu {
                operation: "list transitions",
                key,
            })?;
        ensure!(
            response.status() == StatusCode::OK,
            error::UnexpectedStatusSnafu {
                status: response.status().as_u16(),
                operation: "list transitions",
                key,
            }
        );
        let body: TransitionsResponse = response.json().await.context(error::HttpSnafu {
            operation: "parse transitions",
            key,
        })?;
        Ok(body.transitions)
    }

    /// `POST /rest/api/2/issue/{key}/transitions` with `{transition: {id}}`.
    pub async fn post_transition(&self, key: &str, transition_id: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/transitions", self.issue_url(key)))
            .bearer_auth(&self.token)
            .json(&json!({ "transition": { "id": transition_id } }))
            .send()
            .await
            .context(error::HttpSnafu {
                operation: "post transition",
                key,
            })?;
        ensure!(
            response.status().is_success(),
            error::UnexpectedStatusSnafu {
                status: response.status().as_u16(),
                operation: "post transition",
                key,
            }
        );
        Ok(())
    }

    /// `POST /rest/api/2/issue/{key}/comment` with `{body}`.
    pub async fn post_comment(&self, key: &str, body: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/comment", self.issue_url(key)))
            .bearer_auth(&self.token)
            .json(&json!({ "body": body }))
            .send()
            .await
            .context(error::HttpSnafu {
                operation: "post comment",
                key,
            })?;
        ensure!(
            response.status().is_success(),
            error::UnexpectedStatusSnafu {
                status: response.status().as_u16(),
                operation: "post comment",
                key,
            }
        );
        Ok(())
    }
}
