use snafu::Snafu;

/// The `Result` type returned by this library.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by this library.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by this library.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum InnerError {
    #[snafu(display("The environment variable '{}' is not set", var))]
    MissingToken { var: String },

    #[snafu(display("Unable to construct the HTTP client: {}", source))]
    ClientBuild { source: reqwest::Error },

    #[snafu(display("Unable to {} for issue '{}': {}", operation, key, source))]
    Http {
        operation: String,
        key: String,
        source: reqwest::Error,
    },

    #[snafu(display("Issue '{}' was not found", key))]
    IssueNotFound { key: String },

    #[snafu(display(
        "Unexpected HTTP {} while trying to {} for issue '{}'",
        status,
        operation,
        key
    ))]
    UnexpectedStatus {
        status: u16,
        operation: String,
        key: String,
    },

    #[snafu(display("Issue '{}' has no transition matching any of {:?}", key, wanted))]
    NoMatchingTransition { key: String, wanted: Vec<String> },
}
