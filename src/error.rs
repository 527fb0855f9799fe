use thiserror::Error;

/// Missing or invalid configuration at startup. Fatal — the process exits non-zero.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("could not read source list file {path}: {source}")]
    SourceFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML in {path}: {source}")]
    SourceYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("database pool setup failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-source fetch failure. Logged at WARN and isolated to the failing source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("timed out fetching {url} after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },
}

/// Per-item parse failure. Logged at DEBUG and the item is skipped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("feed payload did not parse as RSS/Atom: {0}")]
    Feed(String),

    #[error("scraped candidate {url} rejected: {reason}")]
    RejectedCandidate { url: String, reason: &'static str },

    #[error("{field} must be non-empty")]
    MissingField { field: &'static str },
}

/// Per-item translation failure. Logged at WARN; the pipeline continues with the
/// original text.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("provider {provider} failed: {reason}")]
    ProviderFailed { provider: &'static str, reason: String },

    #[error("http error calling {provider}: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Per-batch model failure. Logged at ERROR; sentiment falls back to the
/// keyword heuristic so every item still receives a sentiment triplet.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("sentiment classifier {classifier} failed: {reason}")]
    ClassifierFailed {
        classifier: &'static str,
        reason: String,
    },
}

/// Per-item classification failure. Defaults to `{category: Other, should_show_pib: false}`.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("category scoring failed: {0}")]
    ScoringFailed(String),
}

/// Per-item confidence-scoring failure. Defaults to medium confidence +
/// `needs_verification = true`.
#[derive(Debug, Error)]
pub enum ConfidenceError {
    #[error("confidence calculation failed: {0}")]
    CalculationFailed(String),
}

/// Per-item persistence failure. Logged at ERROR; the item is skipped, the
/// cycle continues.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("article violates a schema invariant: {0}")]
    InvariantViolation(String),
}

/// Per-alert failure (DB or SMTP). `email_sent` is set false; the alert row is
/// retained for a later operator retry.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("database error inserting alert: {0}")]
    Database(#[from] sqlx::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("email message build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("invalid email address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },
}

/// Umbrella error returned by entry points (CLI commands, cycle orchestration)
/// that can genuinely fail in more than one family. Per-item and per-source
/// errors are caught and converted to a logged-and-skipped outcome at their
/// originating stage and never reach this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_missing_var_message() {
        let err = ConfigError::MissingVar("DATABASE_URL");
        assert!(format!("{err}").contains("DATABASE_URL"));
    }

    #[test]
    fn fetch_error_timeout_message() {
        let err = FetchError::Timeout {
            url: "https://example.com/feed".into(),
            timeout_secs: 30,
        };
        let msg = format!("{err}");
        assert!(msg.contains("30s"));
        assert!(msg.contains("example.com"));
    }

    #[test]
    fn parse_error_rejected_candidate_message() {
        let err = ParseError::RejectedCandidate {
            url: "https://example.com/login".into(),
            reason: "non-article pattern",
        };
        assert!(format!("{err}").contains("non-article pattern"));
    }
}
