//! Issue records as exported from a tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::errors::IngestError;

/// One tracker issue. Deserializes directly from GitHub REST issue objects
/// (`created_at`, `closed_at`, `labels[].name`, `pull_request`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueRecord {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "label_names")]
    pub labels: Vec<String>,
    #[serde(default, rename = "pull_request", deserialize_with = "present")]
    pub is_pull_request: bool,
}

impl IssueRecord {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            closed_at: None,
            labels: Vec::new(),
            is_pull_request: false,
        }
    }

    pub fn closed(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Hours from creation to closure, if closed.
    pub fn resolution_hours(&self) -> Option<f64> {
        self.closed_at
            .map(|closed| (closed - self.created_at).num_seconds() as f64 / 3600.0)
    }
}

/// Parse a JSON array of issues.
pub fn parse_issues(json: &str) -> Result<Vec<IssueRecord>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Name(String),
    Object { name: String },
}

fn label_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let labels = Option::<Vec<LabelRepr>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(labels
        .into_iter()
        .map(|l| match l {
            LabelRepr::Name(name) | LabelRepr::Object { name } => name,
        })
        .collect())
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<serde::de::IgnoredAny>::deserialize(deserializer)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_shape() {
        let json = r#"[
            {
                "number": 12,
                "created_at": "2024-03-04T10:00:00Z",
                "closed_at": "2024-03-05T12:00:00Z",
                "labels": [{"name": "bug"}, {"name": "severity: high", "color": "ff0000"}]
            },
            {
                "number": 13,
                "created_at": "2024-03-06T10:00:00Z",
                "closed_at": null,
                "labels": [],
                "pull_request": {"url": "https://example.invalid/pr/13"}
            }
        ]"#;
        let issues = parse_issues(json).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].labels, vec!["bug", "severity: high"]);
        assert_eq!(issues[0].resolution_hours(), Some(26.0));
        assert!(!issues[0].is_pull_request);
        assert!(issues[1].is_pull_request);
        assert_eq!(issues[1].closed_at, None);
    }

    #[test]
    fn test_plain_string_labels() {
        let json = r#"[{"created_at": "2024-03-04T10:00:00Z", "labels": ["P1"]}]"#;
        let issues = parse_issues(json).unwrap();
        assert_eq!(issues[0].labels, vec!["P1"]);
    }
}
