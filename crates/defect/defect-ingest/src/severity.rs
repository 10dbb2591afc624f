//! Free-text label to severity classification.

use defect_core::Severity;

/// Classify an issue's labels into exactly one severity tier.
///
/// Labels are lower-cased and joined. `bugzilla/` prefixes are dropped and the
/// `severity-x`, `severity: x`, `severity:x` spellings are treated alike.
/// Explicit severities and `p0`..`p3` priorities win, then bare tier words;
/// anything unclassifiable is `medium`.
/// The space after `severity:` is optional, unlike tools that only match
/// `severity: x`.
pub fn classify_severity<S: AsRef<str>>(labels: &[S]) -> Severity {
    let text = labels
        .iter()
        .map(|l| l.as_ref().trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
        .replace("bugzilla/", "")
        .replace("severity-", "severity:")
        .replace("severity: ", "severity:");

    const EXPLICIT: [(&str, &str, Severity); 4] = [
        ("severity:critical", "p0", Severity::Critical),
        ("severity:high", "p1", Severity::High),
        ("severity:low", "p3", Severity::Low),
        ("severity:medium", "p2", Severity::Medium),
    ];
    for (tag, priority, severity) in EXPLICIT {
        if text.contains(tag) || text.contains(priority) {
            return severity;
        }
    }

    for (word, severity) in [
        ("critical", Severity::Critical),
        ("high", Severity::High),
        ("low", Severity::Low),
    ] {
        if text.contains(word) {
            return severity;
        }
    }

    Severity::Medium
}
