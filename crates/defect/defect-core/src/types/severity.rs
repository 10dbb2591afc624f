//! Severity tiers and per-severity tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Defect severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All tiers, most severe first. This is also the output column order.
    pub const ALL: [Severity; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Critical and high count towards the severe inflow.
    pub fn is_severe(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per severity tier.
///
/// Every key is required when deserializing, so a configuration that omits a
/// tier fails at load time instead of deep inside a computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeverityTable<T> {
    pub critical: T,
    pub high: T,
    pub medium: T,
    pub low: T,
}

impl<T> SeverityTable<T> {
    pub fn new(critical: T, high: T, medium: T, low: T) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    /// Build a table by evaluating `f` once per tier.
    pub fn from_fn(mut f: impl FnMut(Severity) -> T) -> Self {
        Self {
            critical: f(Severity::Critical),
            high: f(Severity::High),
            medium: f(Severity::Medium),
            low: f(Severity::Low),
        }
    }

    pub fn get(&self, severity: Severity) -> &T {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }

    pub fn get_mut(&mut self, severity: Severity) -> &mut T {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }

    /// Iterate `(severity, value)` pairs in [`Severity::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &T)> + '_ {
        Severity::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Severity, &T) -> U) -> SeverityTable<U> {
        SeverityTable {
            critical: f(Severity::Critical, &self.critical),
            high: f(Severity::High, &self.high),
            medium: f(Severity::Medium, &self.medium),
            low: f(Severity::Low, &self.low),
        }
    }
}

impl SeverityTable<f64> {
    /// Dot product with a table of counts.
    pub fn weighted_sum(&self, counts: &SeverityTable<f64>) -> f64 {
        self.iter().map(|(s, w)| w * counts.get(s)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_only_critical_and_high_are_severe() {
        let severe: Vec<_> = Severity::ALL.into_iter().filter(Severity::is_severe).collect();
        assert_eq!(severe, vec![Severity::Critical, Severity::High]);
    }

    #[test]
    fn test_table_iterates_most_severe_first() {
        let table = SeverityTable::new(1, 2, 3, 4);
        let order: Vec<_> = table.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(
            order,
            vec![
                (Severity::Critical, 1),
                (Severity::High, 2),
                (Severity::Medium, 3),
                (Severity::Low, 4),
            ]
        );
    }

    #[test]
    fn test_table_missing_key_is_rejected() {
        let err = serde_json::from_str::<SeverityTable<f64>>(r#"{"critical":1,"high":2,"medium":3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("low"));
    }

    #[test]
    fn test_weighted_sum() {
        let weights = SeverityTable::new(10.0, 5.0, 2.0, 1.0);
        let counts = SeverityTable::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(weights.weighted_sum(&counts), 10.0 + 10.0 + 6.0 + 4.0);
    }
}
