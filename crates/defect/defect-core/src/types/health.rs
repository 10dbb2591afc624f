//! Health classification output.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

/// Traffic-light status of one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rolling-window rule that fired for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemFlag {
    /// Inflow exceeded outflow for the configured number of consecutive weeks.
    #[serde(rename = "inflow>outflow")]
    InflowExceedsOutflow,
    /// Backlog above the healthy maximum.
    #[serde(rename = "backlog_high")]
    BacklogHigh,
    /// Severe inflow over the window reached the configured minimum.
    #[serde(rename = "severe_spike")]
    SevereSpike,
}

impl ProblemFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InflowExceedsOutflow => "inflow>outflow",
            Self::BacklogHigh => "backlog_high",
            Self::SevereSpike => "severe_spike",
        }
    }
}

impl fmt::Display for ProblemFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised flags in evaluation order. Serializes as the comma-joined names,
/// empty string when nothing fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemFlags(SmallVec<[ProblemFlag; 3]>);

impl ProblemFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flag: ProblemFlag) {
        if !self.contains(flag) {
            self.0.push(flag);
        }
    }

    pub fn contains(&self, flag: ProblemFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProblemFlag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProblemFlag> for ProblemFlags {
    fn from_iter<I: IntoIterator<Item = ProblemFlag>>(iter: I) -> Self {
        let mut flags = Self::new();
        for flag in iter {
            flags.push(flag);
        }
        flags
    }
}

impl fmt::Display for ProblemFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(flag.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for ProblemFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Health verdict for one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIndicatorRecord {
    pub week_start: NaiveDate,
    pub problem_flags: ProblemFlags,
    pub health_status: HealthStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_join_in_evaluation_order() {
        let flags: ProblemFlags = [ProblemFlag::InflowExceedsOutflow, ProblemFlag::SevereSpike]
            .into_iter()
            .collect();
        assert_eq!(flags.to_string(), "inflow>outflow,severe_spike");
    }

    #[test]
    fn test_empty_flags_render_empty_string() {
        assert_eq!(ProblemFlags::new().to_string(), "");
        assert_eq!(serde_json::to_string(&ProblemFlags::new()).unwrap(), "\"\"");
    }

    #[test]
    fn test_duplicate_flag_ignored() {
        let mut flags = ProblemFlags::new();
        flags.push(ProblemFlag::BacklogHigh);
        flags.push(ProblemFlag::BacklogHigh);
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&HealthStatus::Red).unwrap(), "\"red\"");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_flag() -> impl Strategy<Value = ProblemFlag> {
            prop_oneof![
                Just(ProblemFlag::InflowExceedsOutflow),
                Just(ProblemFlag::BacklogHigh),
                Just(ProblemFlag::SevereSpike),
            ]
        }

        proptest! {
            #[test]
            fn prop_flags_keep_first_occurrence_order(
                pushed in proptest::collection::vec(any_flag(), 0..12)
            ) {
                let flags: ProblemFlags = pushed.iter().copied().collect();

                let mut expected: Vec<ProblemFlag> = Vec::new();
                for flag in &pushed {
                    if !expected.contains(flag) {
                        expected.push(*flag);
                    }
                }
                prop_assert_eq!(flags.iter().collect::<Vec<_>>(), expected);
                prop_assert!(flags.len() <= 3);
            }
        }
    }
}
