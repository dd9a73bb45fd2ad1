//! Calculation result models for the tip pool engine.
//!
//! This module contains the [`CalculationResult`] envelope returned to API
//! callers and the audit types every pipeline stage reports into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShiftOutput;

/// A single step in the audit trace recording a calculation stage.
///
/// Each step captures the input, output, and reasoning for the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the stage that produced this step.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag results that were computed but are not usable as money,
/// such as a share taken of zero total hours.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::AuditWarning;
///
/// let warning = AuditWarning::zero_split_by("Gala");
/// assert_eq!(warning.code, "ZERO_SPLIT_BY");
/// assert!(warning.message.contains("Gala"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Bartender shares were taken of zero total bar hours.
    pub fn zero_bar_hours(bar_count: usize) -> Self {
        Self {
            code: "ZERO_BAR_HOURS".to_string(),
            message: format!(
                "{} bartender(s) recorded zero total hours; bartender shares are not a number",
                bar_count
            ),
            severity: "high".to_string(),
        }
    }

    /// Support shares were taken of zero total support hours.
    pub fn zero_support_hours(support_count: usize) -> Self {
        Self {
            code: "ZERO_SUPPORT_HOURS".to_string(),
            message: format!(
                "{} support staff recorded zero total hours; support shares are not a number",
                support_count
            ),
            severity: "high".to_string(),
        }
    }

    /// An event payout was divided between zero workers.
    pub fn zero_split_by(event_name: &str) -> Self {
        Self {
            code: "ZERO_SPLIT_BY".to_string(),
            message: format!(
                "Event '{}' is split between zero workers; per-worker payout is not finite",
                event_name
            ),
            severity: "high".to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(!trace.has_warnings());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if any stage raised a warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The complete result of a tip pool calculation, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The settled shift.
    pub shift: ShiftOutput,
    /// Complete audit trace of the calculation stages.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_audit_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "pool_tally".to_string(),
            rule_name: "Pool Tally".to_string(),
            input: serde_json::json!({ "servers": 1 }),
            output: serde_json::json!({ "bar_pool": 20.0 }),
            reasoning: "Bar pool $20".to_string(),
        }
    }

    #[test]
    fn test_zero_bar_hours_warning() {
        let warning = AuditWarning::zero_bar_hours(2);
        assert_eq!(warning.code, "ZERO_BAR_HOURS");
        assert_eq!(warning.severity, "high");
        assert!(warning.message.contains("2 bartender"));
    }

    #[test]
    fn test_zero_support_hours_warning() {
        let warning = AuditWarning::zero_support_hours(3);
        assert_eq!(warning.code, "ZERO_SUPPORT_HOURS");
        assert!(warning.message.contains("3 support"));
    }

    #[test]
    fn test_audit_trace_has_warnings() {
        let mut trace = AuditTrace {
            steps: vec![create_sample_audit_step()],
            warnings: vec![],
            duration_us: 5,
        };
        assert!(!trace.has_warnings());

        trace.warnings.push(AuditWarning::zero_split_by("Gala"));
        assert!(trace.has_warnings());
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            shift: ShiftOutput::default(),
            audit_trace: AuditTrace {
                steps: vec![create_sample_audit_step()],
                warnings: vec![],
                duration_us: 5,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["engine_version"], "0.1.0");
        assert_eq!(json["shift"]["pools"]["bar_pool"], 0.0);
        assert_eq!(json["audit_trace"]["steps"][0]["rule_id"], "pool_tally");
    }
}
