//! Tipout rate tables and shift configuration derivation.
//!
//! This is the second pipeline stage. Both tipout percentages depend only on
//! how many support staff worked the shift.

use crate::models::{AuditStep, ShiftConfiguration, ShiftInput};

/// Bar tipout percentage while support staffing is below the threshold.
pub const STANDARD_BAR_TIPOUT_PERCENTAGE: f64 = 0.02;

/// Bar tipout percentage once support staffing reaches the threshold.
pub const REDUCED_BAR_TIPOUT_PERCENTAGE: f64 = 0.015;

/// Support headcount at which the reduced bar tipout applies.
pub const REDUCED_BAR_TIPOUT_SUPPORT_COUNT: usize = 3;

/// Support tipout percentage added per support staff member, up to the cap.
pub const SUPPORT_TIPOUT_PERCENTAGE_PER_HEAD: f64 = 0.01;

/// Support tipout percentage for four or more support staff.
pub const MAX_SUPPORT_TIPOUT_PERCENTAGE: f64 = 0.03;

/// Returns the share of server and event sales tipped to the bar.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::bar_tipout_percentage;
///
/// assert_eq!(bar_tipout_percentage(2), 0.02);
/// assert_eq!(bar_tipout_percentage(3), 0.015);
/// ```
pub fn bar_tipout_percentage(support_count: usize) -> f64 {
    if support_count >= REDUCED_BAR_TIPOUT_SUPPORT_COUNT {
        REDUCED_BAR_TIPOUT_PERCENTAGE
    } else {
        STANDARD_BAR_TIPOUT_PERCENTAGE
    }
}

/// Returns the share of sales tipped to support.
///
/// One percent per support staff member, capped at three percent. No support
/// staff means no support tipout.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::support_tipout_percentage;
///
/// assert_eq!(support_tipout_percentage(0), 0.0);
/// assert_eq!(support_tipout_percentage(2), 0.02);
/// assert_eq!(support_tipout_percentage(7), 0.03);
/// ```
pub fn support_tipout_percentage(support_count: usize) -> f64 {
    match support_count {
        0 => 0.0,
        1..=3 => support_count as f64 * SUPPORT_TIPOUT_PERCENTAGE_PER_HEAD,
        _ => MAX_SUPPORT_TIPOUT_PERCENTAGE,
    }
}

/// The result of deriving a shift's configuration, including the audit step.
#[derive(Debug, Clone)]
pub struct ConfigurationResult {
    /// Counts, total hours and tipout percentages.
    pub configuration: ShiftConfiguration,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives staffing counts, total hours and tipout percentages for a shift.
///
/// # Arguments
///
/// * `input` - The shift being calculated
/// * `step_number` - The step number for audit trail sequencing
pub fn derive_configuration(input: &ShiftInput, step_number: u32) -> ConfigurationResult {
    let bar_count = input.bar_team.bartenders.len();
    let support_count = input.support.len();

    let configuration = ShiftConfiguration {
        bar_count,
        support_count,
        total_bar_hours: input.bar_team.total_hours(),
        total_support_hours: input.total_support_hours(),
        bar_tipout_percentage: bar_tipout_percentage(support_count),
        support_tipout_percentage: support_tipout_percentage(support_count),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tipout_configuration".to_string(),
        rule_name: "Tipout Configuration".to_string(),
        input: serde_json::json!({
            "bar_count": bar_count,
            "support_count": support_count
        }),
        output: serde_json::json!({
            "total_bar_hours": configuration.total_bar_hours,
            "total_support_hours": configuration.total_support_hours,
            "bar_tipout_percentage": configuration.bar_tipout_percentage,
            "support_tipout_percentage": configuration.support_tipout_percentage
        }),
        reasoning: format!(
            "{} support staff: bar tipout {}%, support tipout {}%",
            support_count,
            configuration.bar_tipout_percentage * 100.0,
            configuration.support_tipout_percentage * 100.0
        ),
    };

    ConfigurationResult {
        configuration,
        audit_step,
    }
}
