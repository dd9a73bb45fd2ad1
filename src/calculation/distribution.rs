//! Distribution of the tallied pools into final payouts.
//!
//! This is the last pipeline stage. Bartenders split the bar team's figures,
//! and support staff split the support pool, in proportion to hours worked.
//! Servers and events keep what they are owed less what they tipped out.
//!
//! Shares are plain `f64` division. Zero total hours or a zero `split_by`
//! produce NaN or infinite payouts; each case is reported as an
//! [`AuditWarning`] rather than replaced with a made-up figure.

use tracing::warn;

use crate::models::{AuditStep, AuditWarning, ShiftConfiguration, ShiftOutput};

use super::pool_tally::Tallied;
use super::projection::Projected;

/// The result of distributing a shift's pools.
#[derive(Debug, Clone)]
pub struct DistributionResult {
    /// The settled shift.
    pub output: ShiftOutput,
    /// Division anomalies encountered while distributing.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this distribution.
    pub audit_step: AuditStep,
}

/// Computes final payouts for every group and member of the shift.
///
/// # Arguments
///
/// * `tallied` - Records and pools from the tally stage
/// * `configuration` - Derived counts, hours and percentages
/// * `step_number` - The step number for audit trail sequencing
pub fn distribute(
    tallied: Tallied,
    configuration: &ShiftConfiguration,
    step_number: u32,
) -> DistributionResult {
    let Tallied {
        records:
            Projected {
                mut bar_team,
                mut servers,
                mut events,
                mut support,
            },
        pools,
    } = tallied;
    let mut warnings = Vec::new();

    bar_team.final_payout =
        bar_team.owed_to_pre_tipout - bar_team.total_amount_tipped_out + pools.bar_pool;

    if !bar_team.bartenders.is_empty() && configuration.total_bar_hours == 0.0 {
        warn!(
            bar_count = bar_team.bartenders.len(),
            "Bartender shares taken of zero total bar hours"
        );
        warnings.push(AuditWarning::zero_bar_hours(bar_team.bartenders.len()));
    }

    for bartender in &mut bar_team.bartenders {
        let share = bartender.hours / configuration.total_bar_hours;
        bartender.percentage_of_bar_tip_pool = share;
        bartender.owed_to_pre_tipout = bar_team.owed_to_pre_tipout * share;
        bartender.tipout_to_support = bar_team.tipout_to_support * share;
        bartender.total_amount_tipped_out = bartender.tipout_to_support;
        bartender.tipout_from_servers = bar_team.tipout_from_servers * share;
        bartender.tipout_from_events = bar_team.tipout_from_events * share;
        bartender.total_tipout_received =
            bartender.tipout_from_servers + bartender.tipout_from_events;
        bartender.final_payout = bartender.owed_to_pre_tipout - bartender.total_amount_tipped_out
            + (pools.bar_pool * share);
    }

    for server in &mut servers {
        server.total_amount_tipped_out = server.tipout_to_bar + server.tipout_to_support;
        server.final_payout = server.owed_to_pre_tipout - server.total_amount_tipped_out;
    }

    for event in &mut events {
        event.total_amount_tipped_out = event.tipout_to_bar + event.tipout_to_support;
        event.final_payout = event.owed_to_pre_tipout - event.total_amount_tipped_out;
        if event.split_by == 0 {
            warn!(event = %event.name, "Event payout split between zero workers");
            warnings.push(AuditWarning::zero_split_by(&event.name));
        }
        event.final_payout_per_worker = event.final_payout / f64::from(event.split_by);
    }

    if !support.is_empty() && configuration.total_support_hours == 0.0 {
        warn!(
            support_count = support.len(),
            "Support shares taken of zero total support hours"
        );
        warnings.push(AuditWarning::zero_support_hours(support.len()));
    }

    for member in &mut support {
        let share = member.hours / configuration.total_support_hours;
        member.percentage_of_support_tip_pool = share;
        member.tipout_from_bar = pools.to_support_from_bar * share;
        member.tipout_from_servers = pools.to_support_from_servers * share;
        member.tipout_from_events = pools.to_support_from_events * share;
        member.final_payout = pools.support_pool * share;
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "distribution".to_string(),
        rule_name: "Distribution".to_string(),
        input: serde_json::json!({
            "bar_pool": pools.bar_pool,
            "support_pool": pools.support_pool,
            "total_bar_hours": configuration.total_bar_hours,
            "total_support_hours": configuration.total_support_hours
        }),
        output: serde_json::json!({
            "bar_team_final_payout": bar_team.final_payout,
            "bartenders_paid": bar_team.bartenders.len(),
            "servers_paid": servers.len(),
            "events_paid": events.len(),
            "support_paid": support.len(),
            "warnings": warnings.len()
        }),
        reasoning: format!(
            "Bar pool ${} split across {} bartender(s) over {} hours; support pool ${} split across {} support staff over {} hours",
            pools.bar_pool,
            bar_team.bartenders.len(),
            configuration.total_bar_hours,
            pools.support_pool,
            support.len(),
            configuration.total_support_hours
        ),
    };

    DistributionResult {
        output: ShiftOutput {
            bar_team,
            servers,
            events,
            support,
            configuration: *configuration,
            pools,
        },
        warnings,
        audit_step,
    }
}
