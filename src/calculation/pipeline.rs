//! The full tip pool pipeline.

use std::time::Instant;

use tracing::debug;

use crate::models::{AuditTrace, ShiftInput, ShiftOutput};

use super::distribution::distribute;
use super::pool_tally::tally_pools;
use super::projection::project;
use super::tipout_rates::derive_configuration;

/// The settled shift together with the audit trace of how it was reached.
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
    /// The settled shift.
    pub output: ShiftOutput,
    /// One audit step per stage, plus any division warnings.
    pub audit_trace: AuditTrace,
}

/// Runs projection, configuration, pool tally and distribution over a shift.
///
/// The input is never modified, so calling this twice on the same input
/// yields the same output.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::compute;
/// use tip_pool_engine::models::{BarTeam, Bartender, Server, ShiftInput};
///
/// let input = ShiftInput {
///     bar_team: BarTeam {
///         owed_to: 0.0,
///         sales: 0.0,
///         bartenders: vec![Bartender { name: "Ana".to_string(), hours: 40.0 }],
///     },
///     servers: vec![Server { name: "Cam".to_string(), sales: 1000.0, owed_to: 0.0 }],
///     ..Default::default()
/// };
///
/// let outcome = compute(&input);
/// assert_eq!(outcome.output.pools.bar_pool, 20.0);
/// assert_eq!(outcome.output.bar_team.bartenders[0].final_payout, 20.0);
/// assert_eq!(outcome.output.servers[0].final_payout, -20.0);
/// assert_eq!(outcome.audit_trace.steps.len(), 4);
/// ```
pub fn compute(input: &ShiftInput) -> CalculationOutcome {
    let start_time = Instant::now();
    let mut step_number: u32 = 1;
    let mut steps = Vec::with_capacity(4);

    let projection = project(input, step_number);
    steps.push(projection.audit_step);
    step_number += 1;

    let configuration = derive_configuration(input, step_number);
    steps.push(configuration.audit_step);
    step_number += 1;
    let configuration = configuration.configuration;
    debug!(
        support_count = configuration.support_count,
        bar_tipout_percentage = configuration.bar_tipout_percentage,
        support_tipout_percentage = configuration.support_tipout_percentage,
        "Derived tipout configuration"
    );

    let tally = tally_pools(projection.projected, &configuration, step_number);
    steps.push(tally.audit_step);
    step_number += 1;
    debug!(
        bar_pool = tally.tallied.pools().bar_pool,
        support_pool = tally.tallied.pools().support_pool,
        "Tallied tip pools"
    );

    let distribution = distribute(tally.tallied, &configuration, step_number);
    steps.push(distribution.audit_step);

    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);
    debug!(
        duration_us,
        warnings = distribution.warnings.len(),
        "Distributed tip pools"
    );

    CalculationOutcome {
        output: distribution.output,
        audit_trace: AuditTrace {
            steps,
            warnings: distribution.warnings,
            duration_us,
        },
    }
}
