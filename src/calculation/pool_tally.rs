//! Pool tally.
//!
//! This is the third pipeline stage. Servers and events tip out to the bar
//! pool; when anyone works support, the bar team, servers and events also
//! tip out to the support pool. Contributions are summed in input order.

use tracing::debug;

use crate::models::{AuditStep, ShiftConfiguration, TipPools};

use super::projection::Projected;

/// Payout records with every tipout recorded and the pools summed.
///
/// Only [`tally_pools`] can construct this value, and only the distribution
/// stage consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tallied {
    pub(super) records: Projected,
    pub(super) pools: TipPools,
}

impl Tallied {
    /// The payout records with tipouts filled in.
    pub fn records(&self) -> &Projected {
        &self.records
    }

    /// The pool totals.
    pub fn pools(&self) -> &TipPools {
        &self.pools
    }
}

/// The result of tallying a shift's pools, including the audit step.
#[derive(Debug, Clone)]
pub struct TallyResult {
    /// The tallied records and pools.
    pub tallied: Tallied,
    /// The audit step recording this tally.
    pub audit_step: AuditStep,
}

/// Computes every tipout and accumulates the bar and support pools.
///
/// Bar pool: each server's and event's `sales * bar_tipout_percentage`.
/// The bar itself does not pay into the bar pool.
///
/// Support pool: the bar team's, each server's and each event's
/// `sales * support_tipout_percentage`. Skipped entirely when there are no
/// support records, leaving every `tipout_to_support` at zero.
///
/// # Arguments
///
/// * `projected` - Records from the projection stage
/// * `configuration` - Derived tipout percentages
/// * `step_number` - The step number for audit trail sequencing
pub fn tally_pools(
    projected: Projected,
    configuration: &ShiftConfiguration,
    step_number: u32,
) -> TallyResult {
    let Projected {
        mut bar_team,
        mut servers,
        mut events,
        support,
    } = projected;
    let mut pools = TipPools::default();
    let bar_rate = configuration.bar_tipout_percentage;
    let support_rate = configuration.support_tipout_percentage;

    for server in &mut servers {
        server.tipout_to_bar = server.sales * bar_rate;
        pools.bar_pool += server.tipout_to_bar;
        bar_team.tipout_from_servers += server.tipout_to_bar;
    }

    for event in &mut events {
        event.tipout_to_bar = event.sales * bar_rate;
        pools.bar_pool += event.tipout_to_bar;
        bar_team.tipout_from_events += event.tipout_to_bar;
    }

    bar_team.total_tipout_received = bar_team.tipout_from_servers + bar_team.tipout_from_events;

    let support_pool_open = !support.is_empty();
    if support_pool_open {
        bar_team.tipout_to_support = bar_team.sales * support_rate;
        pools.support_pool += bar_team.tipout_to_support;
        pools.to_support_from_bar += bar_team.tipout_to_support;
        bar_team.total_amount_tipped_out = bar_team.tipout_to_support;

        for server in &mut servers {
            server.tipout_to_support = server.sales * support_rate;
            pools.support_pool += server.tipout_to_support;
            pools.to_support_from_servers += server.tipout_to_support;
        }

        for event in &mut events {
            event.tipout_to_support = event.sales * support_rate;
            pools.support_pool += event.tipout_to_support;
            pools.to_support_from_events += event.tipout_to_support;
        }
    } else {
        debug!("No support staff on shift, skipping support pool");
    }

    let reasoning = if support_pool_open {
        format!(
            "Bar pool ${} from {} server(s) and {} event(s) at {}%; support pool ${} at {}%",
            pools.bar_pool,
            servers.len(),
            events.len(),
            bar_rate * 100.0,
            pools.support_pool,
            support_rate * 100.0
        )
    } else {
        format!(
            "Bar pool ${} from {} server(s) and {} event(s) at {}%; no support staff, support pool not collected",
            pools.bar_pool,
            servers.len(),
            events.len(),
            bar_rate * 100.0
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pool_tally".to_string(),
        rule_name: "Pool Tally".to_string(),
        input: serde_json::json!({
            "bar_tipout_percentage": bar_rate,
            "support_tipout_percentage": support_rate,
            "servers": servers.len(),
            "events": events.len(),
            "support_pool_open": support_pool_open
        }),
        output: serde_json::json!({
            "bar_pool": pools.bar_pool,
            "support_pool": pools.support_pool,
            "to_support_from_bar": pools.to_support_from_bar,
            "to_support_from_servers": pools.to_support_from_servers,
            "to_support_from_events": pools.to_support_from_events
        }),
        reasoning,
    };

    TallyResult {
        tallied: Tallied {
            records: Projected {
                bar_team,
                servers,
                events,
                support,
            },
            pools,
        },
        audit_step,
    }
}
