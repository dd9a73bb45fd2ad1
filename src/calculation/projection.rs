//! Projection of shift input into payout records.
//!
//! This is the first pipeline stage. It allocates one payout record per input
//! record and copies identity fields across; every computed field starts at zero.

use crate::models::{
    AuditStep, BarTeamPayout, BartenderPayout, EventPayout, ServerPayout, ShiftInput,
    SupportPayout,
};

/// Payout records freshly projected from a [`ShiftInput`].
///
/// Only [`project`] can construct this value, and only the pool tally stage
/// consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Projected {
    pub(super) bar_team: BarTeamPayout,
    pub(super) servers: Vec<ServerPayout>,
    pub(super) events: Vec<EventPayout>,
    pub(super) support: Vec<SupportPayout>,
}

impl Projected {
    /// The projected bar team record.
    pub fn bar_team(&self) -> &BarTeamPayout {
        &self.bar_team
    }

    /// The projected server records.
    pub fn servers(&self) -> &[ServerPayout] {
        &self.servers
    }

    /// The projected event records.
    pub fn events(&self) -> &[EventPayout] {
        &self.events
    }

    /// The projected support records.
    pub fn support(&self) -> &[SupportPayout] {
        &self.support
    }
}

/// The result of projecting a shift, including the audit step.
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    /// The projected payout records.
    pub projected: Projected,
    /// The audit step recording this projection.
    pub audit_step: AuditStep,
}

/// Copies a shift's identity fields into zeroed payout records.
///
/// Each output collection has the same length and order as its input
/// collection. An empty input collection yields an empty output collection.
/// The bar team's and each server's and event's `owed_to` becomes
/// `owed_to_pre_tipout`.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::project;
/// use tip_pool_engine::models::{Server, ShiftInput};
///
/// let input = ShiftInput {
///     servers: vec![Server { name: "Cam".to_string(), sales: 1000.0, owed_to: 80.0 }],
///     ..Default::default()
/// };
///
/// let result = project(&input, 1);
/// let server = &result.projected.servers()[0];
/// assert_eq!(server.owed_to_pre_tipout, 80.0);
/// assert_eq!(server.tipout_to_bar, 0.0);
/// ```
pub fn project(input: &ShiftInput, step_number: u32) -> ProjectionResult {
    let bar_team = BarTeamPayout {
        owed_to_pre_tipout: input.bar_team.owed_to,
        sales: input.bar_team.sales,
        bartenders: input
            .bar_team
            .bartenders
            .iter()
            .map(|bartender| BartenderPayout {
                name: bartender.name.clone(),
                hours: bartender.hours,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let servers: Vec<ServerPayout> = input
        .servers
        .iter()
        .map(|server| ServerPayout {
            name: server.name.clone(),
            sales: server.sales,
            owed_to_pre_tipout: server.owed_to,
            ..Default::default()
        })
        .collect();

    let events: Vec<EventPayout> = input
        .events
        .iter()
        .map(|event| EventPayout {
            name: event.name.clone(),
            sales: event.sales,
            owed_to_pre_tipout: event.owed_to,
            split_by: event.split_by,
            ..Default::default()
        })
        .collect();

    let support: Vec<SupportPayout> = input
        .support
        .iter()
        .map(|support| SupportPayout {
            name: support.name.clone(),
            hours: support.hours,
            ..Default::default()
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "projection".to_string(),
        rule_name: "Projection".to_string(),
        input: serde_json::json!({
            "bartenders": input.bar_team.bartenders.len(),
            "servers": input.servers.len(),
            "events": input.events.len(),
            "support": input.support.len()
        }),
        output: serde_json::json!({
            "bartender_payouts": bar_team.bartenders.len(),
            "server_payouts": servers.len(),
            "event_payouts": events.len(),
            "support_payouts": support.len()
        }),
        reasoning: format!(
            "Projected {} bartender(s), {} server(s), {} event(s) and {} support staff into payout records",
            bar_team.bartenders.len(),
            servers.len(),
            events.len(),
            support.len()
        ),
    };

    ProjectionResult {
        projected: Projected {
            bar_team,
            servers,
            events,
            support,
        },
        audit_step,
    }
}
