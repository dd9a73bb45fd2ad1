//! Request types for the tip pool API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{BarTeam, Event, Server, ShiftInput, SupportStaff};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything known about one shift before tipout. Only `bar_team`
/// is required; omitted staff lists are treated as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The bar team and its bartenders.
    pub bar_team: BarTeam,
    /// Servers on the floor.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Events booked during the shift.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Support staff.
    #[serde(default)]
    pub support: Vec<SupportStaff>,
}

impl From<CalculationRequest> for ShiftInput {
    fn from(req: CalculationRequest) -> Self {
        ShiftInput {
            bar_team: req.bar_team,
            servers: req.servers,
            events: req.events,
            support: req.support,
        }
    }
}
