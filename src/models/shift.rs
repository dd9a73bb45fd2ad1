//! Shift-level aggregates.
//!
//! [`ShiftInput`] is everything known about a shift before tipout.
//! [`ShiftOutput`] is what the calculation pipeline produces from it,
//! including the derived [`ShiftConfiguration`] and the settled [`TipPools`].

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{
    BarTeam, BarTeamPayout, Event, EventPayout, Server, ServerPayout, SupportPayout, SupportStaff,
};

/// All input for one shift's tip pool calculation.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::ShiftInput;
///
/// let input: ShiftInput = serde_json::from_str(r#"{
///     "bar_team": { "owed_to": 0.0, "sales": 0.0 },
///     "servers": [{ "name": "Cam", "sales": 1000.0, "owed_to": 0.0 }]
/// }"#).unwrap();
///
/// assert!(input.events.is_empty());
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftInput {
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

impl ShiftInput {
    /// Checks that the shift can be paid out without anomalies.
    ///
    /// Every sales, owed-to and hours figure must be finite and non-negative,
    /// and every event must be split between at least one worker. Hours that
    /// sum to zero are accepted; the pipeline reports those as warnings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field, or
    /// `InvalidEvent` for an event with `split_by == 0`.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("bar_team.owed_to", self.bar_team.owed_to)?;
        check_amount("bar_team.sales", self.bar_team.sales)?;
        for (i, bartender) in self.bar_team.bartenders.iter().enumerate() {
            check_amount(&format!("bar_team.bartenders[{}].hours", i), bartender.hours)?;
        }

        for (i, server) in self.servers.iter().enumerate() {
            check_amount(&format!("servers[{}].sales", i), server.sales)?;
            check_amount(&format!("servers[{}].owed_to", i), server.owed_to)?;
        }

        for (i, event) in self.events.iter().enumerate() {
            check_amount(&format!("events[{}].sales", i), event.sales)?;
            check_amount(&format!("events[{}].owed_to", i), event.owed_to)?;
            if event.split_by == 0 {
                return Err(EngineError::InvalidEvent {
                    event: event.name.clone(),
                    message: "split_by must be at least 1".to_string(),
                });
            }
        }

        for (i, support) in self.support.iter().enumerate() {
            check_amount(&format!("support[{}].hours", i), support.hours)?;
        }

        Ok(())
    }

    /// Returns the combined hours of every support staff member.
    pub fn total_support_hours(&self) -> f64 {
        self.support.iter().map(|s| s.hours).sum()
    }
}

fn check_amount(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}

/// Staffing figures and tipout rates derived from the shift's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftConfiguration {
    /// Number of bartenders.
    pub bar_count: usize,
    /// Number of support staff.
    pub support_count: usize,
    /// Combined bartender hours.
    pub total_bar_hours: f64,
    /// Combined support staff hours.
    pub total_support_hours: f64,
    /// Share of server and event sales tipped to the bar.
    pub bar_tipout_percentage: f64,
    /// Share of bar, server and event sales tipped to support.
    pub support_tipout_percentage: f64,
}

/// Pool totals accumulated from every contributor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TipPools {
    /// Sum of every server's and event's tipout to the bar.
    pub bar_pool: f64,
    /// Sum of every tipout to support.
    pub support_pool: f64,
    /// Portion of the support pool paid by the bar team.
    pub to_support_from_bar: f64,
    /// Portion of the support pool paid by servers.
    pub to_support_from_servers: f64,
    /// Portion of the support pool paid by events.
    pub to_support_from_events: f64,
}

/// The settled shift: every payout plus the figures used to reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftOutput {
    /// Bar team totals and per-bartender payouts.
    pub bar_team: BarTeamPayout,
    /// Server payouts, in input order.
    pub servers: Vec<ServerPayout>,
    /// Event payouts, in input order.
    pub events: Vec<EventPayout>,
    /// Support payouts, in input order.
    pub support: Vec<SupportPayout>,
    /// Counts, hours and rates the payouts were computed with.
    pub configuration: ShiftConfiguration,
    /// Pool totals.
    pub pools: TipPools,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bartender;

    fn create_valid_input() -> ShiftInput {
        ShiftInput {
            bar_team: BarTeam {
                owed_to: 100.0,
                sales: 800.0,
                bartenders: vec![Bartender {
                    name: "Ana".to_string(),
                    hours: 8.0,
                }],
            },
            servers: vec![Server {
                name: "Cam".to_string(),
                sales: 1000.0,
                owed_to: 150.0,
            }],
            events: vec![Event {
                name: "Gala".to_string(),
                sales: 500.0,
                owed_to: 60.0,
                split_by: 3,
            }],
            support: vec![SupportStaff {
                name: "Dee".to_string(),
                hours: 6.0,
            }],
        }
    }

    #[test]
    fn test_deserialize_minimal_shift() {
        let json = r#"{ "bar_team": { "owed_to": 0.0, "sales": 0.0 } }"#;

        let input: ShiftInput = serde_json::from_str(json).unwrap();
        assert!(input.bar_team.bartenders.is_empty());
        assert!(input.servers.is_empty());
        assert!(input.events.is_empty());
        assert!(input.support.is_empty());
    }

    #[test]
    fn test_validate_accepts_well_formed_shift() {
        assert!(create_valid_input().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_hours() {
        let mut input = create_valid_input();
        input.bar_team.bartenders[0].hours = 0.0;
        input.support[0].hours = 0.0;

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_server_sales() {
        let mut input = create_valid_input();
        input.servers[0].sales = -5.0;

        match input.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "servers[0].sales");
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_bartender_hours() {
        let mut input = create_valid_input();
        input.bar_team.bartenders[0].hours = f64::NAN;

        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "bar_team.bartenders[0].hours");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_infinite_support_hours() {
        let mut input = create_valid_input();
        input.support[0].hours = f64::INFINITY;

        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_split_by() {
        let mut input = create_valid_input();
        input.events[0].split_by = 0;

        match input.validate() {
            Err(EngineError::InvalidEvent { event, message }) => {
                assert_eq!(event, "Gala");
                assert!(message.contains("split_by"));
            }
            other => panic!("Expected InvalidEvent, got {:?}", other),
        }
    }

    #[test]
    fn test_total_support_hours() {
        let mut input = create_valid_input();
        input.support.push(SupportStaff {
            name: "Eli".to_string(),
            hours: 4.5,
        });

        assert_eq!(input.total_support_hours(), 10.5);
    }
}
