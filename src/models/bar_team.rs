//! Bar team models.
//!
//! The bar team is a single group that receives the bar pool and pays into
//! the support pool. Its members split the group's figures by hours worked.

use serde::{Deserialize, Serialize};

/// A bartender working the shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bartender {
    /// The bartender's name.
    pub name: String,
    /// Hours worked during the shift.
    pub hours: f64,
}

/// The bar team as submitted for a shift.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::{BarTeam, Bartender};
///
/// let bar_team = BarTeam {
///     owed_to: 350.0,
///     sales: 4200.0,
///     bartenders: vec![Bartender { name: "Ana".to_string(), hours: 8.0 }],
/// };
/// assert_eq!(bar_team.bartenders.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarTeam {
    /// Tips owed to the bar team before any tipout.
    pub owed_to: f64,
    /// Bar sales for the shift.
    pub sales: f64,
    /// Members of the bar team.
    #[serde(default)]
    pub bartenders: Vec<Bartender>,
}

/// One bartender's slice of the bar team's figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BartenderPayout {
    /// The bartender's name.
    pub name: String,
    /// Hours worked during the shift.
    pub hours: f64,
    /// Share of the bar pool, `hours / total bar hours`.
    pub percentage_of_bar_tip_pool: f64,
    /// Share of the bar team's pre-tipout tips.
    pub owed_to_pre_tipout: f64,
    /// Share of the bar team's tipout to support.
    pub tipout_to_support: f64,
    /// Everything this bartender tipped out.
    pub total_amount_tipped_out: f64,
    /// Share of what servers tipped to the bar.
    pub tipout_from_servers: f64,
    /// Share of what events tipped to the bar.
    pub tipout_from_events: f64,
    /// `tipout_from_servers + tipout_from_events`.
    pub total_tipout_received: f64,
    /// What the bartender takes home.
    pub final_payout: f64,
}

/// The bar team's figures after the tip pools are settled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarTeamPayout {
    /// Tips owed to the bar team before any tipout.
    pub owed_to_pre_tipout: f64,
    /// Bar sales for the shift.
    pub sales: f64,
    /// Tipout received from all servers.
    pub tipout_from_servers: f64,
    /// Tipout received from all events.
    pub tipout_from_events: f64,
    /// `tipout_from_servers + tipout_from_events`.
    pub total_tipout_received: f64,
    /// Tipout paid into the support pool.
    pub tipout_to_support: f64,
    /// Everything the bar team tipped out. Only support tipout today.
    pub total_amount_tipped_out: f64,
    /// `owed_to_pre_tipout - total_amount_tipped_out + bar pool`.
    pub final_payout: f64,
    /// Per-bartender breakdown, in input order.
    pub bartenders: Vec<BartenderPayout>,
}

impl BarTeam {
    /// Returns the combined hours of every bartender.
    pub fn total_hours(&self) -> f64 {
        self.bartenders.iter().map(|b| b.hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bar_team_without_bartenders() {
        let json = r#"{ "owed_to": 120.5, "sales": 900.0 }"#;

        let bar_team: BarTeam = serde_json::from_str(json).unwrap();
        assert_eq!(bar_team.owed_to, 120.5);
        assert_eq!(bar_team.sales, 900.0);
        assert!(bar_team.bartenders.is_empty());
    }

    #[test]
    fn test_deserialize_bar_team_with_bartenders() {
        let json = r#"{
            "owed_to": 300.0,
            "sales": 2500.0,
            "bartenders": [
                { "name": "Ana", "hours": 6.5 },
                { "name": "Ben", "hours": 4.0 }
            ]
        }"#;

        let bar_team: BarTeam = serde_json::from_str(json).unwrap();
        assert_eq!(bar_team.bartenders.len(), 2);
        assert_eq!(bar_team.bartenders[0].name, "Ana");
        assert_eq!(bar_team.bartenders[1].hours, 4.0);
    }

    #[test]
    fn test_total_hours_sums_bartenders() {
        let bar_team = BarTeam {
            owed_to: 0.0,
            sales: 0.0,
            bartenders: vec![
                Bartender {
                    name: "Ana".to_string(),
                    hours: 6.5,
                },
                Bartender {
                    name: "Ben".to_string(),
                    hours: 3.5,
                },
            ],
        };

        assert_eq!(bar_team.total_hours(), 10.0);
    }

    #[test]
    fn test_total_hours_empty_team_is_zero() {
        assert_eq!(BarTeam::default().total_hours(), 0.0);
    }

    #[test]
    fn test_payout_serializes_snake_case_fields() {
        let payout = BartenderPayout {
            name: "Ana".to_string(),
            hours: 8.0,
            percentage_of_bar_tip_pool: 1.0,
            ..Default::default()
        };

        let json = serde_json::to_value(&payout).unwrap();
        assert_eq!(json["percentage_of_bar_tip_pool"], 1.0);
        assert_eq!(json["total_tipout_received"], 0.0);
    }
}
