//! Support staff models (bussers, runners, barbacks).

use serde::{Deserialize, Serialize};

/// A support staff member working the shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportStaff {
    /// The staff member's name.
    pub name: String,
    /// Hours worked during the shift.
    pub hours: f64,
}

/// A support staff member's share of the support pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportPayout {
    /// The staff member's name.
    pub name: String,
    /// Hours worked during the shift.
    pub hours: f64,
    /// Share of the support pool, `hours / total support hours`.
    pub percentage_of_support_tip_pool: f64,
    /// Share of what the bar team tipped to support.
    pub tipout_from_bar: f64,
    /// Share of what servers tipped to support.
    pub tipout_from_servers: f64,
    /// Share of what events tipped to support.
    pub tipout_from_events: f64,
    /// `support pool * percentage_of_support_tip_pool`.
    pub final_payout: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_support_staff() {
        let json = r#"{ "name": "Dee", "hours": 7.25 }"#;

        let support: SupportStaff = serde_json::from_str(json).unwrap();
        assert_eq!(support.name, "Dee");
        assert_eq!(support.hours, 7.25);
    }

    #[test]
    fn test_default_payout_is_zeroed() {
        let payout = SupportPayout::default();
        assert_eq!(payout.final_payout, 0.0);
        assert_eq!(payout.percentage_of_support_tip_pool, 0.0);
    }
}
