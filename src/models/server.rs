//! Server models.

use serde::{Deserialize, Serialize};

/// A server working the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// The server's name.
    pub name: String,
    /// Sales rung in by the server.
    pub sales: f64,
    /// Tips owed to the server before tipout.
    pub owed_to: f64,
}

/// A server's figures after tipping out to the bar and support pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerPayout {
    /// The server's name.
    pub name: String,
    /// Sales rung in by the server.
    pub sales: f64,
    /// Tips owed to the server before tipout.
    pub owed_to_pre_tipout: f64,
    /// `sales * bar tipout percentage`.
    pub tipout_to_bar: f64,
    /// `sales * support tipout percentage`, zero when nobody works support.
    pub tipout_to_support: f64,
    /// `tipout_to_bar + tipout_to_support`.
    pub total_amount_tipped_out: f64,
    /// `owed_to_pre_tipout - total_amount_tipped_out`.
    pub final_payout: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server() {
        let json = r#"{ "name": "Cam", "sales": 1250.75, "owed_to": 210.0 }"#;

        let server: Server = serde_json::from_str(json).unwrap();
        assert_eq!(server.name, "Cam");
        assert_eq!(server.sales, 1250.75);
        assert_eq!(server.owed_to, 210.0);
    }

    #[test]
    fn test_deserialize_server_missing_sales_fails() {
        let json = r#"{ "name": "Cam", "owed_to": 210.0 }"#;

        let result: Result<Server, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }

    #[test]
    fn test_nan_payout_serializes_as_null() {
        let payout = ServerPayout {
            name: "Cam".to_string(),
            final_payout: f64::NAN,
            ..Default::default()
        };

        let json = serde_json::to_value(&payout).unwrap();
        assert!(json["final_payout"].is_null());
    }
}
