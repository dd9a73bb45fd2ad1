//! Event models.
//!
//! An event (private party, banquet) tips out like a server, but its payout
//! is shared by a crew of `split_by` workers.

use serde::{Deserialize, Serialize};

/// A private event booked during the shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The event's name.
    pub name: String,
    /// Sales attributed to the event.
    pub sales: f64,
    /// Tips owed to the event crew before tipout.
    pub owed_to: f64,
    /// Number of workers sharing the event payout.
    pub split_by: u32,
}

/// An event's figures after tipping out, with the per-worker split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayout {
    /// The event's name.
    pub name: String,
    /// Sales attributed to the event.
    pub sales: f64,
    /// Tips owed to the event crew before tipout.
    pub owed_to_pre_tipout: f64,
    /// Number of workers sharing the event payout.
    pub split_by: u32,
    /// `sales * bar tipout percentage`.
    pub tipout_to_bar: f64,
    /// `sales * support tipout percentage`, zero when nobody works support.
    pub tipout_to_support: f64,
    /// `tipout_to_bar + tipout_to_support`.
    pub total_amount_tipped_out: f64,
    /// `owed_to_pre_tipout - total_amount_tipped_out`.
    pub final_payout: f64,
    /// `final_payout / split_by`.
    pub final_payout_per_worker: f64,
}
