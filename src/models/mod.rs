//! Core data models for the tip pool engine.
//!
//! This module contains the input records submitted for a shift, the payout
//! records the calculation produces, and the audit types that accompany them.

mod bar_team;
mod calculation_result;
mod event;
mod server;
mod shift;
mod support;

pub use bar_team::{BarTeam, BarTeamPayout, Bartender, BartenderPayout};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use event::{Event, EventPayout};
pub use server::{Server, ServerPayout};
pub use shift::{ShiftConfiguration, ShiftInput, ShiftOutput, TipPools};
pub use support::{SupportPayout, SupportStaff};
