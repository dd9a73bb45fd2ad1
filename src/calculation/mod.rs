//! Calculation logic for the tip pool engine.
//!
//! The pipeline runs four stages in a fixed order: projection of input
//! records, derivation of tipout rates, tally of the bar and support pools,
//! and distribution of those pools into final payouts. Each stage consumes
//! the previous stage's result, so the order cannot be rearranged.

mod distribution;
mod pipeline;
mod pool_tally;
mod projection;
mod tipout_rates;

pub use distribution::{DistributionResult, distribute};
pub use pipeline::{CalculationOutcome, compute};
pub use pool_tally::{TallyResult, Tallied, tally_pools};
pub use projection::{Projected, ProjectionResult, project};
pub use tipout_rates::{
    ConfigurationResult, MAX_SUPPORT_TIPOUT_PERCENTAGE, REDUCED_BAR_TIPOUT_PERCENTAGE,
    REDUCED_BAR_TIPOUT_SUPPORT_COUNT, STANDARD_BAR_TIPOUT_PERCENTAGE,
    SUPPORT_TIPOUT_PERCENTAGE_PER_HEAD, bar_tipout_percentage, derive_configuration,
    support_tipout_percentage,
};
