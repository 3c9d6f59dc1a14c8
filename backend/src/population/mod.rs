//! Population-level what-if modelling

pub mod distribution;
pub mod supply;

pub use distribution::{generate_player_distribution, DistributionType, Segment, TimeStrategy, SEGMENT_COUNT};
pub use supply::{
    distribute_weights_evenly, simulate_market_supply, SupplyConfig, SupplyLine, SupplyReport, SupplyStats,
    SupplyTarget,
};
