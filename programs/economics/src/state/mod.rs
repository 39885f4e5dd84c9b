pub mod global_config;
pub mod launch_curve;
pub mod reward_pool;
pub mod trader_volume;
pub mod trending_state;

pub use global_config::*;
pub use launch_curve::*;
pub use reward_pool::*;
pub use trader_volume::*;
pub use trending_state::*;
