pub mod claim_reward;
pub mod create_reward_pool;
pub mod distribute_rewards;
pub mod initialize_config;
pub mod initialize_launch;
pub mod record_trade;
pub mod refresh_trending;
pub mod sync_progress;
pub mod top_up_reward_pool;
pub mod update_config;
pub mod update_reward_pool;

pub use claim_reward::*;
pub use create_reward_pool::*;
pub use distribute_rewards::*;
pub use initialize_config::*;
pub use initialize_launch::*;
pub use record_trade::*;
pub use refresh_trending::*;
pub use sync_progress::*;
pub use top_up_reward_pool::*;
pub use update_config::*;
pub use update_reward_pool::*;
