//! Domain services - Pure game rules that span several entities

pub mod combat;
pub mod rewards;
pub mod rolls;
pub mod story;

pub use combat::{run_battle, CombatError};
pub use rewards::{apply_victory, RewardError};
pub use rolls::RandomRolls;
pub use story::generate_story;
