mod attack;
mod interact;
mod move_player;
mod pickup_weapon;
mod press_key;
mod repair;
mod restock;
mod sabotage;
mod sweep;

pub use interact::INTERACT_RANGE;
pub use repair::REPAIR_COST;
pub use sweep::{SWEEP_INTENSITY, SWEEP_RANGE};
