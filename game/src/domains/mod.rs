pub mod animation;
pub mod clients;
pub mod equipment;
pub mod incidents;
pub mod map;
pub mod minigame;
pub mod sabotage;
pub mod stock;
pub mod timing;
pub mod weapons;
