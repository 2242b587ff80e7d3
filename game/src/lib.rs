use std::path::PathBuf;

pub mod api;
pub mod collections;
pub mod history;
pub mod math;
pub mod model;
pub mod view;

mod actions;
mod domains;
mod update;

pub use actions::*;
pub use domains::*;

use api::{Action, ActionError, Event};
use domains::animation::AnimationDomain;
use domains::clients::{ClientsDomain, RestaurantAppeal};
use domains::incidents::IncidentsDomain;
use domains::map::{Restaurant, WorldMap};
use domains::sabotage::SabotageDomain;
use domains::weapons::WeaponsDomain;
use model::{Player, PlayerId};

pub const MATCH_DURATION: f32 = 300.0;
pub const CLIENT_SPAWN_INTERVAL: f32 = 8.0;

#[macro_export]
macro_rules! occur {
    () => {
        vec![]
    };
    ($($event:expr,)*) => {
        vec![$($event.into()),*]
    };
    ($($event:expr),*) => {
        vec![$($event.into()),*]
    };
}

/// The whole simulation, advanced by `update` and mutated by player
/// actions in between. Single-threaded; all waiting is polled time
/// comparisons against the internal timeline.
pub struct Game {
    pub time: f32,
    pub duration: f32,
    pub game_over: bool,
    pub world: WorldMap,
    pub players: Vec<Player>,
    pub clients: ClientsDomain,
    pub weapons: WeaponsDomain,
    pub sabotages: SabotageDomain,
    pub animations: AnimationDomain,
    pub incidents: IncidentsDomain,
    pub history: Option<PathBuf>,
    pub(crate) last_spawn: f32,
    pub(crate) spawn_interval: f32,
}

impl Game {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            duration: MATCH_DURATION,
            game_over: false,
            world: WorldMap::new(),
            players: vec![
                Player::new(PlayerId(0), Restaurant::Tacos),
                Player::new(PlayerId(1), Restaurant::Kebab),
            ],
            clients: ClientsDomain::default(),
            weapons: WeaponsDomain::new(),
            sabotages: SabotageDomain::new(),
            animations: AnimationDomain::default(),
            incidents: IncidentsDomain::new(),
            history: None,
            last_spawn: 0.0,
            spawn_interval: CLIENT_SPAWN_INTERVAL,
        }
    }

    pub fn perform_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<Vec<Event>, ActionError> {
        if self.game_over {
            return Err(ActionError::GameOver);
        }
        match action {
            Action::Move { direction } => self.move_player(player, direction),
            Action::Interact => self.interact(player),
            Action::Attack => self.attack(player),
            Action::Sweep => self.sweep(player),
            Action::Sabotage { kind } => self.execute_sabotage(player, kind),
            Action::PickupWeapon => self.pickup_weapon(player),
            Action::Restock { ingredient } => self.restock(player, ingredient),
            Action::Repair { equipment } => self.repair(player, equipment),
            Action::PressKey { key } => self.press_key(player, key),
        }
    }

    pub fn time_left(&self) -> f32 {
        (self.duration - self.time).max(0.0)
    }

    pub(crate) fn player(&self, id: PlayerId) -> Result<&Player, ActionError> {
        self.players
            .get(id.0)
            .ok_or(ActionError::PlayerNotFound { id })
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, ActionError> {
        self.players
            .get_mut(id.0)
            .ok_or(ActionError::PlayerNotFound { id })
    }

    pub(crate) fn rival_of(&self, id: PlayerId) -> usize {
        (id.0 + 1) % self.players.len()
    }

    pub(crate) fn owner_of(&self, restaurant: Restaurant) -> usize {
        self.players
            .iter()
            .position(|player| player.restaurant == restaurant)
            .unwrap_or(0)
    }

    pub(crate) fn appeal_of(&self, restaurant: Restaurant) -> RestaurantAppeal {
        let player = &self.players[self.owner_of(restaurant)];
        RestaurantAppeal {
            restaurant,
            reputation: player.reputation,
            spawn_rate_penalty: player.equipment.spawn_rate_penalty(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
