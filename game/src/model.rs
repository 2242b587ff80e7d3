use serde::{Deserialize, Serialize};

use crate::domains::clients::ClientId;
use crate::domains::equipment::{EquipmentChange, EquipmentSet};
use crate::domains::map::{Restaurant, ZoneId};
use crate::domains::minigame::MiniGame;
use crate::domains::stock::{Dish, FoodStock};
use crate::domains::timing::Timer;
use crate::domains::weapons::PlayerInventory;
use crate::math::{Position, TileCenter};

pub const PLAYER_SPEED: f32 = 150.0;
pub const START_REPUTATION: i32 = 50;
pub const SERVE_DURATION: f32 = 1.4;
pub const SERVE_REWARD: i32 = 20;
pub const SERVE_REPUTATION: i32 = 5;
pub const FAIL_REPUTATION: i32 = -5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

/// The player walking to the kitchen and back to hand the dish over;
/// rewards land when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServeMotion {
    pub client: ClientId,
    pub dish: Dish,
    pub timer: Timer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Players {
    PlayerMoved {
        player: PlayerId,
        position: Position,
    },
    PlayerTransferred {
        player: PlayerId,
        zone: ZoneId,
        position: Position,
    },
    MoneyChanged {
        player: PlayerId,
        money: i32,
    },
    ReputationChanged {
        player: PlayerId,
        reputation: i32,
    },
    EquipmentChanged {
        player: PlayerId,
        change: EquipmentChange,
    },
    ServeStarted {
        player: PlayerId,
        client: ClientId,
    },
    ClientServed {
        player: PlayerId,
        client: ClientId,
        payment: i32,
    },
    PaymentStolen {
        player: PlayerId,
        payment: i32,
    },
    ServiceFailed {
        player: PlayerId,
        client: Option<ClientId>,
    },
}

pub struct Player {
    pub id: PlayerId,
    pub restaurant: Restaurant,
    pub position: Position,
    pub zone: ZoneId,
    pub velocity: Position,
    pub money: i32,
    pub reputation: i32,
    pub equipment: EquipmentSet,
    pub stock: FoodStock,
    pub inventory: PlayerInventory,
    pub minigame: Option<MiniGame>,
    /// Weak reference: the client's lifecycle belongs to the clients domain.
    pub current_client: Option<ClientId>,
    pub serving: Option<ServeMotion>,
    pub clients_served: usize,
    pub clients_lost: usize,
}

impl Player {
    pub fn new(id: PlayerId, restaurant: Restaurant) -> Self {
        Self {
            id,
            restaurant,
            position: [5, 5].center(),
            zone: restaurant.zone(),
            velocity: [0.0, 0.0],
            money: 0,
            reputation: START_REPUTATION,
            equipment: EquipmentSet::new(),
            stock: FoodStock::new(restaurant),
            inventory: PlayerInventory::default(),
            minigame: None,
            current_client: None,
            serving: None,
            clients_served: 0,
            clients_lost: 0,
        }
    }

    pub fn add_money(&mut self, amount: i32) -> Players {
        self.money += amount;
        Players::MoneyChanged {
            player: self.id,
            money: self.money,
        }
    }

    pub fn modify_reputation(&mut self, amount: i32) -> Players {
        self.reputation = (self.reputation + amount).clamp(0, 100);
        Players::ReputationChanged {
            player: self.id,
            reputation: self.reputation,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.minigame.is_some() || self.serving.is_some()
    }
}
