use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::domains::map::{Restaurant, ZoneId, STREET_HEIGHT, STREET_WIDTH};
use crate::domains::stock::Dish;
use crate::domains::timing::Timer;
use crate::math::{Position, Random, Tile, TileCenter, TILE_SIZE};

pub const CLIENT_PATIENCE: f32 = 45.0;
pub const CLIENT_SPEED: f32 = 60.0;
pub const FLEE_SPEED: f32 = 240.0;
pub const FLEE_DURATION: f32 = 1.5;
pub const DEATH_DURATION: f32 = 0.8;
/// Arrival tolerance before snapping onto a queue slot.
pub const QUEUE_SNAP: f32 = 4.0;
pub const FEAR_CAP: f32 = 3.0;
pub const FEAR_FLEE_THRESHOLD: f32 = 2.5;

const ABSURD_REQUESTS: [&str; 8] = [
    "Sans gluten mais avec double pain",
    "Cuit à la vapeur de chicha",
    "Avec supplément gras",
    "Pas trop chaud, je suis sensible",
    "Coupez le en 12 svp",
    "Avec de la mayo halal",
    "Sans oignons mais avec oignons frits",
    "Sauce algérienne-samuraï mix",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientState {
    Wandering,
    WalkingToRestaurant,
    WaitingOutside,
    WalkingToQueue,
    Waiting,
    Angry,
    Fleeing,
    Dying,
    Dead,
    Gone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodParticle {
    pub position: Position,
    pub velocity: Position,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Clients {
    ClientAppeared {
        id: ClientId,
        zone: ZoneId,
        position: Position,
        dish: Dish,
    },
    ClientMoved {
        id: ClientId,
        position: Position,
    },
    ClientTransferred {
        id: ClientId,
        zone: ZoneId,
        position: Position,
    },
    ClientStateChanged {
        id: ClientId,
        state: ClientState,
    },
    TargetChosen {
        id: ClientId,
        restaurant: Restaurant,
    },
    QueueSlotAssigned {
        id: ClientId,
        tile: Tile,
    },
    OutsideSlotAssigned {
        id: ClientId,
        tile: Tile,
    },
    ClientVanished {
        id: ClientId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientsError {
    ClientNotFound { id: ClientId },
    NotServable { id: ClientId, state: ClientState },
}

/// Weights used by wandering clients when picking a restaurant.
#[derive(Debug, Clone, Copy)]
pub struct RestaurantAppeal {
    pub restaurant: Restaurant,
    pub reputation: i32,
    pub spawn_rate_penalty: f32,
}

impl RestaurantAppeal {
    pub fn weight(&self) -> f32 {
        (self.reputation as f32 * (1.0 - self.spawn_rate_penalty)).max(0.0)
    }
}

pub struct Client {
    pub id: ClientId,
    pub position: Position,
    pub zone: ZoneId,
    pub target: Option<Restaurant>,
    pub dish: Dish,
    pub absurd_request: &'static str,
    pub state: ClientState,
    pub queue_slot: Option<Tile>,
    pub outside_slot: Option<Tile>,
    pub wait_since: Option<f32>,
    pub patience: f32,
    pub fear: f32,
    // wandering
    pub(crate) direction: Position,
    pub(crate) next_turn: f32,
    pub(crate) next_decision: f32,
    // exit animations (cosmetic except the completion edge)
    pub(crate) exit: Option<Timer>,
    pub(crate) flee_origin: Position,
    pub(crate) flee_direction: f32,
    pub wobble: f32,
    pub blood: Vec<BloodParticle>,
}

impl Client {
    pub fn is_alive(&self) -> bool {
        !matches!(self.state, ClientState::Dead | ClientState::Gone)
    }

    /// Serving and attacking are only allowed in these states.
    pub fn is_servable(&self) -> bool {
        matches!(
            self.state,
            ClientState::Waiting | ClientState::Angry | ClientState::WalkingToQueue
        )
    }

    /// Accumulates fear up to the cap and forces a flight once the
    /// threshold is crossed, from any non-terminal, non-fleeing state.
    pub fn scare(&mut self, intensity: f32, now: f32) -> bool {
        if !self.is_alive() || matches!(self.state, ClientState::Fleeing | ClientState::Dying) {
            return false;
        }
        self.fear = (self.fear + intensity).min(FEAR_CAP);
        if self.fear >= FEAR_FLEE_THRESHOLD {
            self.start_flee(now);
            return true;
        }
        false
    }

    /// One-hit kill; starts the death animation.
    pub fn take_damage(&mut self, now: f32, random: &mut Random) {
        if !self.is_alive() || self.state == ClientState::Dying {
            return;
        }
        self.state = ClientState::Dying;
        self.exit = Some(Timer::new(now, DEATH_DURATION));
        self.blood = (0..8)
            .map(|_| BloodParticle {
                position: self.position,
                velocity: [random.range(-180.0, 180.0), random.range(-300.0, -60.0)],
                size: random.range(3.0, 8.0),
                alpha: 1.0,
            })
            .collect();
    }

    pub fn start_flee(&mut self, now: f32) {
        let zone_width = match self.zone {
            ZoneId::Street => STREET_WIDTH as f32 * TILE_SIZE,
            _ => crate::domains::map::RESTAURANT_WIDTH as f32 * TILE_SIZE,
        };
        self.flee_direction = if self.position[0] > zone_width / 2.0 {
            1.0
        } else {
            -1.0
        };
        self.flee_origin = self.position;
        self.exit = Some(Timer::new(now, FLEE_DURATION));
        self.state = ClientState::Fleeing;
    }

    /// Marks the client as having left through normal service flow.
    pub fn depart(&mut self) {
        self.state = ClientState::Gone;
    }
}

#[derive(Default)]
pub struct ClientsDomain {
    pub clients: Vec<Client>,
    clients_id: Sequence,
}

impl ClientsDomain {
    pub fn get_client(&self, id: ClientId) -> Result<&Client, ClientsError> {
        self.clients
            .iter()
            .find(|client| client.id == id)
            .ok_or(ClientsError::ClientNotFound { id })
    }

    pub fn get_client_mut(&mut self, id: ClientId) -> Result<&mut Client, ClientsError> {
        self.clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or(ClientsError::ClientNotFound { id })
    }

    /// Looks a client up and requires a state in which it can be served
    /// or attacked.
    pub fn get_servable(&self, id: ClientId) -> Result<&Client, ClientsError> {
        let client = self.get_client(id)?;
        if !client.is_servable() {
            return Err(ClientsError::NotServable {
                id,
                state: client.state,
            });
        }
        Ok(client)
    }

    /// Spawns a roaming client somewhere on the street sidewalk.
    pub fn spawn_street(&mut self, now: f32, rng: &mut impl Rng) -> (ClientId, Clients) {
        let tile: Tile = [
            rng.gen_range(2..STREET_WIDTH - 2),
            rng.gen_range(4..STREET_HEIGHT - 1),
        ];
        let dish = if rng.gen_bool(0.5) {
            Dish::TacosXxl
        } else {
            Dish::Kebab
        };
        self.spawn(ZoneId::Street, tile.center(), dish, None, ClientState::Wandering, now, rng)
    }

    /// Spawns a client already decided on a restaurant.
    pub fn spawn_visitor(
        &mut self,
        restaurant: Restaurant,
        now: f32,
        rng: &mut impl Rng,
    ) -> (ClientId, Clients) {
        let tile: Tile = [
            rng.gen_range(2..STREET_WIDTH - 2),
            rng.gen_range(5..STREET_HEIGHT),
        ];
        self.spawn(
            ZoneId::Street,
            tile.center(),
            Dish::for_restaurant(restaurant),
            Some(restaurant),
            ClientState::WalkingToRestaurant,
            now,
            rng,
        )
    }

    fn spawn(
        &mut self,
        zone: ZoneId,
        position: Position,
        dish: Dish,
        target: Option<Restaurant>,
        state: ClientState,
        now: f32,
        rng: &mut impl Rng,
    ) -> (ClientId, Clients) {
        let id = self.clients_id.one(ClientId);
        let client = Client {
            id,
            position,
            zone,
            target,
            dish,
            absurd_request: ABSURD_REQUESTS[rng.gen_range(0..ABSURD_REQUESTS.len())],
            state,
            queue_slot: None,
            outside_slot: None,
            wait_since: None,
            patience: CLIENT_PATIENCE,
            fear: 0.0,
            direction: [0.0, 0.0],
            next_turn: now,
            next_decision: now + rng.gen_range(1.0..3.0),
            exit: None,
            flee_origin: position,
            flee_direction: 1.0,
            wobble: 0.0,
            blood: vec![],
        };
        let event = Clients::ClientAppeared {
            id,
            zone,
            position,
            dish,
        };
        self.clients.push(client);
        (id, event)
    }

    /// Alive clients currently inside the restaurant.
    pub fn interior_count(&self, restaurant: Restaurant) -> usize {
        self.clients
            .iter()
            .filter(|client| client.is_alive() && client.zone == restaurant.zone())
            .count()
    }

    /// Street clients on their way to or waiting in front of the restaurant.
    pub fn street_targeting_count(&self, restaurant: Restaurant) -> usize {
        self.clients
            .iter()
            .filter(|client| {
                client.zone == ZoneId::Street
                    && client.target == Some(restaurant)
                    && matches!(
                        client.state,
                        ClientState::WalkingToRestaurant | ClientState::WaitingOutside
                    )
            })
            .count()
    }

    /// Removes dead and gone clients from the live collection.
    pub fn vanish_departed(&mut self) -> Vec<Clients> {
        let mut events = vec![];
        self.clients.retain(|client| {
            if client.is_alive() {
                return true;
            }
            events.push(Clients::ClientVanished { id: client.id });
            false
        });
        events
    }
}
