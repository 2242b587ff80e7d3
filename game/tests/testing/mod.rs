use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use game::api::{Action, ActionError, Event};
use game::clients::{ClientId, ClientState};
use game::map::{Restaurant, ZoneId};
use game::math::{Tile, TileCenter};
use game::model::{Player, PlayerId};
use game::weapons::WeaponKind;
use game::Game;

pub const TICK: f32 = 1.0 / 60.0;

#[allow(dead_code)]
pub fn at<T>(x: T, y: T) -> [T; 2] {
    [x, y]
}

pub struct GameTestScenario {
    pub game: Game,
    clients: HashMap<String, ClientId>,
    rng: StdRng,
    current_action_result: Result<Vec<Event>, ActionError>,
}

#[allow(dead_code)]
impl GameTestScenario {
    pub fn new() -> Self {
        GameTestScenario {
            game: Game::new(),
            clients: Default::default(),
            rng: StdRng::seed_from_u64(7),
            current_action_result: Err(ActionError::Test),
        }
    }

    pub fn client(&self, name: &str) -> ClientId {
        *self.clients.get(name).unwrap()
    }

    pub fn client_state(&self, name: &str) -> ClientState {
        self.game
            .clients
            .get_client(self.client(name))
            .unwrap()
            .state
    }

    pub fn client_exists(&self, name: &str) -> bool {
        self.game.clients.get_client(self.client(name)).is_ok()
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.game.players[index]
    }

    pub fn action_result(&self) -> &Result<Vec<Event>, ActionError> {
        &self.current_action_result
    }

    pub fn given_money(mut self, index: usize, money: i32) -> Self {
        self.game.players[index].money = money;
        self
    }

    pub fn given_reputation(mut self, index: usize, reputation: i32) -> Self {
        self.game.players[index].reputation = reputation;
        self
    }

    pub fn given_player_at(mut self, index: usize, zone: ZoneId, tile: Tile) -> Self {
        self.game.players[index].zone = zone;
        self.game.players[index].position = tile.center();
        self
    }

    pub fn given_weapon_in_hand(mut self, index: usize, kind: WeaponKind) -> Self {
        self.game.players[index].inventory.pickup(kind).unwrap();
        self
    }

    pub fn given_street_client(mut self, name: &str) -> Self {
        let now = self.game.time;
        let (id, _) = self.game.clients.spawn_street(now, &mut self.rng);
        self.clients.insert(name.to_string(), id);
        self
    }

    /// A client already standing at the head of the interior queue with
    /// its patience timer running.
    pub fn given_waiting_client(mut self, name: &str, restaurant: Restaurant) -> Self {
        let now = self.game.time;
        let (id, _) = self
            .game
            .clients
            .spawn_visitor(restaurant, now, &mut self.rng);
        let slot = self.game.world.queue_slots(restaurant)[0];
        let client = self.game.clients.get_client_mut(id).unwrap();
        client.zone = restaurant.zone();
        client.position = slot.center();
        client.queue_slot = Some(slot);
        client.state = ClientState::Waiting;
        client.wait_since = Some(now);
        self.clients.insert(name.to_string(), id);
        self
    }

    pub fn when_time_passes(mut self, seconds: f32) -> Self {
        let steps = (seconds / TICK).round() as usize;
        for _ in 0..steps {
            self.game.update(TICK);
        }
        self
    }

    pub fn when_perform(mut self, index: usize, action: Action) -> Self {
        self.current_action_result = self.game.perform_action(PlayerId(index), action);
        self
    }

    pub fn then_action_succeeds(self) -> Self {
        assert!(
            self.current_action_result.is_ok(),
            "action failed: {:?}",
            self.current_action_result
        );
        self
    }

    pub fn then_action_fails(self, expected: ActionError) -> Self {
        assert_eq!(self.current_action_result, Err(expected));
        self
    }

    pub fn then_client_state(self, name: &str, expected: ClientState) -> Self {
        assert_eq!(self.client_state(name), expected);
        self
    }

    pub fn then_money(self, index: usize, expected: i32) -> Self {
        assert_eq!(self.game.players[index].money, expected);
        self
    }

    pub fn then_reputation(self, index: usize, expected: i32) -> Self {
        assert_eq!(self.game.players[index].reputation, expected);
        self
    }
}
