use std::cmp::Ordering;

use log::{error, info};
use rand::{thread_rng, Rng};

use crate::api::{Event, Session};
use crate::domains::clients::{ClientId, ClientState, Clients};
use crate::domains::incidents::{
    IncidentKind, Incidents, INSPECTION_FINE, INSPECTION_REPUTATION_PENALTY,
};
use crate::domains::map::Restaurant;
use crate::domains::minigame::{MiniGame, Minigame};
use crate::domains::stock::{Dish, Stock, StockError};
use crate::domains::timing::Timer;
use crate::history;
use crate::math::{TileCenter, TileMath, VectorMath};
use crate::model::{
    PlayerId, Players, ServeMotion, FAIL_REPUTATION, SERVE_DURATION, SERVE_REPUTATION,
    SERVE_REWARD,
};
use crate::occur;
use crate::Game;

const ANGRY_REPUTATION_PENALTY: i32 = -1;

impl Game {
    /// Advances the whole simulation by the given real duration.
    ///
    /// The pass order matters: weapon drops and cosmetic animations first,
    /// then player movement and service resolution, then the street
    /// population, angry departures, removal of departed clients, the
    /// client state machines, and finally ambient incidents.
    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        if self.game_over {
            return vec![];
        }
        self.time += real_seconds;
        let now = self.time;
        let time = real_seconds;
        let mut rng = thread_rng();
        let mut events = vec![];

        if now >= self.duration {
            return self.finish_match();
        }

        let weapons = self.weapons.update(now, &mut rng);
        if !weapons.is_empty() {
            events.push(weapons.into());
        }
        let animations = self.animations.update(now);
        if !animations.is_empty() {
            events.push(animations.into());
        }

        for index in 0..self.players.len() {
            self.advance_player(index, now, time, &mut rng, &mut events);
        }

        if now - self.last_spawn > self.spawn_interval {
            self.last_spawn = now;
            let (_, appeared) = self.clients.spawn_street(now, &mut rng);
            events.push(appeared.into());
        }

        // angry clients storm out; the owner pays in reputation exactly
        // once, on this very transition
        let mut departures = vec![];
        for client in self.clients.clients.iter_mut() {
            if client.state != ClientState::Angry {
                continue;
            }
            client.start_flee(now);
            departures.push((
                client.target,
                Clients::ClientStateChanged {
                    id: client.id,
                    state: ClientState::Fleeing,
                },
            ));
        }
        for (target, transition) in departures {
            if let Some(restaurant) = target {
                let owner = self.owner_of(restaurant);
                events.push(
                    self.players[owner]
                        .modify_reputation(ANGRY_REPUTATION_PENALTY)
                        .into(),
                );
                self.players[owner].clients_lost += 1;
            }
            events.push(transition.into());
        }

        let vanished = self.clients.vanish_departed();
        if !vanished.is_empty() {
            events.push(vanished.into());
        }
        self.release_stale_references(&mut events);

        let appeal = [
            self.appeal_of(Restaurant::Tacos),
            self.appeal_of(Restaurant::Kebab),
        ];
        let crowd = self
            .clients
            .update(now, time, &self.world, appeal, &mut rng);
        if !crowd.is_empty() {
            events.push(crowd.into());
        }

        if let Some(kind) = self.incidents.update(now, &mut rng) {
            events.push(Incidents::IncidentTriggered { kind }.into());
            match kind {
                IncidentKind::HealthInspection => {
                    for index in 0..self.players.len() {
                        let risk = self.players[index].equipment.inspection_risk() as f64;
                        if rng.gen_bool(risk) {
                            events.extend(self.fine_player(index));
                        }
                    }
                }
            }
        }

        events
    }

    fn advance_player(
        &mut self,
        index: usize,
        now: f32,
        time: f32,
        rng: &mut impl Rng,
        events: &mut Vec<Event>,
    ) {
        self.advance_player_movement(index, time, events);
        let mut challenge_events = vec![];
        if let Some(minigame) = self.players[index].minigame.as_mut() {
            challenge_events = minigame.update(now);
        }
        if !challenge_events.is_empty() {
            events.push(challenge_events.into());
        }
        if self.players[index]
            .minigame
            .as_ref()
            .map_or(false, |minigame| minigame.completed)
        {
            if let Some(minigame) = self.players[index].minigame.take() {
                self.resolve_challenge(index, minigame, now, events);
            }
        }
        let delivered = match self.players[index].serving.as_mut() {
            Some(serving) => {
                serving.timer.advance(now);
                serving.timer.is_completed()
            }
            None => false,
        };
        if delivered {
            if let Some(serving) = self.players[index].serving.take() {
                self.deliver(index, serving, now, rng, events);
            }
        }
    }

    /// Axis-separated movement so players slide along walls, with door
    /// tiles transferring them between zones.
    fn advance_player_movement(&mut self, index: usize, time: f32, events: &mut Vec<Event>) {
        let player = &mut self.players[index];
        if player.is_busy() || player.velocity.length() == 0.0 {
            return;
        }
        let zone = self.world.get_zone(player.zone);
        let step = player.velocity.mul(time);
        let mut position = player.position;
        let horizontal = [position[0] + step[0], position[1]];
        let [tile_x, tile_y] = horizontal.to_tile();
        if zone.is_walkable(tile_x, tile_y) {
            position = horizontal;
        }
        let vertical = [position[0], position[1] + step[1]];
        let [tile_x, tile_y] = vertical.to_tile();
        if zone.is_walkable(tile_x, tile_y) {
            position = vertical;
        }
        if position == player.position {
            return;
        }
        player.position = position;
        let [tile_x, tile_y] = position.to_tile();
        if let Some(door) = zone.get_door_at(tile_x, tile_y) {
            player.zone = door.target_zone;
            player.position = door.target_tile().center();
            events.push(
                Players::PlayerTransferred {
                    player: player.id,
                    zone: player.zone,
                    position: player.position,
                }
                .into(),
            );
            return;
        }
        events.push(
            Players::PlayerMoved {
                player: player.id,
                position,
            }
            .into(),
        );
    }

    /// A finished challenge either launches the serve walk or loses the
    /// client. The recipe is consumed here so a pantry emptied mid-game
    /// still fails the service.
    fn resolve_challenge(
        &mut self,
        index: usize,
        minigame: MiniGame,
        now: f32,
        events: &mut Vec<Event>,
    ) {
        let client = self.players[index].current_client.take();
        // the rival may have killed or scared the client off between the
        // final keypress and this tick
        let client = client.filter(|id| self.clients.get_servable(*id).is_ok());
        if !minigame.success {
            let position = self.players[index].position;
            events.push(self.animations.float_text("Raté !", position, now).into());
            self.fail_service(index, client, events);
            return;
        }
        let client = match client {
            Some(client) => client,
            None => {
                self.fail_service(index, None, events);
                return;
            }
        };
        let spit_ok =
            minigame.dish != Dish::Kebab || self.players[index].stock.is_spit_available(now);
        let outcome = if spit_ok {
            self.players[index].stock.use_recipe(minigame.dish.recipe())
        } else {
            Err(StockError::MissingIngredient {
                name: "broche".to_string(),
            })
        };
        match outcome {
            Ok(()) => {
                let restaurant = self.players[index].restaurant;
                events.push(
                    Stock::IngredientsConsumed {
                        restaurant,
                        dish: minigame.dish,
                    }
                    .into(),
                );
                let duration =
                    SERVE_DURATION * self.players[index].equipment.cooking_time_multiplier();
                if let Ok(served) = self.clients.get_client_mut(client) {
                    served.depart();
                    events.push(
                        Clients::ClientStateChanged {
                            id: client,
                            state: ClientState::Gone,
                        }
                        .into(),
                    );
                }
                self.players[index].serving = Some(ServeMotion {
                    client,
                    dish: minigame.dish,
                    timer: Timer::new(now, duration),
                });
                self.players[index].velocity = [0.0, 0.0];
                events.push(
                    Players::ServeStarted {
                        player: PlayerId(index),
                        client,
                    }
                    .into(),
                );
            }
            Err(error) => {
                info!("Player {} cannot assemble the dish: {:?}", index, error);
                let text = match &error {
                    StockError::MissingIngredient { name } => format!("Manque: {}", name),
                    _ => "Service impossible".to_string(),
                };
                let position = self.players[index].position;
                events.push(self.animations.float_text(text, position, now).into());
                self.fail_service(index, Some(client), events);
            }
        }
    }

    fn fail_service(
        &mut self,
        index: usize,
        client: Option<ClientId>,
        events: &mut Vec<Event>,
    ) {
        events.push(
            Players::ServiceFailed {
                player: PlayerId(index),
                client,
            }
            .into(),
        );
        events.push(self.players[index].modify_reputation(FAIL_REPUTATION).into());
        self.players[index].clients_lost += 1;
        if let Some(id) = client {
            if let Ok(client) = self.clients.get_client_mut(id) {
                client.depart();
                events.push(
                    Clients::ClientStateChanged {
                        id,
                        state: ClientState::Gone,
                    }
                    .into(),
                );
            }
        }
    }

    /// Payday at the end of the serve walk. A broken spit degrades the
    /// dish, a broken register risks losing the payment entirely.
    fn deliver(
        &mut self,
        index: usize,
        serving: ServeMotion,
        now: f32,
        rng: &mut impl Rng,
        events: &mut Vec<Event>,
    ) {
        let player = &mut self.players[index];
        let quality = player.equipment.quality_penalty();
        let payment = SERVE_REWARD - SERVE_REWARD * quality / 100;
        let stolen = rng.gen_bool(player.equipment.money_loss_risk() as f64);
        if stolen {
            events.push(
                Players::PaymentStolen {
                    player: player.id,
                    payment,
                }
                .into(),
            );
        } else {
            events.push(player.add_money(payment).into());
        }
        events.push(player.modify_reputation(SERVE_REPUTATION).into());
        player.clients_served += 1;
        let id = player.id;
        let position = player.position;
        events.push(
            Players::ClientServed {
                player: id,
                client: serving.client,
                payment: if stolen { 0 } else { payment },
            }
            .into(),
        );
        let text = if stolen {
            "Caisse vidée !".to_string()
        } else {
            format!("+{}", payment)
        };
        events.push(self.animations.float_text(text, position, now).into());
        info!("Player {:?} served {}", id, serving.dish.name());
    }

    /// Drops references to clients that fled or died mid-service and
    /// cancels the challenge they were gating.
    fn release_stale_references(&mut self, events: &mut Vec<Event>) {
        for index in 0..self.players.len() {
            let stale = match self.players[index].current_client {
                Some(id) => self.clients.get_servable(id).is_err(),
                None => false,
            };
            if !stale {
                continue;
            }
            self.players[index].current_client = None;
            if self.players[index].minigame.take().is_some() {
                events.push(
                    Minigame::ChallengeCompleted {
                        player: index,
                        success: false,
                    }
                    .into(),
                );
            }
        }
    }

    pub(crate) fn fine_player(&mut self, index: usize) -> Vec<Event> {
        let player = &mut self.players[index];
        let money = player.add_money(-INSPECTION_FINE);
        let reputation = player.modify_reputation(-INSPECTION_REPUTATION_PENALTY);
        info!("Player {} fined by the health inspection", index);
        occur![
            Incidents::PlayerFined {
                player: index,
                fine: INSPECTION_FINE,
            },
            money,
            reputation,
        ]
    }

    fn finish_match(&mut self) -> Vec<Event> {
        self.game_over = true;
        let winner = match self.players[0].money.cmp(&self.players[1].money) {
            Ordering::Greater => Some(PlayerId(0)),
            Ordering::Less => Some(PlayerId(1)),
            Ordering::Equal => None,
        };
        info!("Match finished, winner: {:?}", winner);
        if let Some(path) = self.history.clone() {
            let record = history::record(self, winner);
            if let Err(error) = history::append(&path, &record) {
                error!("Unable to record match history: {}", error);
            }
        }
        occur![Session::GameFinished { winner }]
    }
}
