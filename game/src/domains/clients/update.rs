use log::info;
use rand::Rng;

use crate::clients::{
    Client, ClientState, Clients, ClientsDomain, RestaurantAppeal, FLEE_SPEED, QUEUE_SNAP,
};
use crate::domains::map::{Restaurant, WorldMap, ZoneId, QUEUE_CAPACITY};
use crate::math::{Position, TileCenter, TileMath, VectorMath, TILE_SIZE};

use super::domain::CLIENT_SPEED;

const BLOOD_GRAVITY: f32 = 540.0;

const RESTAURANTS: [Restaurant; 2] = [Restaurant::Tacos, Restaurant::Kebab];

fn move_toward(client: &mut Client, goal: Position, time: f32) -> bool {
    let distance = client.position.distance(goal);
    if distance <= QUEUE_SNAP {
        return true;
    }
    let step = CLIENT_SPEED * time;
    if step >= distance {
        client.position = goal;
    } else {
        let movement = client.position.direction_to(goal).mul(step);
        client.position = client.position.add(movement);
    }
    false
}

impl ClientsDomain {
    pub fn update(
        &mut self,
        now: f32,
        time: f32,
        map: &WorldMap,
        appeal: [RestaurantAppeal; 2],
        rng: &mut impl Rng,
    ) -> Vec<Clients> {
        let mut events = self.allocate_queues(map);

        let mut interior = [
            self.interior_count(Restaurant::Tacos),
            self.interior_count(Restaurant::Kebab),
        ];
        let mut street_targeting = [
            self.street_targeting_count(Restaurant::Tacos),
            self.street_targeting_count(Restaurant::Kebab),
        ];
        let front = [
            self.front_of_line(map, Restaurant::Tacos),
            self.front_of_line(map, Restaurant::Kebab),
        ];

        for index in 0..self.clients.len() {
            match self.clients[index].state {
                ClientState::Wandering => {
                    self.wander(index, now, time, map, &appeal, &mut street_targeting, rng, &mut events);
                }
                ClientState::WalkingToRestaurant => {
                    let restaurant = match self.clients[index].target {
                        Some(restaurant) => restaurant,
                        None => continue,
                    };
                    let door = map.street_door(restaurant).center();
                    let client = &mut self.clients[index];
                    if move_toward(client, door, time) {
                        let slot = restaurant as usize;
                        if interior[slot] < QUEUE_CAPACITY {
                            self.enter_restaurant(index, restaurant, map, &mut events);
                            interior[slot] += 1;
                            street_targeting[slot] = street_targeting[slot].saturating_sub(1);
                        } else {
                            client.state = ClientState::WaitingOutside;
                            events.push(Clients::ClientStateChanged {
                                id: client.id,
                                state: ClientState::WaitingOutside,
                            });
                        }
                    } else {
                        events.push(Clients::ClientMoved {
                            id: client.id,
                            position: client.position,
                        });
                    }
                }
                ClientState::WaitingOutside => {
                    let restaurant = match self.clients[index].target {
                        Some(restaurant) => restaurant,
                        None => continue,
                    };
                    let slot = restaurant as usize;
                    if interior[slot] < QUEUE_CAPACITY && front[slot] == Some(index) {
                        self.enter_restaurant(index, restaurant, map, &mut events);
                        interior[slot] += 1;
                        street_targeting[slot] = street_targeting[slot].saturating_sub(1);
                        continue;
                    }
                    let hold = match self.clients[index].outside_slot {
                        Some(tile) => tile.center(),
                        None => {
                            let door = map.street_door(restaurant);
                            [door.x, door.y + 1].center()
                        }
                    };
                    let client = &mut self.clients[index];
                    if !move_toward(client, hold, time) {
                        events.push(Clients::ClientMoved {
                            id: client.id,
                            position: client.position,
                        });
                    }
                }
                ClientState::WalkingToQueue => {
                    let goal = match self.clients[index].queue_slot {
                        Some(tile) => tile.center(),
                        // no slot granted yet, hold near the entrance
                        None => self.clients[index].position,
                    };
                    let client = &mut self.clients[index];
                    if move_toward(client, goal, time) {
                        client.position = goal;
                        client.state = ClientState::Waiting;
                        if client.wait_since.is_none() {
                            client.wait_since = Some(now);
                        }
                        events.push(Clients::ClientStateChanged {
                            id: client.id,
                            state: ClientState::Waiting,
                        });
                    } else {
                        events.push(Clients::ClientMoved {
                            id: client.id,
                            position: client.position,
                        });
                    }
                }
                ClientState::Waiting => {
                    let client = &mut self.clients[index];
                    let waited_out = match client.wait_since {
                        Some(since) => now - since >= client.patience,
                        None => false,
                    };
                    if waited_out {
                        client.state = ClientState::Angry;
                        info!("Client {:?} ran out of patience", client.id);
                        events.push(Clients::ClientStateChanged {
                            id: client.id,
                            state: ClientState::Angry,
                        });
                    }
                }
                // resolved by the orchestrator pass
                ClientState::Angry => {}
                ClientState::Fleeing => {
                    let client = &mut self.clients[index];
                    let progress = match client.exit.as_mut().and_then(|exit| exit.advance(now)) {
                        Some(progress) => progress,
                        None => continue,
                    };
                    client.position[0] += client.flee_direction * FLEE_SPEED * time;
                    client.wobble = (progress * 20.0).sin() * 5.0;
                    client.position[1] = client.flee_origin[1] + client.wobble;
                    if client.exit.map(|exit| exit.is_completed()).unwrap_or(false) {
                        client.state = ClientState::Gone;
                        events.push(Clients::ClientStateChanged {
                            id: client.id,
                            state: ClientState::Gone,
                        });
                    } else {
                        events.push(Clients::ClientMoved {
                            id: client.id,
                            position: client.position,
                        });
                    }
                }
                ClientState::Dying => {
                    let client = &mut self.clients[index];
                    let progress = match client.exit.as_mut().and_then(|exit| exit.advance(now)) {
                        Some(progress) => progress,
                        None => continue,
                    };
                    for particle in client.blood.iter_mut() {
                        particle.velocity[1] += BLOOD_GRAVITY * time;
                        particle.position = particle.position.add(particle.velocity.mul(time));
                        particle.alpha = (1.0 - progress).max(0.0);
                    }
                    if client.exit.map(|exit| exit.is_completed()).unwrap_or(false) {
                        client.state = ClientState::Dead;
                        events.push(Clients::ClientStateChanged {
                            id: client.id,
                            state: ClientState::Dead,
                        });
                    }
                }
                ClientState::Dead | ClientState::Gone => {}
            }
        }
        events
    }

    #[allow(clippy::too_many_arguments)]
    fn wander(
        &mut self,
        index: usize,
        now: f32,
        time: f32,
        map: &WorldMap,
        appeal: &[RestaurantAppeal; 2],
        street_targeting: &mut [usize; 2],
        rng: &mut impl Rng,
        events: &mut Vec<Clients>,
    ) {
        if now >= self.clients[index].next_decision {
            self.clients[index].next_decision = now + rng.gen_range(2.0..4.0);
            if let Some(restaurant) = choose_restaurant(appeal, street_targeting, rng) {
                let client = &mut self.clients[index];
                client.target = Some(restaurant);
                client.dish = crate::stock::Dish::for_restaurant(restaurant);
                client.state = ClientState::WalkingToRestaurant;
                street_targeting[restaurant as usize] += 1;
                events.push(Clients::TargetChosen {
                    id: client.id,
                    restaurant,
                });
                events.push(Clients::ClientStateChanged {
                    id: client.id,
                    state: ClientState::WalkingToRestaurant,
                });
                return;
            }
        }
        if now >= self.clients[index].next_turn {
            let directions: [Position; 4] = [[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0]];
            self.clients[index].direction = directions[rng.gen_range(0..directions.len())];
            self.clients[index].next_turn = now + rng.gen_range(0.5..2.0);
        }
        let client = &mut self.clients[index];
        let step = client.direction.mul(CLIENT_SPEED * time);
        let ahead = client
            .position
            .add(client.direction.mul(TILE_SIZE / 2.0))
            .add(step);
        let zone = map.get_zone(client.zone);
        let [tile_x, tile_y] = ahead.to_tile();
        if zone.is_walkable(tile_x, tile_y) {
            client.position = client.position.add(step);
            events.push(Clients::ClientMoved {
                id: client.id,
                position: client.position,
            });
        } else {
            client.direction = [0.0, 0.0];
        }
    }

    fn enter_restaurant(
        &mut self,
        index: usize,
        restaurant: Restaurant,
        map: &WorldMap,
        events: &mut Vec<Clients>,
    ) {
        let door = map.street_door(restaurant);
        let client = &mut self.clients[index];
        client.zone = restaurant.zone();
        client.position = door.target_tile().center();
        client.outside_slot = None;
        client.state = ClientState::WalkingToQueue;
        events.push(Clients::ClientTransferred {
            id: client.id,
            zone: client.zone,
            position: client.position,
        });
        events.push(Clients::ClientStateChanged {
            id: client.id,
            state: ClientState::WalkingToQueue,
        });
    }
}

/// Reputation-weighted restaurant choice. Restaurants with a full street
/// queue are not candidates; with no positive weight the pick is uniform.
fn choose_restaurant(
    appeal: &[RestaurantAppeal; 2],
    street_targeting: &[usize; 2],
    rng: &mut impl Rng,
) -> Option<Restaurant> {
    let open: Vec<&RestaurantAppeal> = RESTAURANTS
        .iter()
        .zip(appeal.iter())
        .filter(|(restaurant, _)| street_targeting[**restaurant as usize] < QUEUE_CAPACITY)
        .map(|(_, appeal)| appeal)
        .collect();
    match open.as_slice() {
        [] => None,
        [only] => Some(only.restaurant),
        [first, second] => {
            let total = first.weight() + second.weight();
            let roll = if total > 0.0 {
                rng.gen_range(0.0..total)
            } else {
                return if rng.gen_bool(0.5) {
                    Some(first.restaurant)
                } else {
                    Some(second.restaurant)
                };
            };
            if roll < first.weight() {
                Some(first.restaurant)
            } else {
                Some(second.restaurant)
            }
        }
        _ => None,
    }
}
