use crate::clients::{ClientState, Clients, ClientsDomain, QUEUE_SNAP};
use crate::domains::map::{Restaurant, WorldMap, ZoneId, QUEUE_CAPACITY};
use crate::math::{TileCenter, VectorMath};

const RESTAURANTS: [Restaurant; 2] = [Restaurant::Tacos, Restaurant::Kebab];

impl ClientsDomain {
    /// Recomputes slot assignments for both restaurants. Runs once per
    /// tick; slots are granted purely by position, so the nearest client
    /// always keeps priority and nobody starves beyond the capacity cap.
    pub fn allocate_queues(&mut self, map: &WorldMap) -> Vec<Clients> {
        let mut events = vec![];
        for restaurant in RESTAURANTS {
            events.extend(self.allocate_interior(map, restaurant));
            events.extend(self.allocate_exterior(map, restaurant));
        }
        events
    }

    fn allocate_interior(&mut self, map: &WorldMap, restaurant: Restaurant) -> Vec<Clients> {
        let mut events = vec![];
        let mut queued: Vec<usize> = self
            .clients
            .iter()
            .enumerate()
            .filter(|(_, client)| {
                client.zone == restaurant.zone()
                    && client.target == Some(restaurant)
                    && matches!(
                        client.state,
                        ClientState::WalkingToQueue | ClientState::Waiting | ClientState::Angry
                    )
            })
            .map(|(index, _)| index)
            .collect();
        queued.sort_by(|a, b| self.clients[*a].position[1].total_cmp(&self.clients[*b].position[1]));
        queued.truncate(QUEUE_CAPACITY);

        let slots = map.queue_slots(restaurant);
        for (order, index) in queued.into_iter().enumerate() {
            let slot = slots[order];
            let client = &mut self.clients[index];
            if client.queue_slot != Some(slot) {
                client.queue_slot = Some(slot);
                events.push(Clients::QueueSlotAssigned {
                    id: client.id,
                    tile: slot,
                });
            }
            // a reassigned slot forces the client to re-path
            if client.state == ClientState::Waiting
                && client.position.distance(slot.center()) > QUEUE_SNAP
            {
                client.state = ClientState::WalkingToQueue;
                events.push(Clients::ClientStateChanged {
                    id: client.id,
                    state: ClientState::WalkingToQueue,
                });
            }
        }
        events
    }

    fn allocate_exterior(&mut self, map: &WorldMap, restaurant: Restaurant) -> Vec<Clients> {
        let mut events = vec![];
        let door = map.street_door(restaurant).center();
        let mut waiting: Vec<usize> = self
            .clients
            .iter()
            .enumerate()
            .filter(|(_, client)| {
                client.zone == ZoneId::Street
                    && client.target == Some(restaurant)
                    && matches!(
                        client.state,
                        ClientState::WalkingToRestaurant | ClientState::WaitingOutside
                    )
            })
            .map(|(index, _)| index)
            .collect();
        waiting.sort_by(|a, b| {
            self.clients[*a]
                .position
                .distance(door)
                .total_cmp(&self.clients[*b].position.distance(door))
        });

        let slots = map.outside_slots(restaurant);
        for (order, index) in waiting.iter().enumerate() {
            let client = &mut self.clients[*index];
            let slot = if order < QUEUE_CAPACITY {
                Some(slots[order])
            } else {
                None
            };
            if client.outside_slot != slot {
                client.outside_slot = slot;
                if let Some(tile) = slot {
                    events.push(Clients::OutsideSlotAssigned {
                        id: client.id,
                        tile,
                    });
                }
            }
        }
        events
    }

    /// The waiting-outside client currently entitled to enter: the one
    /// closest to the door center.
    pub(crate) fn front_of_line(&self, map: &WorldMap, restaurant: Restaurant) -> Option<usize> {
        let door = map.street_door(restaurant).center();
        self.clients
            .iter()
            .enumerate()
            .filter(|(_, client)| {
                client.zone == ZoneId::Street
                    && client.target == Some(restaurant)
                    && client.state == ClientState::WaitingOutside
            })
            .min_by(|(_, a), (_, b)| {
                a.position.distance(door).total_cmp(&b.position.distance(door))
            })
            .map(|(index, _)| index)
    }
}
