use crate::api::{ActionError, Event};
use crate::domains::clients::{Clients, ClientState};
use crate::math::{VectorMath, TILE_SIZE};
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

pub const SWEEP_RANGE: f32 = TILE_SIZE * 2.0;
pub const SWEEP_INTENSITY: f32 = 1.5;

impl Game {
    /// Broom swing. Frightens every client around the player; a client
    /// over the fear threshold bolts for the edge of the screen.
    pub(crate) fn sweep(&mut self, id: PlayerId) -> Result<Vec<Event>, ActionError> {
        let now = self.time;
        let player = self.player(id)?;
        let zone = player.zone;
        let position = player.position;
        let mut events = vec![];
        for client in self.clients.clients.iter_mut() {
            if client.zone != zone || client.position.distance(position) > SWEEP_RANGE {
                continue;
            }
            if client.scare(SWEEP_INTENSITY, now) {
                events.push(Clients::ClientStateChanged {
                    id: client.id,
                    state: ClientState::Fleeing,
                });
            }
        }
        Ok(occur![events])
    }
}
