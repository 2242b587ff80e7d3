use rand::thread_rng;

use crate::api::{ActionError, Event};
use crate::domains::minigame::{MiniGame, Minigame};
use crate::math::{VectorMath, TILE_SIZE};
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

pub const INTERACT_RANGE: f32 = TILE_SIZE * 2.0;

impl Game {
    /// Picks the closest servable client of the player's own restaurant
    /// and starts the preparation challenge for their dish.
    pub(crate) fn interact(&mut self, id: PlayerId) -> Result<Vec<Event>, ActionError> {
        let now = self.time;
        let player = self.player(id)?;
        if player.minigame.is_some() {
            return Err(ActionError::MinigameAlreadyActive);
        }
        if player.serving.is_some() {
            return Err(ActionError::ServiceInProgress);
        }
        let zone = player.zone;
        let position = player.position;
        let restaurant = player.restaurant;
        let (client, dish) = self
            .clients
            .clients
            .iter()
            .filter(|client| {
                client.zone == zone
                    && client.target == Some(restaurant)
                    && client.is_servable()
                    && client.position.distance(position) <= INTERACT_RANGE
            })
            .min_by(|a, b| {
                a.position
                    .distance(position)
                    .total_cmp(&b.position.distance(position))
            })
            .map(|client| (client.id, client.dish))
            .ok_or(ActionError::NoClientNearby)?;
        let mut rng = thread_rng();
        let minigame = MiniGame::new(id.0, dish, now, &mut rng);
        let events = occur![Minigame::ChallengeStarted {
            player: id.0,
            dish,
            sequence: minigame.sequence.clone(),
        }];
        let player = self.player_mut(id)?;
        player.minigame = Some(minigame);
        player.current_client = Some(client);
        player.velocity = [0.0, 0.0];
        Ok(events)
    }
}
