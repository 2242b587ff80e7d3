use crate::api::{ActionError, Event};
use crate::math::VectorMath;
use crate::model::{PlayerId, PLAYER_SPEED};
use crate::Game;

impl Game {
    /// Sets the walking intent; movement itself happens in the update pass
    /// where walls and doors are resolved. Ignored during a challenge.
    pub(crate) fn move_player(
        &mut self,
        id: PlayerId,
        direction: [f32; 2],
    ) -> Result<Vec<Event>, ActionError> {
        let player = self.player_mut(id)?;
        if player.minigame.is_some() {
            player.velocity = [0.0, 0.0];
            return Ok(vec![]);
        }
        player.velocity = if direction.length() > 0.0 {
            direction.normalize().mul(PLAYER_SPEED)
        } else {
            [0.0, 0.0]
        };
        Ok(vec![])
    }
}
