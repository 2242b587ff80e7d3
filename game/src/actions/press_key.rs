use crate::api::{ActionError, Event};
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

impl Game {
    /// Routes a key press into the player's own running challenge. With
    /// no challenge active the press is input noise, not an error.
    pub(crate) fn press_key(&mut self, id: PlayerId, key: char) -> Result<Vec<Event>, ActionError> {
        let player = self.player_mut(id)?;
        let minigame = match player.minigame.as_mut() {
            Some(minigame) => minigame,
            None => return Ok(vec![]),
        };
        let events = minigame.press(key);
        if events.is_empty() {
            return Ok(vec![]);
        }
        Ok(occur![events])
    }
}
