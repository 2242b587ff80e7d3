use crate::api::{ActionError, Event};
use crate::domains::weapons::{Weapons, WeaponsError};
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

impl Game {
    pub(crate) fn pickup_weapon(&mut self, id: PlayerId) -> Result<Vec<Event>, ActionError> {
        let player = self.player(id)?;
        if player.inventory.has_weapon() {
            return Err(WeaponsError::HandsFull.into());
        }
        let weapon = self
            .weapons
            .find_pickup(player.position, player.zone)
            .ok_or(ActionError::NothingToPickUp)?;
        let kind = self.weapons.take_weapon(weapon)?;
        self.player_mut(id)?.inventory.pickup(kind)?;
        Ok(occur![Weapons::WeaponPickedUp { id: weapon }])
    }
}
