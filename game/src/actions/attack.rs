use log::info;

use crate::api::{ActionError, Event};
use crate::domains::animation::AnimationKind;
use crate::domains::clients::{Clients, ClientState};
use crate::domains::weapons::WeaponsError;
use crate::math::{Random, VectorMath};
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

const ATTACK_ANIMATION: f32 = 0.3;

impl Game {
    /// Stabs the closest servable client within weapon reach. One hit
    /// kills; the weapon loses a use and is destroyed on the last one.
    pub(crate) fn attack(&mut self, id: PlayerId) -> Result<Vec<Event>, ActionError> {
        let now = self.time;
        let player = self.player(id)?;
        let (weapon, _) = player.inventory.weapon().ok_or(WeaponsError::NoWeapon)?;
        let zone = player.zone;
        let position = player.position;
        let (victim, victim_position) = self
            .clients
            .clients
            .iter()
            .filter(|client| {
                client.zone == zone
                    && client.is_servable()
                    && client.position.distance(position) <= weapon.range()
            })
            .min_by(|a, b| {
                a.position
                    .distance(position)
                    .total_cmp(&b.position.distance(position))
            })
            .map(|client| (client.id, client.position))
            .ok_or(ActionError::NoTargetInRange)?;
        self.player_mut(id)?.inventory.use_weapon()?;
        let mut random = Random::new();
        let client = self.clients.get_client_mut(victim)?;
        client.take_damage(now, &mut random);
        info!("Player {:?} struck client {:?} with {:?}", id, victim, weapon);
        let animation = self.animations.start(
            AnimationKind::Attack {
                from: position,
                to: victim_position,
                weapon,
            },
            now,
            ATTACK_ANIMATION,
        );
        Ok(occur![
            Clients::ClientStateChanged {
                id: victim,
                state: ClientState::Dying,
            },
            animation,
        ])
    }
}
