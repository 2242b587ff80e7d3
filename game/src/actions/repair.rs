use crate::api::{ActionError, Event};
use crate::domains::equipment::EquipmentKey;
use crate::model::{PlayerId, Players};
use crate::occur;
use crate::Game;

pub const REPAIR_COST: i32 = 25;

impl Game {
    pub(crate) fn repair(
        &mut self,
        id: PlayerId,
        equipment: EquipmentKey,
    ) -> Result<Vec<Event>, ActionError> {
        let player = self.player_mut(id)?;
        if !player.equipment.is_broken(equipment) {
            return Err(ActionError::NothingToRepair { equipment });
        }
        if player.money < REPAIR_COST {
            return Err(ActionError::NotEnoughMoney {
                required: REPAIR_COST,
            });
        }
        let change = player.equipment.repair(equipment);
        let money = player.add_money(-REPAIR_COST);
        Ok(occur![
            Players::EquipmentChanged { player: id, change },
            money,
        ])
    }
}
