use crate::api::{ActionError, Event};
use crate::domains::stock::Stock;
use crate::model::PlayerId;
use crate::occur;
use crate::Game;

impl Game {
    /// Refills one ingredient, or the whole pantry when none is named.
    /// The money check happens before any quantity changes.
    pub(crate) fn restock(
        &mut self,
        id: PlayerId,
        ingredient: Option<String>,
    ) -> Result<Vec<Event>, ActionError> {
        let player = self.player_mut(id)?;
        let restaurant = player.restaurant;
        match ingredient {
            Some(name) => {
                let (_, cost) = player.stock.restock_cost(&name)?;
                if player.money < cost {
                    return Err(ActionError::NotEnoughMoney { required: cost });
                }
                let (amount, cost) = player.stock.restock(&name, None)?;
                let money = player.add_money(-cost);
                Ok(occur![
                    Stock::IngredientRestocked {
                        restaurant,
                        name,
                        amount,
                        cost,
                    },
                    money,
                ])
            }
            None => {
                let total = player.stock.restock_all_cost();
                if player.money < total {
                    return Err(ActionError::NotEnoughMoney { required: total });
                }
                let mut events = vec![];
                for (name, amount, cost) in player.stock.restock_all() {
                    events.push(
                        Stock::IngredientRestocked {
                            restaurant,
                            name,
                            amount,
                            cost,
                        }
                        .into(),
                    );
                }
                events.push(player.add_money(-total).into());
                Ok(events)
            }
        }
    }
}
