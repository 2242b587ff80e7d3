use log::info;
use rand::{thread_rng, Rng};

use crate::api::{ActionError, Event};
use crate::domains::animation::AnimationKind;
use crate::domains::incidents::{IncidentKind, Incidents};
use crate::domains::sabotage::{Sabotage, SabotageEffect, SabotageError, SabotageKey, SABOTAGE_RANGE};
use crate::domains::stock::Stock;
use crate::math::VectorMath;
use crate::model::{PlayerId, Players};
use crate::Game;

const STEAL_SPIT_ANIMATION: f32 = 1.0;

impl Game {
    /// Dirty tricks against the rival. Preconditions are checked in a
    /// fixed order: cooldown, then money, then proximity.
    pub(crate) fn execute_sabotage(
        &mut self,
        id: PlayerId,
        key: SabotageKey,
    ) -> Result<Vec<Event>, ActionError> {
        let now = self.time;
        let kind = self.sabotages.kind(key).clone();
        self.sabotages.ensure_ready(key, now)?;
        let player = self.player(id)?;
        if player.money < kind.cost {
            return Err(SabotageError::NotEnoughMoney {
                key,
                required: kind.cost,
            }
            .into());
        }
        let rival = self.rival_of(id);
        let executor_position = player.position;
        let executor_zone = player.zone;
        if kind.requires_proximity {
            let target = &self.players[rival];
            let near = target.zone == executor_zone
                && target.position.distance(executor_position) <= SABOTAGE_RANGE;
            if !near {
                return Err(SabotageError::TooFarFromTarget { key }.into());
            }
        }

        self.sabotages.mark_used(key, now);
        let mut events = vec![];
        events.push(self.players[id.0].add_money(-kind.cost).into());
        match kind.effect {
            SabotageEffect::BreakEquipment(equipment) => {
                let target = &mut self.players[rival];
                let change = target.equipment.break_one(equipment);
                events.push(
                    Players::EquipmentChanged {
                        player: target.id,
                        change,
                    }
                    .into(),
                );
            }
            SabotageEffect::Reputation(amount) => {
                let target = &mut self.players[rival];
                events.push(target.modify_reputation(amount).into());
            }
            SabotageEffect::StealSpit { duration } => {
                let target = &mut self.players[rival];
                target.stock.steal_spit(now, duration);
                let restaurant = target.restaurant;
                let target_position = target.position;
                events.push(
                    Stock::SpitStolen {
                        restaurant,
                        until: now + duration,
                    }
                    .into(),
                );
                events.push(
                    self.animations
                        .start(
                            AnimationKind::StealSpit {
                                thief: executor_position,
                                target: target_position,
                            },
                            now,
                            STEAL_SPIT_ANIMATION,
                        )
                        .into(),
                );
            }
            SabotageEffect::TriggerInspection { suspicion } => {
                events.push(self.players[rival].modify_reputation(suspicion).into());
                events.push(
                    Incidents::IncidentTriggered {
                        kind: IncidentKind::HealthInspection,
                    }
                    .into(),
                );
                let risk = self.players[rival].equipment.inspection_risk() as f64;
                if thread_rng().gen_bool(risk) {
                    events.extend(self.fine_player(rival));
                }
            }
        }
        info!("Player {:?} executed sabotage {}", id, kind.name);
        events.push(
            Sabotage::SabotageExecuted {
                key,
                executor: id.0,
                target: rival,
            }
            .into(),
        );
        Ok(events)
    }
}
