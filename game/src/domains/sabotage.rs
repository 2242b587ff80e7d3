use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domains::equipment::EquipmentKey;
use crate::domains::stock::SPIT_THEFT_DURATION;
use crate::math::TILE_SIZE;

/// Proximity-gated sabotages must be executed within roughly two tiles.
pub const SABOTAGE_RANGE: f32 = TILE_SIZE * 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SabotageKey {
    BreakFryer,
    Rumor,
    FakeMenu,
    Inspection,
    StealSpit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SabotageEffect {
    BreakEquipment(EquipmentKey),
    Reputation(i32),
    StealSpit { duration: f32 },
    /// Immediate suspicion hit; the fine itself only lands if the
    /// target's toilets fail the inspection roll.
    TriggerInspection { suspicion: i32 },
}

/// Stateless rule object; the per-kind `last_used` instance state lives on
/// the domain and is shared by both players.
#[derive(Debug, Clone)]
pub struct SabotageKind {
    pub key: SabotageKey,
    pub name: &'static str,
    pub cost: i32,
    pub cooldown: f32,
    pub requires_proximity: bool,
    pub effect: SabotageEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sabotage {
    SabotageExecuted {
        key: SabotageKey,
        executor: usize,
        target: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SabotageError {
    CooldownActive { key: SabotageKey, remaining: f32 },
    NotEnoughMoney { key: SabotageKey, required: i32 },
    TooFarFromTarget { key: SabotageKey },
}

pub struct SabotageDomain {
    catalog: Vec<SabotageKind>,
    // one timestamp per kind, not per player: a used sabotage cools down
    // for the rival too
    last_used: HashMap<SabotageKey, f32>,
}

impl SabotageDomain {
    pub fn new() -> Self {
        let catalog = vec![
            SabotageKind {
                key: SabotageKey::BreakFryer,
                name: "Casse Friteuse",
                cost: 50,
                cooldown: 45.0,
                requires_proximity: false,
                effect: SabotageEffect::BreakEquipment(EquipmentKey::Fryer),
            },
            SabotageKind {
                key: SabotageKey::Rumor,
                name: "Lancer Rumeur",
                cost: 30,
                cooldown: 30.0,
                requires_proximity: false,
                effect: SabotageEffect::Reputation(-15),
            },
            SabotageKind {
                key: SabotageKey::FakeMenu,
                name: "Falsifier Carte",
                cost: 40,
                cooldown: 40.0,
                requires_proximity: false,
                effect: SabotageEffect::BreakEquipment(EquipmentKey::Menu),
            },
            SabotageKind {
                key: SabotageKey::Inspection,
                name: "Contrôle Hygiène",
                cost: 80,
                cooldown: 90.0,
                requires_proximity: false,
                effect: SabotageEffect::TriggerInspection { suspicion: -5 },
            },
            SabotageKind {
                key: SabotageKey::StealSpit,
                name: "Vol de Broche",
                cost: 60,
                cooldown: 60.0,
                requires_proximity: true,
                effect: SabotageEffect::StealSpit {
                    duration: SPIT_THEFT_DURATION,
                },
            },
        ];
        Self {
            catalog,
            last_used: HashMap::new(),
        }
    }

    pub fn kind(&self, key: SabotageKey) -> &SabotageKind {
        self.catalog
            .iter()
            .find(|kind| kind.key == key)
            .expect("catalog covers every sabotage key")
    }

    pub fn catalog(&self) -> &[SabotageKind] {
        &self.catalog
    }

    pub fn cooldown_remaining(&self, key: SabotageKey, now: f32) -> f32 {
        let kind = self.kind(key);
        match self.last_used.get(&key) {
            Some(used) => (used + kind.cooldown - now).max(0.0),
            None => 0.0,
        }
    }

    pub fn ensure_ready(&self, key: SabotageKey, now: f32) -> Result<(), SabotageError> {
        let remaining = self.cooldown_remaining(key, now);
        if remaining > 0.0 {
            return Err(SabotageError::CooldownActive { key, remaining });
        }
        Ok(())
    }

    pub fn mark_used(&mut self, key: SabotageKey, now: f32) {
        self.last_used.insert(key, now);
    }
}

impl Default for SabotageDomain {
    fn default() -> Self {
        Self::new()
    }
}
