use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKey {
    Fryer,
    Spit,
    Menu,
    Register,
    Toilets,
}

pub const EQUIPMENT_KEYS: [EquipmentKey; 5] = [
    EquipmentKey::Fryer,
    EquipmentKey::Spit,
    EquipmentKey::Menu,
    EquipmentKey::Register,
    EquipmentKey::Toilets,
];

impl EquipmentKey {
    pub fn name(self) -> &'static str {
        match self {
            EquipmentKey::Fryer => "friteuse",
            EquipmentKey::Spit => "broche",
            EquipmentKey::Menu => "menu",
            EquipmentKey::Register => "caisse",
            EquipmentKey::Toilets => "toilettes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub key: EquipmentKey,
    pub broken: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EquipmentChange {
    Broken { key: EquipmentKey },
    Repaired { key: EquipmentKey },
}

/// One of everything, per restaurant. Each kind maps to a penalty read by
/// gameplay logic elsewhere; only sabotage and repair flip the flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentSet {
    items: Vec<Equipment>,
}

impl EquipmentSet {
    pub fn new() -> Self {
        Self {
            items: EQUIPMENT_KEYS
                .iter()
                .map(|key| Equipment {
                    key: *key,
                    broken: false,
                })
                .collect(),
        }
    }

    pub fn get(&self, key: EquipmentKey) -> &Equipment {
        self.items
            .iter()
            .find(|item| item.key == key)
            .expect("every equipment kind is installed")
    }

    pub fn is_broken(&self, key: EquipmentKey) -> bool {
        self.get(key).broken
    }

    pub fn break_one(&mut self, key: EquipmentKey) -> EquipmentChange {
        self.set_broken(key, true);
        EquipmentChange::Broken { key }
    }

    pub fn repair(&mut self, key: EquipmentKey) -> EquipmentChange {
        self.set_broken(key, false);
        EquipmentChange::Repaired { key }
    }

    fn set_broken(&mut self, key: EquipmentKey, broken: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.key == key) {
            item.broken = broken;
        }
    }

    pub fn cooking_time_multiplier(&self) -> f32 {
        if self.is_broken(EquipmentKey::Fryer) {
            2.0
        } else {
            1.0
        }
    }

    pub fn quality_penalty(&self) -> i32 {
        if self.is_broken(EquipmentKey::Spit) {
            20
        } else {
            0
        }
    }

    pub fn spawn_rate_penalty(&self) -> f32 {
        if self.is_broken(EquipmentKey::Menu) {
            0.5
        } else {
            0.0
        }
    }

    pub fn money_loss_risk(&self) -> f32 {
        if self.is_broken(EquipmentKey::Register) {
            0.5
        } else {
            0.0
        }
    }

    pub fn inspection_risk(&self) -> f32 {
        if self.is_broken(EquipmentKey::Toilets) {
            0.3
        } else {
            0.05
        }
    }

    pub fn items(&self) -> &[Equipment] {
        &self.items
    }
}

impl Default for EquipmentSet {
    fn default() -> Self {
        Self::new()
    }
}
