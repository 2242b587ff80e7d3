use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::domains::map::ZoneId;
use crate::math::{Position, Tile, TileCenter, TILE_SIZE};

pub const WEAPON_DESPAWN_AFTER: f32 = 30.0;
pub const WEAPON_SPAWN_INTERVAL: f32 = 10.0;
pub const MAX_WEAPONS: usize = 4;
pub const MAX_WEAPON_USES: u8 = 3;
pub const PICKUP_RANGE: f32 = TILE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Knife,
    Fork,
}

impl WeaponKind {
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Knife => "Couteau",
            WeaponKind::Fork => "Fourchette",
        }
    }

    pub fn range(self) -> f32 {
        match self {
            WeaponKind::Knife => TILE_SIZE * 1.5,
            WeaponKind::Fork => TILE_SIZE * 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub kind: WeaponKind,
    pub position: Position,
    pub zone: ZoneId,
    pub picked_up: bool,
    pub spawn_time: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Weapons {
    WeaponAppeared {
        id: WeaponId,
        kind: WeaponKind,
        zone: ZoneId,
        position: Position,
    },
    WeaponVanished {
        id: WeaponId,
    },
    WeaponPickedUp {
        id: WeaponId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeaponsError {
    WeaponNotFound { id: WeaponId },
    HandsFull,
    NoWeapon,
}

/// The weapon held by one player. Exclusive ownership, capped uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInventory {
    weapon: Option<WeaponKind>,
    uses: u8,
}

impl PlayerInventory {
    pub fn pickup(&mut self, kind: WeaponKind) -> Result<(), WeaponsError> {
        if self.weapon.is_some() {
            return Err(WeaponsError::HandsFull);
        }
        self.weapon = Some(kind);
        self.uses = MAX_WEAPON_USES;
        Ok(())
    }

    /// Consumes one use; the weapon is destroyed on the last one.
    pub fn use_weapon(&mut self) -> Result<WeaponKind, WeaponsError> {
        let kind = self.weapon.ok_or(WeaponsError::NoWeapon)?;
        self.uses -= 1;
        if self.uses == 0 {
            self.weapon = None;
        }
        Ok(kind)
    }

    pub fn weapon(&self) -> Option<(WeaponKind, u8)> {
        self.weapon.map(|kind| (kind, self.uses))
    }

    pub fn has_weapon(&self) -> bool {
        self.weapon.is_some()
    }
}

struct SpawnZone {
    zone: ZoneId,
    points: Vec<Tile>,
    spawns: usize,
}

/// Drops knives and forks on fixed map points, rotating fairly over the
/// zone with the fewest spawns so far.
pub struct WeaponsDomain {
    pub weapons: Vec<Weapon>,
    weapons_id: Sequence,
    last_spawn: f32,
    spawn_zones: Vec<SpawnZone>,
}

impl WeaponsDomain {
    pub fn new() -> Self {
        let spawn_points = vec![[3, 5], [7, 3], [5, 6]];
        Self {
            weapons: vec![],
            weapons_id: Sequence::default(),
            last_spawn: 0.0,
            spawn_zones: vec![
                SpawnZone {
                    zone: ZoneId::Tacos,
                    points: spawn_points.clone(),
                    spawns: 0,
                },
                SpawnZone {
                    zone: ZoneId::Kebab,
                    points: spawn_points,
                    spawns: 0,
                },
                SpawnZone {
                    zone: ZoneId::Street,
                    points: vec![[5, 4], [9, 4], [7, 6]],
                    spawns: 0,
                },
            ],
        }
    }

    pub fn update(&mut self, now: f32, rng: &mut impl Rng) -> Vec<Weapons> {
        let mut events = vec![];
        self.weapons.retain(|weapon| {
            let expired = now - weapon.spawn_time > WEAPON_DESPAWN_AFTER;
            if expired || weapon.picked_up {
                if expired && !weapon.picked_up {
                    events.push(Weapons::WeaponVanished { id: weapon.id });
                }
                return false;
            }
            true
        });
        if now - self.last_spawn > WEAPON_SPAWN_INTERVAL {
            if self.weapons.len() < MAX_WEAPONS {
                events.push(self.spawn_weapon(now, rng));
            }
            self.last_spawn = now;
        }
        events
    }

    fn spawn_weapon(&mut self, now: f32, rng: &mut impl Rng) -> Weapons {
        let fewest = self
            .spawn_zones
            .iter()
            .map(|zone| zone.spawns)
            .min()
            .unwrap_or(0);
        let candidates: Vec<usize> = self
            .spawn_zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| zone.spawns == fewest)
            .map(|(index, _)| index)
            .collect();
        let chosen = candidates[rng.gen_range(0..candidates.len())];
        let spawn_zone = &mut self.spawn_zones[chosen];
        spawn_zone.spawns += 1;
        let point = spawn_zone.points[rng.gen_range(0..spawn_zone.points.len())];
        let kind = if rng.gen_bool(0.5) {
            WeaponKind::Knife
        } else {
            WeaponKind::Fork
        };
        let weapon = Weapon {
            id: self.weapons_id.one(WeaponId),
            kind,
            position: point.center(),
            zone: spawn_zone.zone,
            picked_up: false,
            spawn_time: now,
        };
        info!("Weapon {:?} appeared in {:?}", kind, weapon.zone);
        let event = Weapons::WeaponAppeared {
            id: weapon.id,
            kind: weapon.kind,
            zone: weapon.zone,
            position: weapon.position,
        };
        self.weapons.push(weapon);
        event
    }

    pub fn weapons_in_zone(&self, zone: ZoneId) -> impl Iterator<Item = &Weapon> {
        self.weapons
            .iter()
            .filter(move |weapon| weapon.zone == zone && !weapon.picked_up)
    }

    /// The closest weapon lying within pickup range of the position.
    pub fn find_pickup(&self, position: Position, zone: ZoneId) -> Option<WeaponId> {
        use crate::math::VectorMath;
        self.weapons_in_zone(zone)
            .filter(|weapon| weapon.position.distance(position) <= PICKUP_RANGE)
            .min_by(|a, b| {
                a.position
                    .distance(position)
                    .total_cmp(&b.position.distance(position))
            })
            .map(|weapon| weapon.id)
    }

    pub fn take_weapon(&mut self, id: WeaponId) -> Result<WeaponKind, WeaponsError> {
        let weapon = self
            .weapons
            .iter_mut()
            .find(|weapon| weapon.id == id && !weapon.picked_up)
            .ok_or(WeaponsError::WeaponNotFound { id })?;
        weapon.picked_up = true;
        Ok(weapon.kind)
    }
}

impl Default for WeaponsDomain {
    fn default() -> Self {
        Self::new()
    }
}
