use rand::Rng;
use serde::{Deserialize, Serialize};

pub const INCIDENT_INTERVAL: f32 = 60.0;
pub const INCIDENT_CHANCE: f64 = 0.3;
pub const INSPECTION_FINE: i32 = 100;
pub const INSPECTION_REPUTATION_PENALTY: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentKind {
    HealthInspection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Incidents {
    IncidentTriggered { kind: IncidentKind },
    PlayerFined { player: usize, fine: i32 },
}

/// Ambient city events rolled on a fixed interval. The effects themselves
/// are applied by the orchestrator, which owns the players.
pub struct IncidentsDomain {
    last_roll: f32,
}

impl IncidentsDomain {
    pub fn new() -> Self {
        Self { last_roll: 0.0 }
    }

    /// At most one incident per roll window.
    pub fn update(&mut self, now: f32, rng: &mut impl Rng) -> Option<IncidentKind> {
        if now - self.last_roll <= INCIDENT_INTERVAL {
            return None;
        }
        self.last_roll = now;
        if rng.gen_bool(INCIDENT_CHANCE) {
            Some(IncidentKind::HealthInspection)
        } else {
            None
        }
    }
}

impl Default for IncidentsDomain {
    fn default() -> Self {
        Self::new()
    }
}
