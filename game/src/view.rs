use serde::Serialize;

use crate::domains::clients::{ClientId, ClientState};
use crate::domains::equipment::Equipment;
use crate::domains::map::ZoneId;
use crate::domains::weapons::{WeaponId, WeaponKind};
use crate::math::Position;
use crate::model::PlayerId;
use crate::Game;

/// Read-only per-tick snapshots for the rendering layer. Nothing here
/// can mutate the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub time: f32,
    pub time_left: f32,
    pub game_over: bool,
    pub clients: Vec<ClientView>,
    pub players: Vec<PlayerView>,
    pub weapons: Vec<WeaponView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientView {
    pub id: ClientId,
    pub zone: ZoneId,
    pub position: Position,
    pub state: ClientState,
    pub dish: &'static str,
    pub absurd_request: &'static str,
    pub wobble: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub zone: ZoneId,
    pub position: Position,
    pub money: i32,
    pub reputation: i32,
    pub weapon: Option<(WeaponKind, u8)>,
    pub equipment: Vec<Equipment>,
    pub stock: Vec<(String, u32)>,
    pub challenge: Option<ChallengeView>,
    pub serving: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChallengeView {
    pub sequence: Vec<char>,
    pub step: usize,
    pub remaining: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponView {
    pub id: WeaponId,
    pub kind: WeaponKind,
    pub zone: ZoneId,
    pub position: Position,
}

impl Game {
    pub fn snapshot(&self) -> GameView {
        let now = self.time;
        GameView {
            time: now,
            time_left: self.time_left(),
            game_over: self.game_over,
            clients: self
                .clients
                .clients
                .iter()
                .map(|client| ClientView {
                    id: client.id,
                    zone: client.zone,
                    position: client.position,
                    state: client.state,
                    dish: client.dish.name(),
                    absurd_request: client.absurd_request,
                    wobble: client.wobble,
                })
                .collect(),
            players: self
                .players
                .iter()
                .map(|player| PlayerView {
                    id: player.id,
                    zone: player.zone,
                    position: player.position,
                    money: player.money,
                    reputation: player.reputation,
                    weapon: player.inventory.weapon(),
                    equipment: player.equipment.items().to_vec(),
                    stock: player
                        .stock
                        .ingredients
                        .iter()
                        .map(|ing| (ing.name.clone(), ing.quantity))
                        .collect(),
                    challenge: player.minigame.as_ref().map(|minigame| ChallengeView {
                        sequence: minigame.sequence.clone(),
                        step: minigame.step,
                        remaining: minigame.remaining(now),
                    }),
                    serving: player.serving.is_some(),
                })
                .collect(),
            weapons: self
                .weapons
                .weapons
                .iter()
                .filter(|weapon| !weapon.picked_up)
                .map(|weapon| WeaponView {
                    id: weapon.id,
                    kind: weapon.kind,
                    zone: weapon.zone,
                    position: weapon.position,
                })
                .collect(),
        }
    }
}
