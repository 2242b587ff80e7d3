use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domains::map::Restaurant;
use crate::model::PlayerId;
use crate::Game;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub restaurant: Restaurant,
    pub money: i32,
    pub reputation: i32,
    pub clients_served: usize,
    pub clients_lost: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub duration: f32,
    pub winner: Option<usize>,
    pub players: Vec<PlayerResult>,
}

pub fn record(game: &Game, winner: Option<PlayerId>) -> MatchRecord {
    MatchRecord {
        duration: game.time,
        winner: winner.map(|id| id.0),
        players: game
            .players
            .iter()
            .map(|player| PlayerResult {
                restaurant: player.restaurant,
                money: player.money,
                reputation: player.reputation,
                clients_served: player.clients_served,
                clients_lost: player.clients_lost,
            })
            .collect(),
    }
}

/// Appends the finished match as one JSON line.
pub fn append(path: &Path, record: &MatchRecord) -> std::io::Result<()> {
    let line = serde_json::to_string(record)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
