use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domains::stock::Dish;

pub const MINIGAME_DURATION: f32 = 5.0;

/// Each player owns a disjoint key set so the rival's mashing never
/// interferes with a running challenge.
pub const PLAYER_KEY_SETS: [[char; 4]; 2] = [['1', '2', '3', '4'], ['7', '8', '9', '0']];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Minigame {
    ChallengeStarted {
        player: usize,
        dish: Dish,
        sequence: Vec<char>,
    },
    StepAdvanced {
        player: usize,
        step: usize,
    },
    ProgressReset {
        player: usize,
    },
    ChallengeCompleted {
        player: usize,
        success: bool,
    },
}

/// Timed key-sequence challenge gating a service. The per-player key set
/// is shuffled for every challenge; a wrong key from the player's own set
/// resets progress, keys outside the set are ignored. Expiry fails it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniGame {
    pub player: usize,
    pub dish: Dish,
    pub sequence: Vec<char>,
    pub step: usize,
    pub started: f32,
    pub duration: f32,
    pub completed: bool,
    pub success: bool,
}

impl MiniGame {
    pub fn new(player: usize, dish: Dish, now: f32, rng: &mut impl Rng) -> Self {
        let mut sequence = PLAYER_KEY_SETS[player % 2].to_vec();
        sequence.shuffle(rng);
        Self {
            player,
            dish,
            sequence,
            step: 0,
            started: now,
            duration: MINIGAME_DURATION,
            completed: false,
            success: false,
        }
    }

    pub fn press(&mut self, key: char) -> Vec<Minigame> {
        if self.completed || !self.sequence.contains(&key) {
            return vec![];
        }
        if key == self.sequence[self.step] {
            self.step += 1;
            if self.step >= self.sequence.len() {
                self.success = true;
                self.completed = true;
                return vec![Minigame::ChallengeCompleted {
                    player: self.player,
                    success: true,
                }];
            }
            vec![Minigame::StepAdvanced {
                player: self.player,
                step: self.step,
            }]
        } else {
            self.step = 0;
            vec![Minigame::ProgressReset {
                player: self.player,
            }]
        }
    }

    pub fn update(&mut self, now: f32) -> Vec<Minigame> {
        if self.completed {
            return vec![];
        }
        if now - self.started > self.duration {
            self.success = false;
            self.completed = true;
            return vec![Minigame::ChallengeCompleted {
                player: self.player,
                success: false,
            }];
        }
        vec![]
    }

    pub fn remaining(&self, now: f32) -> f32 {
        (self.duration - (now - self.started)).max(0.0)
    }
}
