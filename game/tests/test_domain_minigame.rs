use rand::rngs::StdRng;
use rand::SeedableRng;

use game::minigame::{MiniGame, Minigame, MINIGAME_DURATION, PLAYER_KEY_SETS};
use game::stock::Dish;

fn challenge(player: usize) -> MiniGame {
    let mut rng = StdRng::seed_from_u64(42);
    MiniGame::new(player, Dish::TacosXxl, 0.0, &mut rng)
}

#[test]
fn test_sequence_uses_only_the_players_own_keys() {
    let minigame = challenge(0);
    assert_eq!(minigame.sequence.len(), 4);
    for key in &minigame.sequence {
        assert!(PLAYER_KEY_SETS[0].contains(key));
    }
}

#[test]
fn test_wrong_own_key_resets_progress_but_the_game_stays_winnable() {
    let mut minigame = challenge(0);
    let sequence = minigame.sequence.clone();

    assert_eq!(
        minigame.press(sequence[0]),
        vec![Minigame::StepAdvanced { player: 0, step: 1 }]
    );
    assert_eq!(
        minigame.press(sequence[2]),
        vec![Minigame::ProgressReset { player: 0 }]
    );
    assert_eq!(minigame.step, 0);

    let mut completed = vec![];
    for key in &sequence {
        completed = minigame.press(*key);
    }
    assert_eq!(
        completed,
        vec![Minigame::ChallengeCompleted {
            player: 0,
            success: true
        }]
    );
    assert!(minigame.success);
}

#[test]
fn test_rival_keys_are_ignored() {
    let mut minigame = challenge(0);
    let sequence = minigame.sequence.clone();
    minigame.press(sequence[0]);

    for key in PLAYER_KEY_SETS[1] {
        assert!(minigame.press(key).is_empty());
    }
    assert_eq!(minigame.step, 1);
}

#[test]
fn test_expiry_fails_the_challenge() {
    let mut minigame = challenge(1);
    assert!(minigame.update(MINIGAME_DURATION - 0.1).is_empty());

    let events = minigame.update(MINIGAME_DURATION + 0.1);
    assert_eq!(
        events,
        vec![Minigame::ChallengeCompleted {
            player: 1,
            success: false
        }]
    );
    assert!(minigame.completed);
    assert!(!minigame.success);

    // a dead challenge swallows further input
    let key = minigame.sequence[0];
    assert!(minigame.press(key).is_empty());
}
