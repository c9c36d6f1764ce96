//! Treasure spaces and post-battle reward pools.

use tracing::debug;

use super::engine::{ensure_in_play, ensure_phase, unchanged_on_error};
use crate::core::{ActionRecord, CardId, EngineError, GameAction, GamePhase, GameState};

/// Draw one card for landing on a reward space.
#[must_use]
pub fn collect_reward(state: &GameState) -> GameState {
    unchanged_on_error(state, try_collect_reward(state))
}

/// Fallible form of [`collect_reward`].
pub fn try_collect_reward(state: &GameState) -> Result<GameState, EngineError> {
    ensure_in_play(state)?;
    ensure_phase(state, GamePhase::Reward)?;

    let mut next = state.clone();
    next.message = match next.piles.draw_to_hand(&mut next.rng) {
        Some(card) => format!("You drew {}! Choose your next move.", card.name),
        None => "No cards to draw. Choose your next move.".to_string(),
    };
    next.phase = GamePhase::Movement;
    next.record_action(ActionRecord::new(GameAction::CollectReward, next.turn_number));
    Ok(next)
}

/// Keep `card_id` from the battle reward pool.
///
/// The unchosen cards are shuffled back into the draw pile. An id that is
/// not in the pool behaves like [`skip_battle_reward`].
#[must_use]
pub fn collect_battle_reward(state: &GameState, card_id: CardId) -> GameState {
    unchanged_on_error(state, try_collect_battle_reward(state, card_id))
}

/// Fallible form of [`collect_battle_reward`].
pub fn try_collect_battle_reward(
    state: &GameState,
    card_id: CardId,
) -> Result<GameState, EngineError> {
    ensure_in_play(state)?;
    ensure_phase(state, GamePhase::BattleReward)?;

    let mut next = state.clone();
    next.message = match next.piles.take_reward(card_id, &mut next.rng) {
        Some(card) => format!("You chose {}! Choose your next move.", card.name),
        None => {
            debug!(card = %card_id, "chosen card is not in the reward pool; skipping");
            "Reward skipped. Choose your next move.".to_string()
        }
    };
    next.phase = GamePhase::Movement;
    next.record_action(ActionRecord::new(
        GameAction::TakeBattleReward { card: card_id },
        next.turn_number,
    ));
    Ok(next)
}

/// Decline the battle reward pool.
#[must_use]
pub fn skip_battle_reward(state: &GameState) -> GameState {
    unchanged_on_error(state, try_skip_battle_reward(state))
}

/// Fallible form of [`skip_battle_reward`].
pub fn try_skip_battle_reward(state: &GameState) -> Result<GameState, EngineError> {
    ensure_in_play(state)?;
    ensure_phase(state, GamePhase::BattleReward)?;

    let mut next = state.clone();
    next.piles.return_rewards(&mut next.rng);
    next.phase = GamePhase::Movement;
    next.message = "Reward skipped. Choose your next move.".to_string();
    next.record_action(ActionRecord::new(GameAction::SkipBattleReward, next.turn_number));
    Ok(next)
}
