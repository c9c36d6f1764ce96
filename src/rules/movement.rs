//! Movement: target resolution and playing a card's side A.
//!
//! Targets follow the path graph. A `MoveSteps(n)` card offers only the
//! nodes at `current_step + n` that are actually connected to the current
//! node, not every node at that step.

use tracing::info;

use super::enemies::{boss_battle, enemy_for_step};
use super::engine::{ensure_in_play, ensure_phase, unchanged_on_error};
use crate::cards::{Card, CardEffect};
use crate::core::{ActionRecord, CardId, EngineError, GameAction, GamePhase, GameState, NodeId};
use crate::path::{SpaceType, BOSS_STEP};

/// Nodes the player may move to by playing `card` for its side A.
///
/// Ordered by step, then branch index. Empty on the boss node.
#[must_use]
pub fn resolve_movement_targets(card: &Card, state: &GameState) -> Vec<NodeId> {
    match card.side_a {
        CardEffect::MoveSteps(n) => steps_ahead(state, n),
        CardEffect::JumpToNextReward => {
            nearest_rewards(state).unwrap_or_else(|| steps_ahead(state, 1))
        }
        // Not a movement effect: creep forward one step.
        _ => steps_ahead(state, 1),
    }
}

fn steps_ahead(state: &GameState, steps: u8) -> Vec<NodeId> {
    let target = state.current_step.saturating_add(steps).min(BOSS_STEP);
    state.path.reachable_at_step(state.current_node, target)
}

/// Reachable reward nodes at the closest step that has any.
fn nearest_rewards(state: &GameState) -> Option<Vec<NodeId>> {
    let mut frontier = vec![state.current_node];
    for _ in state.current_step..BOSS_STEP {
        frontier = state.path.advance(&frontier);
        if frontier.is_empty() {
            break;
        }
        let rewards: Vec<NodeId> = frontier
            .iter()
            .copied()
            .filter(|&id| {
                state
                    .path
                    .get(id)
                    .is_some_and(|n| n.space_type == SpaceType::Reward)
            })
            .collect();
        if !rewards.is_empty() {
            return Some(rewards);
        }
    }
    None
}

/// Play `card_id` for movement and land on `destination`.
///
/// Returns `state` unchanged if the move is rejected.
#[must_use]
pub fn play_card_for_movement(state: &GameState, card_id: CardId, destination: NodeId) -> GameState {
    unchanged_on_error(
        state,
        try_play_card_for_movement(state, card_id, destination),
    )
}

/// Fallible form of [`play_card_for_movement`].
pub fn try_play_card_for_movement(
    state: &GameState,
    card_id: CardId,
    destination: NodeId,
) -> Result<GameState, EngineError> {
    ensure_in_play(state)?;
    ensure_phase(state, GamePhase::Movement)?;
    if state.piles.find_in_hand(card_id).is_none() {
        return Err(EngineError::CardNotInHand(card_id));
    }
    let (step, space_type) = state
        .path
        .get(destination)
        .map(|node| (node.step, node.space_type))
        .ok_or(EngineError::UnknownNode(destination))?;

    let mut next = state.clone();
    next.piles
        .discard_from_hand(card_id)
        .ok_or(EngineError::CardNotInHand(card_id))?;
    next.turn_number += 1;

    next.path.mark_visited(state.current_node);
    next.path.mark_visited(destination);
    next.current_node = destination;
    next.current_step = step;

    match space_type {
        SpaceType::Battle => {
            let battle = enemy_for_step(step);
            info!(enemy = %battle.enemy_name, step, "battle started");
            next.message = format!("A {} blocks your path!", battle.enemy_name);
            next.active_battle = Some(battle);
            next.phase = GamePhase::Battle;
        }
        SpaceType::Reward => {
            next.phase = GamePhase::Reward;
            next.message = "You found a treasure!".to_string();
        }
        SpaceType::Boss => {
            let battle = boss_battle();
            info!(enemy = %battle.enemy_name, "boss fight started");
            next.message = format!("The {} awaits!", battle.enemy_name);
            next.active_battle = Some(battle);
            next.phase = GamePhase::BossFight;
        }
        SpaceType::Start => {}
    }

    if next.piles.hand.is_empty() && next.phase.is_combat() {
        info!("out of cards on entering a fight");
        next.phase = GamePhase::GameOver { won: false };
        next.message = "You have no cards left!".to_string();
    }

    next.record_action(ActionRecord::new(
        GameAction::Move {
            card: card_id,
            destination,
        },
        next.turn_number,
    ));
    Ok(next)
}
