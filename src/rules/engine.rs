//! Run setup and the action-level entry points.
//!
//! ## Operations
//!
//! Every engine operation takes `&GameState` and returns a new `GameState`.
//! Each has a `try_*` form that reports why it was rejected; the plain form
//! logs the rejection and hands back an unchanged clone.
//!
//! ## Actions
//!
//! [`legal_actions`] enumerates every [`GameAction`] the current phase
//! accepts and [`apply_action`] dispatches one. Together they let a holder
//! drive a whole run without knowing the individual operations:
//!
//! ```
//! use card_quest::cards::DECK_SIZE;
//! use card_quest::rules::{apply_action, legal_actions, new_game_seeded};
//!
//! let mut state = new_game_seeded(7);
//! while let Some(action) = legal_actions(&state).into_iter().next() {
//!     state = apply_action(&state, &action);
//! }
//! assert_eq!(state.card_count(), DECK_SIZE);
//! let played = state.history.iter().filter(|r| r.action.plays_card()).count();
//! assert_eq!(played, state.turn_number as usize);
//! ```

use im::Vector;
use tracing::{debug, info};

use super::combat::try_play_card_for_combat;
use super::movement::{resolve_movement_targets, try_play_card_for_movement};
use super::rewards::{try_collect_battle_reward, try_collect_reward, try_skip_battle_reward};
use crate::cards::make_deck;
use crate::core::{
    EngineError, GameAction, GameOutcome, GamePhase, GameRng, GameState, IdAllocator, RunConfig,
};
use crate::path::PathGraph;
use crate::zones::CardPiles;

/// Start a run with default settings and an entropy seed.
#[must_use]
pub fn new_game() -> GameState {
    build_game(RunConfig::default(), GameRng::from_entropy())
}

/// Start a reproducible run with default settings.
#[must_use]
pub fn new_game_seeded(seed: u64) -> GameState {
    build_game(RunConfig::default(), GameRng::new(seed))
}

/// Start a reproducible run with custom settings.
pub fn new_game_with_config(config: &RunConfig, seed: u64) -> Result<GameState, EngineError> {
    config.validate()?;
    Ok(build_game(*config, GameRng::new(seed)))
}

fn build_game(config: RunConfig, mut rng: GameRng) -> GameState {
    let mut path = PathGraph::generate(config.topology);
    let start = path.start();
    path.mark_visited(start);

    let mut deck = make_deck(&mut IdAllocator::new());
    rng.shuffle(&mut deck);
    let piles = CardPiles::deal(deck, config.hand_size);

    info!(seed = rng.seed(), topology = ?config.topology, "new run");

    GameState {
        path,
        current_node: start,
        current_step: 0,
        piles,
        player_hp: config.starting_hp,
        player_max_hp: config.starting_hp,
        phase: GamePhase::Movement,
        active_battle: None,
        turn_number: 0,
        message: "Choose a card to move.".to_string(),
        history: Vector::new(),
        rng,
        config,
    }
}

/// Outcome of the run, once it is over.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameOutcome> {
    state.outcome()
}

/// Every action the current state accepts.
///
/// Empty once the game is over. Also empty in the rare movement phase with
/// an empty hand: the run cannot continue from there.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<GameAction> {
    match state.phase {
        GamePhase::Movement => state
            .piles
            .hand
            .iter()
            .flat_map(|card| {
                resolve_movement_targets(card, state)
                    .into_iter()
                    .map(move |destination| GameAction::Move {
                        card: card.id,
                        destination,
                    })
            })
            .collect(),
        GamePhase::Battle | GamePhase::BossFight => {
            let fighting = state
                .active_battle
                .as_ref()
                .is_some_and(|battle| !battle.is_resolved);
            if !fighting {
                return Vec::new();
            }
            state
                .piles
                .hand
                .iter()
                .map(|card| GameAction::Fight { card: card.id })
                .collect()
        }
        GamePhase::Reward => vec![GameAction::CollectReward],
        GamePhase::BattleReward => state
            .piles
            .reward_choices
            .iter()
            .map(|card| GameAction::TakeBattleReward { card: card.id })
            .chain(std::iter::once(GameAction::SkipBattleReward))
            .collect(),
        GamePhase::GameOver { .. } => Vec::new(),
    }
}

/// Apply one action. Returns `state` unchanged if it is rejected.
#[must_use]
pub fn apply_action(state: &GameState, action: &GameAction) -> GameState {
    unchanged_on_error(state, try_apply_action(state, action))
}

/// Fallible form of [`apply_action`].
pub fn try_apply_action(state: &GameState, action: &GameAction) -> Result<GameState, EngineError> {
    match *action {
        GameAction::Move { card, destination } => {
            try_play_card_for_movement(state, card, destination)
        }
        GameAction::Fight { card } => try_play_card_for_combat(state, card),
        GameAction::CollectReward => try_collect_reward(state),
        GameAction::TakeBattleReward { card } => try_collect_battle_reward(state, card),
        GameAction::SkipBattleReward => try_skip_battle_reward(state),
    }
}

pub(crate) fn ensure_in_play(state: &GameState) -> Result<(), EngineError> {
    if state.is_game_over() {
        return Err(EngineError::GameOver);
    }
    Ok(())
}

pub(crate) fn ensure_phase(state: &GameState, expected: GamePhase) -> Result<(), EngineError> {
    if state.phase != expected {
        return Err(EngineError::WrongPhase {
            expected,
            actual: state.phase,
        });
    }
    Ok(())
}

/// Turn a rejected operation into a no-op.
pub(crate) fn unchanged_on_error(
    state: &GameState,
    result: Result<GameState, EngineError>,
) -> GameState {
    result.unwrap_or_else(|error| {
        debug!(%error, phase = %state.phase, turn = state.turn_number, "operation rejected");
        state.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::core::{ConfigError, PathTopology};
    use crate::path::SpaceType;

    #[test]
    fn test_new_game_setup() {
        let state = new_game_seeded(5);

        assert_eq!(state.current_node, state.path.start());
        assert_eq!(state.current_step, 0);
        assert!(state.current_node().unwrap().is_visited);
        assert_eq!(state.piles.hand.len(), 7);
        assert_eq!(state.piles.draw_pile.len(), DECK_SIZE - 7);
        assert!(state.piles.discard_pile.is_empty());
        assert!(state.piles.reward_choices.is_empty());
        assert_eq!((state.player_hp, state.player_max_hp), (20, 20));
        assert_eq!(state.phase, GamePhase::Movement);
        assert!(state.active_battle.is_none());
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.message, "Choose a card to move.");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_same_seed_same_run() {
        assert_eq!(new_game_seeded(77), new_game_seeded(77));
    }

    #[test]
    fn test_entropy_games_are_playable() {
        let state = new_game();

        assert_eq!(state.card_count(), DECK_SIZE);
        assert!(!legal_actions(&state).is_empty());
    }

    #[test]
    fn test_custom_config() {
        let config = RunConfig::default()
            .with_starting_hp(30)
            .with_hand_size(5)
            .with_topology(PathTopology::Lattice);

        let state = new_game_with_config(&config, 1).unwrap();

        assert_eq!(state.player_hp, 30);
        assert_eq!(state.piles.hand.len(), 5);
        assert_eq!(state.path.len(), 24);
        assert_eq!(state.config, config);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RunConfig::default().with_starting_hp(-1);

        assert_eq!(
            new_game_with_config(&config, 1),
            Err(EngineError::InvalidConfig(ConfigError::NonPositiveHp(-1)))
        );
    }

    #[test]
    fn test_legal_moves_from_start() {
        let state = new_game_seeded(5);
        let actions = legal_actions(&state);

        assert!(!actions.is_empty());
        for action in &actions {
            let GameAction::Move { card, destination } = *action else {
                panic!("unexpected action {action:?}");
            };
            let card = state.piles.find_in_hand(card).unwrap();
            assert!(resolve_movement_targets(card, &state).contains(&destination));
        }
    }

    #[test]
    fn test_legal_actions_per_phase() {
        let mut state = new_game_seeded(5);

        state.phase = GamePhase::Reward;
        assert_eq!(legal_actions(&state), vec![GameAction::CollectReward]);

        state.phase = GamePhase::Battle;
        assert!(legal_actions(&state).is_empty());

        state.phase = GamePhase::BattleReward;
        assert_eq!(legal_actions(&state), vec![GameAction::SkipBattleReward]);

        state.phase = GamePhase::GameOver { won: false };
        assert!(legal_actions(&state).is_empty());
    }

    #[test]
    fn test_apply_action_moves_into_battle() {
        let state = new_game_seeded(5);
        let card = state.piles.hand[0].id;
        let destination = state.path.nodes_at_step(1)[0].id;
        assert_eq!(
            state.path.get(destination).map(|n| n.space_type),
            Some(SpaceType::Battle)
        );

        let next = apply_action(&state, &GameAction::Move { card, destination });

        assert_eq!(next.phase, GamePhase::Battle);
        assert_eq!(next.message, "A Goblin blocks your path!");
        assert_eq!(next.turn_number, 1);
        assert_eq!(next.history.len(), 1);
        assert!(!legal_actions(&next).is_empty());
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut state = new_game_seeded(5);
        state.phase = GamePhase::GameOver { won: true };
        let card = state.piles.hand[0].id;

        let move_to = GameAction::Move {
            card,
            destination: state.path.nodes_at_step(1)[0].id,
        };
        for action in [move_to, GameAction::Fight { card }, GameAction::CollectReward] {
            assert_eq!(try_apply_action(&state, &action), Err(EngineError::GameOver));
            assert_eq!(apply_action(&state, &action), state);
        }
        assert_eq!(outcome(&state), Some(GameOutcome::Victory));
    }
}
