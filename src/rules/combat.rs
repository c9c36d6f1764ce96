//! Combat: playing a card's side B against the active enemy.
//!
//! One call is one exchange. The player's effect resolves first; if the
//! enemy survives it retaliates for `damage - block`, and the block is then
//! spent. A killing blow is never answered.

use tracing::info;

use super::engine::{ensure_in_play, unchanged_on_error};
use crate::cards::CardEffect;
use crate::core::{
    ActionRecord, BattleState, CardId, EngineError, GameAction, GamePhase, GameState,
};

/// Play `card_id` for its combat side against the active enemy.
///
/// Returns `state` unchanged if there is no fight to play into.
#[must_use]
pub fn play_card_for_combat(state: &GameState, card_id: CardId) -> GameState {
    unchanged_on_error(state, try_play_card_for_combat(state, card_id))
}

/// Fallible form of [`play_card_for_combat`].
pub fn try_play_card_for_combat(
    state: &GameState,
    card_id: CardId,
) -> Result<GameState, EngineError> {
    ensure_in_play(state)?;
    let fighting = state
        .active_battle
        .as_ref()
        .is_some_and(|battle| !battle.is_resolved);
    if !fighting {
        return Err(EngineError::NoActiveBattle);
    }

    let mut next = state.clone();
    let card = next
        .piles
        .discard_from_hand(card_id)
        .ok_or(EngineError::CardNotInHand(card_id))?;
    next.turn_number += 1;
    next.record_action(ActionRecord::new(
        GameAction::Fight { card: card_id },
        next.turn_number,
    ));

    let mut battle = next.active_battle.take().ok_or(EngineError::NoActiveBattle)?;
    apply_combat_effect(&mut next, &mut battle, card.side_b);

    if battle.is_enemy_defeated() {
        resolve_victory(&mut next, battle);
        return Ok(next);
    }

    let damage = battle.retaliation_damage();
    next.damage_player(damage);
    battle.player_block_this_turn = 0;
    if damage > 0 {
        let line = format!("{} hits you for {damage} damage!", battle.enemy_name);
        battle.push_log(line);
    } else {
        battle.push_log("Your shield absorbs the blow!");
    }
    next.active_battle = Some(battle);

    if next.player_hp <= 0 {
        info!(turn = next.turn_number, "player slain");
        next.phase = GamePhase::GameOver { won: false };
        next.message = "You have been slain...".to_string();
    } else if next.piles.hand.is_empty() {
        info!(turn = next.turn_number, "out of cards mid-fight");
        next.phase = GamePhase::GameOver { won: false };
        next.message = "You have no cards left!".to_string();
    }

    Ok(next)
}

/// Amounts below zero count as zero.
fn apply_combat_effect(state: &mut GameState, battle: &mut BattleState, effect: CardEffect) {
    match effect {
        CardEffect::DealDamage(amount) => {
            let amount = amount.max(0);
            battle.damage_enemy(amount);
            battle.push_log(format!("You deal {amount} damage!"));
        }
        CardEffect::HealHp(amount) => {
            let healed = state.heal_player(amount.max(0));
            battle.push_log(format!("You heal {healed} HP!"));
        }
        CardEffect::Block(amount) => {
            let amount = amount.max(0);
            battle.player_block_this_turn += amount;
            battle.push_log(format!("You raise a shield! (+{amount} block)"));
        }
        CardEffect::MoveSteps(_) | CardEffect::JumpToNextReward => {
            battle.push_log("That card has no combat effect!");
        }
    }
}

fn resolve_victory(state: &mut GameState, mut battle: BattleState) {
    battle.enemy_hp = 0;
    battle.is_resolved = true;
    let line = format!("{} defeated!", battle.enemy_name);
    battle.push_log(line);

    if state.phase == GamePhase::BossFight {
        info!(turn = state.turn_number, "boss defeated");
        state.message = format!("You defeated the {}!", battle.enemy_name);
        state.phase = GamePhase::GameOver { won: true };
        // Kept for the final screen.
        state.active_battle = Some(battle);
        return;
    }

    info!(enemy = %battle.enemy_name, turn = state.turn_number, "battle won");
    state.active_battle = None;
    let count = state.config.battle_reward_choices;
    let offered = state.piles.offer_rewards(count, &mut state.rng);
    if offered > 0 {
        state.phase = GamePhase::BattleReward;
        state.message = "Victory! Choose a card as your reward.".to_string();
    } else {
        state.phase = GamePhase::Movement;
        state.message = "Victory! No cards to offer. Choose your next move.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{make_deck, Card, Rarity, DECK_SIZE};
    use crate::core::IdAllocator;
    use crate::rules::enemies::{boss_battle, enemy_for_step};
    use crate::rules::new_game_seeded;
    use crate::zones::{CardPiles, Pile};

    // Deck in recipe order: ids 1-5 Weak Strike (deal 3), 6-9 Quick Blade
    // (deal 5), 10-12 Swift Healer (heal 4), 13-15 Shield Creep (block 4),
    // 16-17 Vaulter (deal 8), 18-19 Mend Runner (heal 6), 20 Legend's Charge.
    fn fighting(hand_size: usize, battle: BattleState, phase: GamePhase) -> GameState {
        let mut state = new_game_seeded(9);
        state.piles = CardPiles::deal(make_deck(&mut IdAllocator::new()), hand_size);
        state.active_battle = Some(battle);
        state.phase = phase;
        state
    }

    fn goblin_fight(hand_size: usize) -> GameState {
        fighting(hand_size, enemy_for_step(1), GamePhase::Battle)
    }

    fn battle(state: &GameState) -> &BattleState {
        state.active_battle.as_ref().unwrap()
    }

    #[test]
    fn test_damage_then_retaliation() {
        let state = goblin_fight(7);

        let next = play_card_for_combat(&state, CardId::new(1));

        assert_eq!(battle(&next).enemy_hp, 5);
        assert_eq!(next.player_hp, 17);
        assert_eq!(next.turn_number, 1);
        assert_eq!(next.piles.locate(CardId::new(1)), Some(Pile::DiscardPile));
        assert_eq!(next.phase, GamePhase::Battle);
        let log: Vec<&str> = battle(&next).log.iter().map(String::as_str).collect();
        assert_eq!(log, vec!["You deal 3 damage!", "Goblin hits you for 3 damage!"]);
    }

    #[test]
    fn test_block_absorbs_and_resets() {
        let state = goblin_fight(DECK_SIZE);

        let next = play_card_for_combat(&state, CardId::new(13));

        assert_eq!(next.player_hp, 20);
        assert_eq!(battle(&next).player_block_this_turn, 0);
        let log: Vec<&str> = battle(&next).log.iter().map(String::as_str).collect();
        assert_eq!(
            log,
            vec!["You raise a shield! (+4 block)", "Your shield absorbs the blow!"]
        );
    }

    #[test]
    fn test_partial_block() {
        let state = fighting(DECK_SIZE, enemy_for_step(8), GamePhase::Battle);

        let next = play_card_for_combat(&state, CardId::new(13));

        // Troll hits for 5, shield takes 4.
        assert_eq!(next.player_hp, 19);
        assert_eq!(
            battle(&next).log.back().map(String::as_str),
            Some("Troll hits you for 1 damage!")
        );
    }

    #[test]
    fn test_heal_reports_applied_amount() {
        let mut state = goblin_fight(DECK_SIZE);
        state.player_hp = 18;

        let next = play_card_for_combat(&state, CardId::new(10));

        assert_eq!(battle(&next).log[0], "You heal 2 HP!");
        assert_eq!(next.player_hp, 17);
    }

    #[test]
    fn test_movement_side_has_no_combat_effect() {
        let mut state = goblin_fight(7);
        let odd = Card::new(
            CardId::new(99),
            "Odd",
            Rarity::Common,
            CardEffect::MoveSteps(1),
            CardEffect::JumpToNextReward,
        );
        state.piles.hand.push_back(odd);

        let next = play_card_for_combat(&state, CardId::new(99));

        assert_eq!(next.turn_number, 1);
        assert_eq!(battle(&next).enemy_hp, 8);
        assert_eq!(battle(&next).log[0], "That card has no combat effect!");
        assert_eq!(next.piles.locate(CardId::new(99)), Some(Pile::DiscardPile));
    }

    #[test]
    fn test_negative_amounts_count_as_zero() {
        let mut state = goblin_fight(1);
        let cursed = Card::new(
            CardId::new(90),
            "Cursed Buckler",
            Rarity::Common,
            CardEffect::MoveSteps(1),
            CardEffect::Block(-10),
        );
        state.piles.hand.push_back(cursed);

        let next = play_card_for_combat(&state, CardId::new(90));

        assert_eq!(next.player_hp, 17);
        assert_eq!(battle(&next).player_block_this_turn, 0);
        assert_eq!(battle(&next).log[0], "You raise a shield! (+0 block)");

        let mut state = goblin_fight(1);
        let backfire = Card::new(
            CardId::new(91),
            "Backfire",
            Rarity::Common,
            CardEffect::MoveSteps(1),
            CardEffect::DealDamage(-5),
        );
        state.piles.hand.push_back(backfire);
        if let Some(goblin) = state.active_battle.as_mut() {
            goblin.enemy_hp = 4;
        }

        let next = play_card_for_combat(&state, CardId::new(91));

        assert_eq!(battle(&next).enemy_hp, 4);
        assert_eq!(battle(&next).log[0], "You deal 0 damage!");
    }

    #[test]
    fn test_victory_offers_rewards_without_retaliation() {
        let mut state = goblin_fight(7);
        if let Some(battle) = state.active_battle.as_mut() {
            battle.enemy_hp = 3;
        }

        let next = play_card_for_combat(&state, CardId::new(1));

        assert!(next.active_battle.is_none());
        assert_eq!(next.player_hp, 20);
        assert_eq!(next.phase, GamePhase::BattleReward);
        assert_eq!(next.piles.reward_choices.len(), 3);
        assert_eq!(next.message, "Victory! Choose a card as your reward.");
        assert_eq!(next.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_overkill_clamps_enemy_hp() {
        let mut state = fighting(DECK_SIZE, boss_battle(), GamePhase::BossFight);
        if let Some(battle) = state.active_battle.as_mut() {
            battle.enemy_hp = 2;
        }

        let next = play_card_for_combat(&state, CardId::new(20));

        assert_eq!(battle(&next).enemy_hp, 0);
    }

    #[test]
    fn test_victory_with_nothing_to_offer() {
        let mut state = goblin_fight(7);
        state.config = state.config.with_battle_reward_choices(0);
        if let Some(battle) = state.active_battle.as_mut() {
            battle.enemy_hp = 1;
        }

        let next = play_card_for_combat(&state, CardId::new(1));

        assert_eq!(next.phase, GamePhase::Movement);
        assert_eq!(next.message, "Victory! No cards to offer. Choose your next move.");
        assert!(next.piles.reward_choices.is_empty());
    }

    #[test]
    fn test_boss_defeat_wins() {
        let mut state = fighting(7, boss_battle(), GamePhase::BossFight);
        if let Some(battle) = state.active_battle.as_mut() {
            battle.enemy_hp = 5;
        }

        let next = play_card_for_combat(&state, CardId::new(6));

        assert_eq!(next.phase, GamePhase::GameOver { won: true });
        assert_eq!(next.message, "You defeated the DRAGON LORD!");
        assert!(battle(&next).is_resolved);
        assert_eq!(battle(&next).log.back().map(String::as_str), Some("DRAGON LORD defeated!"));
    }

    #[test]
    fn test_slain() {
        let mut state = goblin_fight(7);
        state.player_hp = 3;

        let next = play_card_for_combat(&state, CardId::new(1));

        assert_eq!(next.player_hp, 0);
        assert_eq!(next.phase, GamePhase::GameOver { won: false });
        assert_eq!(next.message, "You have been slain...");
    }

    #[test]
    fn test_overkill_on_player_clamps_hp() {
        let mut state = fighting(7, boss_battle(), GamePhase::BossFight);
        state.player_hp = 2;

        let next = play_card_for_combat(&state, CardId::new(1));

        assert_eq!(next.player_hp, 0);
    }

    #[test]
    fn test_last_card_loses() {
        let state = goblin_fight(1);

        let next = play_card_for_combat(&state, CardId::new(1));

        assert!(next.piles.hand.is_empty());
        assert_eq!(next.phase, GamePhase::GameOver { won: false });
        assert_eq!(next.message, "You have no cards left!");
    }

    #[test]
    fn test_rejections() {
        let state = goblin_fight(7);
        assert_eq!(
            try_play_card_for_combat(&state, CardId::new(12)),
            Err(EngineError::CardNotInHand(CardId::new(12)))
        );
        assert_eq!(play_card_for_combat(&state, CardId::new(12)), state);

        let idle = new_game_seeded(9);
        let card = idle.piles.hand[0].id;
        assert_eq!(
            try_play_card_for_combat(&idle, card),
            Err(EngineError::NoActiveBattle)
        );

        let mut resolved = goblin_fight(7);
        if let Some(battle) = resolved.active_battle.as_mut() {
            battle.is_resolved = true;
        }
        assert_eq!(
            try_play_card_for_combat(&resolved, CardId::new(1)),
            Err(EngineError::NoActiveBattle)
        );
    }

    #[test]
    fn test_records_fight() {
        let state = goblin_fight(7);

        let next = play_card_for_combat(&state, CardId::new(2));

        let record = next.history.back().unwrap();
        assert_eq!(record.action, GameAction::Fight { card: CardId::new(2) });
        assert_eq!(record.turn, 1);
    }
}
