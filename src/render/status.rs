//! One-line status readouts.

use crate::core::{BattleState, GameState};

const BAR_WIDTH: usize = 10;

/// Ten-cell health bar, e.g. `HP [#######...] 14/20`.
///
/// The fill is rounded to the nearest cell and clamped to the bar.
#[must_use]
pub fn hp_bar(current: i32, max: i32, label: &str) -> String {
    let filled = if max > 0 {
        let ratio = f64::from(current) / f64::from(max);
        (ratio * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    };
    format!(
        "{label} [{}{}] {current}/{max}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}

/// Health bar of the enemy in `battle`, labelled with its name.
#[must_use]
pub fn enemy_hp_bar(battle: &BattleState) -> String {
    hp_bar(battle.enemy_hp, battle.enemy_max_hp, &battle.enemy_name)
}

/// Health bar of the player.
#[must_use]
pub fn player_hp_bar(state: &GameState) -> String {
    hp_bar(state.player_hp, state.player_max_hp, "HP")
}

/// Pile sizes, e.g. `Draw:13 | Discard:0 | Hand:7`.
#[must_use]
pub fn deck_status_line(state: &GameState) -> String {
    format!(
        "Draw:{} | Discard:{} | Hand:{}",
        state.piles.draw_pile.len(),
        state.piles.discard_pile.len(),
        state.piles.hand.len()
    )
}
