//! Cell effects applied when a player's movement ends on a cell.

use crate::board::cell::CellType;
use crate::core::rng::GameRng;
use crate::session::player::Player;
use serde::{Deserialize, Serialize};

/// Tunable money rules for landing cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEffectRules {
    /// Money earned per score point on a Blue cell
    pub blue_multiplier: i64,
    /// Money at or above which the game is won
    pub win_threshold: i64,
    /// Money lost per point below the Red cell target
    pub red_penalty_unit: i64,
    /// Smallest Red cell target
    pub red_target_min: i64,
    /// Largest Red cell target
    pub red_target_max: i64,
}

impl Default for CellEffectRules {
    fn default() -> Self {
        Self {
            blue_multiplier: 100,
            win_threshold: 1_000_000,
            red_penalty_unit: 10_000,
            red_target_min: 1,
            red_target_max: 4,
        }
    }
}

/// What happened on the landing cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEffect {
    /// Normal cell
    None,
    /// Blue cell bonus; `reached_win` is set when the balance hit the threshold
    Bonus { amount: i64, reached_win: bool },
    /// Red cell; `amount` is zero when the score met the drawn target
    Penalty { target: i64, amount: i64 },
}

/// Apply the effect of `cell_type` to `player` for a move earned with `score`.
pub fn apply_cell_effect(
    player: &mut Player,
    cell_type: CellType,
    score: u8,
    rules: &CellEffectRules,
    rng: &mut dyn GameRng,
) -> CellEffect {
    let score = i64::from(score);
    match cell_type {
        CellType::Normal => CellEffect::None,
        CellType::Blue => {
            let amount = score * rules.blue_multiplier;
            player.add_money(amount);
            CellEffect::Bonus {
                amount,
                reached_win: player.money() >= rules.win_threshold,
            }
        }
        CellType::Red => {
            let target = rng.range_inclusive(rules.red_target_min, rules.red_target_max);
            let penalty = (target - score) * rules.red_penalty_unit;
            let amount = penalty.max(0);
            if amount > 0 {
                player.add_money(-amount);
            }
            CellEffect::Penalty { target, amount }
        }
    }
}
