use super::stats::{StatBlock, StatType};
use super::types::Item;
use crate::core::constants::*;

/// Weight applied to one point of `stat` when scoring.
pub fn stat_weight(stat: StatType) -> f64 {
    match stat {
        StatType::Agility => AGILITY_WEIGHT,
        StatType::Hit => HIT_WEIGHT,
        StatType::CriticalStrike => CRITICAL_STRIKE_WEIGHT,
        StatType::Strength => STRENGTH_WEIGHT,
        StatType::Stamina => STAMINA_WEIGHT,
        StatType::AttackPower => ATTACK_POWER_WEIGHT,
        _ => DEFAULT_STAT_WEIGHT,
    }
}

pub fn score_stats(stats: &StatBlock) -> f64 {
    stats
        .iter()
        .map(|(stat, value)| value * stat_weight(stat))
        .sum()
}

/// Weighted sum of an item's stats. Only meaningful relative to other scores.
pub fn score_item(item: &Item) -> f64 {
    score_stats(&item.stats)
}

/// The higher-scoring of two items; ties keep `first`.
pub fn better_item<'a>(first: &'a Item, second: &'a Item) -> &'a Item {
    if score_item(first) >= score_item(second) {
        first
    } else {
        second
    }
}
