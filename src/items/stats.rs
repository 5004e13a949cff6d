//! Stat keys, stat blocks and the stat difference calculator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    Stamina,
    Strength,
    Agility,
    Intellect,
    Spirit,
    CriticalStrike,
    Hit,
    AttackPower,
    SpellPower,
    Defense,
    Dodge,
    Armor,
}

impl StatType {
    pub fn all() -> [StatType; 12] {
        [
            StatType::Stamina,
            StatType::Strength,
            StatType::Agility,
            StatType::Intellect,
            StatType::Spirit,
            StatType::CriticalStrike,
            StatType::Hit,
            StatType::AttackPower,
            StatType::SpellPower,
            StatType::Defense,
            StatType::Dodge,
            StatType::Armor,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Stamina => "Stamina",
            StatType::Strength => "Strength",
            StatType::Agility => "Agility",
            StatType::Intellect => "Intellect",
            StatType::Spirit => "Spirit",
            StatType::CriticalStrike => "Critical Strike",
            StatType::Hit => "Hit",
            StatType::AttackPower => "Attack Power",
            StatType::SpellPower => "Spell Power",
            StatType::Defense => "Defense",
            StatType::Dodge => "Dodge",
            StatType::Armor => "Armor",
        }
    }

    /// Critical strike and hit are chance ratings shown as percentages.
    pub fn is_percentage(&self) -> bool {
        matches!(self, StatType::CriticalStrike | StatType::Hit)
    }

    /// Formats a stat value for display, e.g. `"2%"` for crit, `"40"` for agility.
    pub fn format_value(&self, value: f64) -> String {
        if self.is_percentage() {
            format!("{}%", value)
        } else {
            value.to_string()
        }
    }
}

/// Mapping from stat to magnitude. Absent stats read as zero.
///
/// Item stat blocks are non-negative (checked when a catalog loads); blocks
/// produced by [`diff_stats`] carry signed deltas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBlock(BTreeMap<StatType, f64>);

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatType) -> f64 {
        self.0.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, stat: StatType, value: f64) {
        self.0.insert(stat, value);
    }

    pub fn with(mut self, stat: StatType, value: f64) -> Self {
        self.set(stat, value);
        self
    }

    pub fn contains(&self, stat: StatType) -> bool {
        self.0.contains_key(&stat)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Present stats in stat-key order.
    pub fn iter(&self) -> impl Iterator<Item = (StatType, f64)> + '_ {
        self.0.iter().map(|(&stat, &value)| (stat, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = StatType> + '_ {
        self.0.keys().copied()
    }

    /// Every present stat multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|(&stat, &v)| (stat, v * factor)).collect())
    }
}

impl AddAssign<&StatBlock> for StatBlock {
    fn add_assign(&mut self, other: &StatBlock) {
        for (stat, value) in other.iter() {
            *self.0.entry(stat).or_insert(0.0) += value;
        }
    }
}

impl FromIterator<(StatType, f64)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (StatType, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-stat `comparison - base` over the union of both key sets.
pub fn diff_stats(base: &StatBlock, comparison: &StatBlock) -> StatBlock {
    base.keys()
        .chain(comparison.keys())
        .map(|stat| (stat, comparison.get(stat) - base.get(stat)))
        .collect()
}

/// One row of a side-by-side stat comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatComparison {
    pub stat: StatType,
    pub current: f64,
    pub candidate: f64,
    pub difference: f64,
}

impl StatComparison {
    pub fn is_gain(&self) -> bool {
        self.difference > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.difference < 0.0
    }
}

/// Side-by-side rows for every stat on either block, in stat-key order.
///
/// `current` is `None` for an empty slot, which compares as all zeros.
pub fn compare_stats(current: Option<&StatBlock>, candidate: &StatBlock) -> Vec<StatComparison> {
    let empty = StatBlock::new();
    let current = current.unwrap_or(&empty);
    diff_stats(current, candidate)
        .iter()
        .map(|(stat, difference)| StatComparison {
            stat,
            current: current.get(stat),
            candidate: candidate.get(stat),
            difference,
        })
        .collect()
}
