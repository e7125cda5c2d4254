use super::types::{Apprentice, MAX_LEVEL};

/// Case-insensitive substring search over apprentice names.
pub fn search<'a>(roster: &'a [Apprentice], needle: &str) -> Vec<&'a Apprentice> {
    let needle = needle.to_lowercase();
    roster
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .collect()
}

/// Add experience points, capping the level at 100. Returns (before, after).
pub fn train(apprentice: &mut Apprentice, points: u32) -> (u32, u32) {
    let before = apprentice.level;
    apprentice.level = apprentice.level.saturating_add(points).min(MAX_LEVEL);
    (before, apprentice.level)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    pub count: usize,
    pub mean_age: f64,
    pub mean_level: f64,
    pub top_name: String,
    pub top_level: u32,
}

/// Aggregate statistics over the roster. None when it is empty.
pub fn stats(roster: &[Apprentice]) -> Option<RosterStats> {
    let top = roster.iter().max_by_key(|a| a.level)?;
    let count = roster.len();
    let age_sum: u32 = roster.iter().map(|a| a.age).sum();
    let level_sum: u32 = roster.iter().map(|a| a.level).sum();
    Some(RosterStats {
        count,
        mean_age: age_sum as f64 / count as f64,
        mean_level: level_sum as f64 / count as f64,
        top_name: top.name.clone(),
        top_level: top.level,
    })
}
