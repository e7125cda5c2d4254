use crate::selection::Sign;

pub const MIN_AGE: u32 = 16;
pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 100;

/// Sign mastery thresholds, in training order.
pub const SIGN_THRESHOLDS: [(Sign, u32); 5] = [
    (Sign::Igni, 1),
    (Sign::Quen, 20),
    (Sign::Aard, 40),
    (Sign::Axii, 60),
    (Sign::Yrden, 80),
];

/// One academy trainee. Lives in a caller-owned roster; there is no global
/// registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Apprentice {
    pub name: String,
    pub age: u32,
    pub origin: String,
    pub level: u32,
}

impl Apprentice {
    /// Build an apprentice with age and level clamped into their legal
    /// ranges. Callers wanting to warn about adjustments compare against
    /// [`clamp_age`]/[`clamp_level`] first.
    pub fn new(name: String, age: u32, origin: String, level: u32) -> Apprentice {
        Apprentice {
            name,
            age: clamp_age(age),
            origin,
            level: clamp_level(level),
        }
    }

    /// Signs this apprentice has mastered at their current level.
    pub fn mastered_signs(&self) -> Vec<Sign> {
        SIGN_THRESHOLDS
            .iter()
            .filter(|(_, threshold)| self.level >= *threshold)
            .map(|(sign, _)| *sign)
            .collect()
    }

    /// The next sign still locked, with the levels remaining to unlock it.
    pub fn next_sign(&self) -> Option<(Sign, u32)> {
        SIGN_THRESHOLDS
            .iter()
            .find(|(_, threshold)| self.level < *threshold)
            .map(|(sign, threshold)| (*sign, threshold - self.level))
    }
}

pub fn clamp_age(age: u32) -> u32 {
    age.max(MIN_AGE)
}

pub fn clamp_level(level: u32) -> u32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}
