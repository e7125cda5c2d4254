use crate::selection::{Color, School, Selection, Sign};

/// Cap on points earned from weekly study hours.
pub const HOURS_POINTS_CAP: u32 = 50;

/// Special (school, sign) pairings and the bonus each grants. Checked
/// independently and summed, so overlapping pairs would stack.
pub const COMBO_BONUSES: [(School, Sign, u32); 4] = [
    (School::Wolf, Sign::Igni, 20),
    (School::Bear, Sign::Quen, 15),
    (School::Cat, Sign::Axii, 15),
    (School::Viper, Sign::Yrden, 18),
];

/// Base points per school. Rarer schools score higher.
pub fn school_points(school: School) -> u32 {
    match school {
        School::Manticore => 35,
        School::Wolf => 30,
        School::Griffin => 25,
        School::Viper => 25,
        School::Bear => 20,
        School::Cat => 20,
    }
}

/// Points per sign, keyed on how hard the sign is to master.
pub fn sign_points(sign: Sign) -> u32 {
    match sign {
        Sign::Axii => 40,
        Sign::Yrden => 35,
        Sign::Igni => 30,
        Sign::Quen => 25,
        Sign::Aard => 25,
    }
}

/// Two points per weekly hour, capped at 50.
pub fn hours_points(weekly_hours: u32) -> u32 {
    (weekly_hours * 2).min(HOURS_POINTS_CAP)
}

/// Points per material. Precious stones share the top value.
pub fn color_points(color: Color) -> u32 {
    match color {
        Color::Ruby | Color::Emerald | Color::Amethyst => 15,
        Color::Gold => 12,
        Color::Silver => 10,
        Color::Bronze => 8,
    }
}

/// Sum of bonuses for every matching (school, sign) pairing.
pub fn combo_bonus(school: School, sign: Sign) -> u32 {
    COMBO_BONUSES
        .iter()
        .filter(|(s, g, _)| *s == school && *g == sign)
        .map(|(_, _, bonus)| bonus)
        .sum()
}

/// Three independent flat bonuses: a motto, a double-sided medallion, and
/// high weekly dedication.
pub fn personalization_bonus(selection: &Selection) -> u32 {
    let mut bonus = 0;
    if selection.motto.is_some() {
        bonus += 5;
    }
    if selection.double_sided {
        bonus += 10;
    }
    if selection.weekly_hours >= 20 {
        bonus += 8;
    }
    bonus
}
