use crate::selection::Selection;

use super::tables;

/// Per-category points for one medallion. Computed once from a completed
/// [`Selection`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub school_points: u32,
    pub sign_points: u32,
    pub hours_points: u32,
    pub color_points: u32,
    pub combo_bonus: u32,
    pub personalization_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.school_points
            + self.sign_points
            + self.hours_points
            + self.color_points
            + self.combo_bonus
            + self.personalization_bonus
    }

    pub fn classification(&self) -> Classification {
        Classification::from_total(self.total())
    }
}

/// Score a completed selection. Pure: no I/O, no hidden state.
pub fn calculate_score(selection: &Selection) -> ScoreBreakdown {
    ScoreBreakdown {
        school_points: tables::school_points(selection.school),
        sign_points: tables::sign_points(selection.sign),
        hours_points: tables::hours_points(selection.weekly_hours),
        color_points: tables::color_points(selection.color),
        combo_bonus: tables::combo_bonus(selection.school, selection.sign),
        personalization_bonus: tables::personalization_bonus(selection),
    }
}

/// Rank earned by the total score. Tier boundaries are inclusive-lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    PromisingApprentice,
    JuniorWitcher,
    SeniorWitcher,
    VeteranWitcher,
    Master,
    Grandmaster,
}

impl Classification {
    pub fn from_total(total: u32) -> Classification {
        if total >= 150 {
            Classification::Grandmaster
        } else if total >= 120 {
            Classification::Master
        } else if total >= 90 {
            Classification::VeteranWitcher
        } else if total >= 60 {
            Classification::SeniorWitcher
        } else if total >= 30 {
            Classification::JuniorWitcher
        } else {
            Classification::PromisingApprentice
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Classification::Grandmaster => "Grandmaster",
            Classification::Master => "Master",
            Classification::VeteranWitcher => "Veteran Witcher",
            Classification::SeniorWitcher => "Senior Witcher",
            Classification::JuniorWitcher => "Junior Witcher",
            Classification::PromisingApprentice => "Promising Apprentice",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Classification::Grandmaster => "👑",
            Classification::Master => "🏆",
            Classification::VeteranWitcher => "⭐⭐⭐⭐",
            Classification::SeniorWitcher => "⭐⭐⭐",
            Classification::JuniorWitcher => "⭐⭐",
            Classification::PromisingApprentice => "⭐",
        }
    }
}

/// Dedication tier derived from weekly study hours alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dedication {
    Casual,
    Novice,
    Dedicated,
    Devoted,
    Legendary,
    Obsessive,
}

impl Dedication {
    pub fn from_hours(weekly_hours: u32) -> Dedication {
        if weekly_hours >= 30 {
            Dedication::Obsessive
        } else if weekly_hours >= 20 {
            Dedication::Legendary
        } else if weekly_hours >= 15 {
            Dedication::Devoted
        } else if weekly_hours >= 10 {
            Dedication::Dedicated
        } else if weekly_hours >= 5 {
            Dedication::Novice
        } else {
            Dedication::Casual
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dedication::Obsessive => "OBSESSIVE",
            Dedication::Legendary => "LEGENDARY",
            Dedication::Devoted => "DEVOTED",
            Dedication::Dedicated => "DEDICATED",
            Dedication::Novice => "NOVICE",
            Dedication::Casual => "CASUAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{BorderStyle, Color, School, Sign, Symbol};

    fn sample_selection() -> Selection {
        Selection {
            name: "Ciri".to_string(),
            school: School::Wolf,
            sign: Sign::Igni,
            weekly_hours: 10,
            color: Color::Silver,
            border: BorderStyle::Double,
            motto: None,
            double_sided: false,
            symbol: Symbol::Star,
        }
    }

    #[test]
    fn test_total_sums_all_six_fields() {
        let breakdown = ScoreBreakdown {
            school_points: 1,
            sign_points: 2,
            hours_points: 4,
            color_points: 8,
            combo_bonus: 16,
            personalization_bonus: 32,
        };
        assert_eq!(breakdown.total(), 63);
    }

    #[test]
    fn test_wolf_igni_combo_flows_into_breakdown() {
        let selection = sample_selection();
        let breakdown = calculate_score(&selection);
        // 30 school + 30 sign + 20 hours + 10 color + 20 combo + 0
        assert_eq!(breakdown.school_points, 30);
        assert_eq!(breakdown.sign_points, 30);
        assert_eq!(breakdown.hours_points, 20);
        assert_eq!(breakdown.color_points, 10);
        assert_eq!(breakdown.combo_bonus, 20);
        assert_eq!(breakdown.personalization_bonus, 0);
        assert_eq!(breakdown.total(), 110);
        assert_eq!(breakdown.classification(), Classification::VeteranWitcher);
    }

    #[test]
    fn test_end_to_end_manticore_axii() {
        // Manticore + Axii + 25h + Ruby + double-sided + motto
        let selection = Selection {
            name: "Anaïs Dupont".to_string(),
            school: School::Manticore,
            sign: Sign::Axii,
            weekly_hours: 25,
            color: Color::Ruby,
            border: BorderStyle::Mystic,
            motto: Some("Code".to_string()),
            double_sided: true,
            symbol: Symbol::Book,
        };
        let breakdown = calculate_score(&selection);
        assert_eq!(breakdown.school_points, 35);
        assert_eq!(breakdown.sign_points, 40);
        assert_eq!(breakdown.hours_points, 50);
        assert_eq!(breakdown.color_points, 15);
        assert_eq!(breakdown.combo_bonus, 0);
        assert_eq!(breakdown.personalization_bonus, 23);
        assert_eq!(breakdown.total(), 163);
        assert_eq!(breakdown.classification(), Classification::Grandmaster);
    }

    #[test]
    fn test_classification_boundaries_inclusive_lower() {
        assert_eq!(Classification::from_total(150), Classification::Grandmaster);
        assert_eq!(Classification::from_total(149), Classification::Master);
        assert_eq!(Classification::from_total(120), Classification::Master);
        assert_eq!(
            Classification::from_total(119),
            Classification::VeteranWitcher
        );
        assert_eq!(Classification::from_total(90), Classification::VeteranWitcher);
        assert_eq!(Classification::from_total(89), Classification::SeniorWitcher);
        assert_eq!(Classification::from_total(60), Classification::SeniorWitcher);
        assert_eq!(Classification::from_total(59), Classification::JuniorWitcher);
        assert_eq!(Classification::from_total(30), Classification::JuniorWitcher);
        assert_eq!(
            Classification::from_total(29),
            Classification::PromisingApprentice
        );
        assert_eq!(
            Classification::from_total(0),
            Classification::PromisingApprentice
        );
    }

    #[test]
    fn test_classification_is_one_of_six_tiers() {
        let mut seen = std::collections::BTreeSet::new();
        for total in 0..=250 {
            seen.insert(Classification::from_total(total));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_classification_monotonic_in_total() {
        let mut prev = Classification::from_total(0);
        for total in 1..=250 {
            let tier = Classification::from_total(total);
            assert!(tier >= prev);
            prev = tier;
        }
    }

    #[test]
    fn test_dedication_tiers() {
        assert_eq!(Dedication::from_hours(1), Dedication::Casual);
        assert_eq!(Dedication::from_hours(5), Dedication::Novice);
        assert_eq!(Dedication::from_hours(10), Dedication::Dedicated);
        assert_eq!(Dedication::from_hours(15), Dedication::Devoted);
        assert_eq!(Dedication::from_hours(20), Dedication::Legendary);
        assert_eq!(Dedication::from_hours(30), Dedication::Obsessive);
        assert_eq!(Dedication::from_hours(100), Dedication::Obsessive);
    }
}
