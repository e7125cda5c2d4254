use crate::scoring::{Dedication, ScoreBreakdown};
use crate::selection::Selection;

use super::text::{capitalize, center_text, wrap_text};

/// Inner width of a medallion panel, in chars.
const PANEL_WIDTH: usize = 40;

/// Column width the motto is wrapped to on the reverse side.
const MOTTO_WIDTH: usize = 30;

/// Longest name shown on the medallion front before hard truncation.
const NAME_WIDTH: usize = 14;

/// Weekly hours assumed to add up to basic mastery.
const MASTERY_HOURS: u32 = 200;

fn edge_run(edge: char, len: usize) -> String {
    edge.to_string().repeat(len)
}

fn framed(edge: char, content: &str) -> String {
    format!("  {}{}{}", edge, center_text(content, PANEL_WIDTH), edge)
}

/// Render the medallion front: glyphs, centered name, category labels.
/// Pure text production; identical inputs give byte-identical output.
pub fn render_front(selection: &Selection) -> String {
    let edge = selection.border.edge();
    let display_name: String = selection
        .name
        .to_uppercase()
        .chars()
        .take(NAME_WIDTH)
        .collect();
    let dedication = Dedication::from_hours(selection.weekly_hours);

    let mut lines = Vec::new();
    lines.push(format!("  ╔{}╗", edge_run(edge, PANEL_WIDTH)));
    lines.push(framed(edge, ""));
    lines.push(framed(
        edge,
        &format!("{}   {}", selection.school.glyph(), selection.symbol.glyph()),
    ));
    lines.push(framed(edge, "MEDALLION OF"));
    lines.push(framed(edge, &display_name));
    lines.push(framed(edge, ""));
    lines.push(framed(
        edge,
        &format!("SCHOOL: {}", selection.school.name().to_uppercase()),
    ));
    lines.push(framed(
        edge,
        &format!(
            "SIGN: {} ({})",
            selection.sign.name().to_uppercase(),
            selection.sign.element()
        ),
    ));
    lines.push(framed(
        edge,
        &format!("MATERIAL: {}", selection.color.name().to_uppercase()),
    ));
    lines.push(framed(edge, &format!("LEVEL: {}", dedication.label())));
    lines.push(framed(edge, ""));
    lines.push(format!("  ╚{}╝", edge_run(edge, PANEL_WIDTH)));
    lines.join("\n")
}

/// Render the reverse side: wrapped motto, total score, classification.
pub fn render_back(selection: &Selection, breakdown: &ScoreBreakdown) -> String {
    let edge = selection.border.edge();

    let mut lines = Vec::new();
    lines.push(format!("  ╔{}╗", edge_run(edge, PANEL_WIDTH)));
    lines.push(framed(edge, ""));
    lines.push(framed(edge, "REVERSE SIDE"));
    lines.push(framed(edge, ""));
    lines.push(framed(edge, "MOTTO:"));
    for motto_line in wrap_text(selection.motto_display(), MOTTO_WIDTH) {
        lines.push(framed(edge, &motto_line));
    }
    lines.push(framed(edge, ""));
    lines.push(framed(edge, &format!("SCORE: {} pts", breakdown.total())));
    lines.push(framed(
        edge,
        &breakdown.classification().title().to_uppercase(),
    ));
    lines.push(framed(edge, ""));
    lines.push(format!("  ╚{}╝", edge_run(edge, PANEL_WIDTH)));
    lines.join("\n")
}

/// Plain info block listing every selection field, one line each.
pub fn render_info(selection: &Selection) -> String {
    let side = if selection.double_sided {
        "double-sided"
    } else {
        "single-sided"
    };
    let dedication = Dedication::from_hours(selection.weekly_hours);
    [
        format!("Owner: {}", selection.name),
        format!(
            "School: {} {}",
            capitalize(selection.school.name()),
            selection.school.glyph()
        ),
        format!(
            "Sign: {} ({})",
            capitalize(selection.sign.name()),
            selection.sign.element()
        ),
        format!(
            "Weekly hours: {} ({})",
            selection.weekly_hours,
            dedication.label()
        ),
        format!("Material: {}", capitalize(selection.color.name())),
        format!("Border: {}", capitalize(selection.border.name())),
        format!("Motto: \"{}\"", selection.motto_display()),
        format!("Type: {}", side),
        format!(
            "Symbol: {} {}",
            selection.symbol.glyph(),
            capitalize(selection.symbol.name())
        ),
    ]
    .join("\n")
}

/// Per-category score lines, a rule, and the total.
pub fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    [
        "SCORE BREAKDOWN:".to_string(),
        format!("  School:          {:>3}", breakdown.school_points),
        format!("  Sign:            {:>3}", breakdown.sign_points),
        format!("  Dedication:      {:>3}", breakdown.hours_points),
        format!("  Material:        {:>3}", breakdown.color_points),
        format!("  Combo bonus:     {:>3}", breakdown.combo_bonus),
        format!("  Personalization: {:>3}", breakdown.personalization_bonus),
        "  ----------------------".to_string(),
        format!("  TOTAL:           {:>3}", breakdown.total()),
    ]
    .join("\n")
}

/// Tiered estimate of how long basic mastery will take at the chosen pace.
pub fn progress_forecast(weekly_hours: u32) -> String {
    let weeks = MASTERY_HOURS.div_ceil(weekly_hours);
    if weeks <= 8 {
        format!("Mastery in {} weeks. Lightning pace!", weeks)
    } else if weeks <= 16 {
        format!("Mastery in {} weeks. Excellent rhythm!", weeks)
    } else if weeks <= 30 {
        format!("Mastery in {} weeks. Steady progress.", weeks)
    } else {
        format!("A journey of {} weeks. Patience and perseverance.", weeks)
    }
}

/// Assemble the full on-screen report: front panel, optional reverse,
/// info block, score breakdown, classification, forecast.
pub fn render_report(selection: &Selection, breakdown: &ScoreBreakdown) -> String {
    let rule = "=".repeat(60);
    let mut sections = Vec::new();

    sections.push(rule.clone());
    sections.push(center_text("YOUR PERSONALIZED MEDALLION", 60)
        .trim_end()
        .to_string());
    sections.push(rule.clone());
    sections.push(String::new());
    sections.push(render_front(selection));
    if selection.double_sided {
        sections.push(String::new());
        sections.push(render_back(selection, breakdown));
    }
    sections.push(String::new());
    sections.push("MEDALLION DETAILS:".to_string());
    sections.push(render_info(selection));
    sections.push(String::new());
    sections.push(render_breakdown(breakdown));
    sections.push(String::new());
    sections.push(format!(
        "CLASSIFICATION: {} {}",
        breakdown.classification().title(),
        breakdown.classification().badge()
    ));
    sections.push(progress_forecast(selection.weekly_hours));
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;
    use crate::selection::{BorderStyle, Color, School, Sign, Symbol};

    fn sample_selection() -> Selection {
        Selection {
            name: "Geralt of Rivia".to_string(),
            school: School::Wolf,
            sign: Sign::Igni,
            weekly_hours: 25,
            color: Color::Silver,
            border: BorderStyle::Simple,
            motto: Some("Evil is evil".to_string()),
            double_sided: true,
            symbol: Symbol::Sword,
        }
    }

    #[test]
    fn test_front_name_truncated_to_14_chars() {
        let selection = sample_selection();
        let front = render_front(&selection);
        // "GERALT OF RIVIA" is 15 chars; the panel keeps the first 14
        assert!(front.contains("GERALT OF RIVI"));
        assert!(!front.contains("GERALT OF RIVIA"));
    }

    #[test]
    fn test_front_embeds_glyphs_and_labels() {
        let front = render_front(&sample_selection());
        assert!(front.contains("🐺"));
        assert!(front.contains("⚔"));
        assert!(front.contains("SCHOOL: WOLF"));
        assert!(front.contains("SIGN: IGNI (FIRE)"));
        assert!(front.contains("MATERIAL: SILVER"));
        assert!(front.contains("LEVEL: LEGENDARY"));
    }

    #[test]
    fn test_front_uses_border_edge_char() {
        let mut selection = sample_selection();
        selection.border = BorderStyle::Royal;
        let front = render_front(&selection);
        assert!(front.contains('♦'));
        assert!(!front.contains('═'));
    }

    #[test]
    fn test_front_is_deterministic() {
        let selection = sample_selection();
        assert_eq!(render_front(&selection), render_front(&selection));
    }

    #[test]
    fn test_back_wraps_long_motto() {
        let mut selection = sample_selection();
        selection.motto =
            Some("a motto considerably longer than thirty characters".to_string());
        let breakdown = calculate_score(&selection);
        let back = render_back(&selection, &breakdown);
        // Every framed line stays within the fixed panel geometry
        for line in back.lines() {
            assert!(line.chars().count() <= PANEL_WIDTH + 4, "line: {:?}", line);
        }
        assert!(back.contains("MOTTO:"));
    }

    #[test]
    fn test_back_shows_total_and_classification() {
        let selection = sample_selection();
        let breakdown = calculate_score(&selection);
        let back = render_back(&selection, &breakdown);
        assert!(back.contains(&format!("SCORE: {} pts", breakdown.total())));
        assert!(back.contains(&breakdown.classification().title().to_uppercase()));
    }

    #[test]
    fn test_info_lists_every_field() {
        let info = render_info(&sample_selection());
        assert!(info.contains("Owner: Geralt of Rivia"));
        assert!(info.contains("School: Wolf 🐺"));
        assert!(info.contains("Sign: Igni (FIRE)"));
        assert!(info.contains("Weekly hours: 25 (LEGENDARY)"));
        assert!(info.contains("Material: Silver"));
        assert!(info.contains("Border: Simple"));
        assert!(info.contains("Motto: \"Evil is evil\""));
        assert!(info.contains("Type: double-sided"));
        assert!(info.contains("Symbol: ⚔ Sword"));
    }

    #[test]
    fn test_info_motto_sentinel() {
        let mut selection = sample_selection();
        selection.motto = None;
        selection.double_sided = false;
        let info = render_info(&selection);
        assert!(info.contains("Motto: \"no motto\""));
        assert!(info.contains("Type: single-sided"));
    }

    #[test]
    fn test_breakdown_lines_and_total() {
        let breakdown = ScoreBreakdown {
            school_points: 30,
            sign_points: 30,
            hours_points: 50,
            color_points: 10,
            combo_bonus: 20,
            personalization_bonus: 23,
        };
        let text = render_breakdown(&breakdown);
        assert!(text.contains("School:           30"));
        assert!(text.contains("Combo bonus:      20"));
        assert!(text.contains("TOTAL:           163"));
    }

    #[test]
    fn test_forecast_tiers() {
        // 25h/week -> 8 weeks
        assert_eq!(
            progress_forecast(25),
            "Mastery in 8 weeks. Lightning pace!"
        );
        // 20h/week -> 10 weeks
        assert_eq!(
            progress_forecast(20),
            "Mastery in 10 weeks. Excellent rhythm!"
        );
        // 8h/week -> 25 weeks
        assert_eq!(progress_forecast(8), "Mastery in 25 weeks. Steady progress.");
        // 2h/week -> 100 weeks
        assert_eq!(
            progress_forecast(2),
            "A journey of 100 weeks. Patience and perseverance."
        );
    }

    #[test]
    fn test_report_omits_back_when_single_sided() {
        let mut selection = sample_selection();
        selection.double_sided = false;
        let breakdown = calculate_score(&selection);
        let report = render_report(&selection, &breakdown);
        assert!(!report.contains("REVERSE SIDE"));
    }

    #[test]
    fn test_report_includes_back_when_double_sided() {
        let selection = sample_selection();
        let breakdown = calculate_score(&selection);
        let report = render_report(&selection, &breakdown);
        assert!(report.contains("REVERSE SIDE"));
        assert!(report.contains("MEDALLION DETAILS:"));
        assert!(report.contains("SCORE BREAKDOWN:"));
        assert!(report.contains("CLASSIFICATION:"));
    }

    #[test]
    fn test_report_is_byte_identical_for_identical_inputs() {
        let selection = sample_selection();
        let breakdown = calculate_score(&selection);
        assert_eq!(
            render_report(&selection, &breakdown),
            render_report(&selection, &breakdown)
        );
    }
}
