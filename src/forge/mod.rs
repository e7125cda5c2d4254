//! Interactive forge session: collect choices, score them, render the
//! medallion, and best-effort persist the report.

use anyhow::Result;
use chrono::Local;

use crate::config::Config;
use crate::prompt::{accepted, divider, prompt, rejected, should_use_colors};
use crate::report::{capitalize, render_report, save_report};
use crate::scoring::calculate_score;
use crate::selection::{
    parse_hours, parse_menu_index, parse_yes_no, validate_motto, validate_name, BorderStyle,
    Color, School, Selection, Sign, Symbol, HOURS_MAX, HOURS_MIN, MOTTO_MAX_LEN,
};

/// Run one forge session end to end. Everything interactive happens here;
/// scoring and rendering stay pure underneath.
pub fn run(config: &Config, verbose: bool) -> Result<()> {
    let use_colors = should_use_colors();

    print_banner();

    let selection = collect_selection(use_colors)?;
    let breakdown = calculate_score(&selection);

    println!();
    println!("{}", render_report(&selection, &breakdown));
    println!();

    if config.save_reports {
        let dir = config.output_dir();
        match save_report(&dir, &selection, &breakdown, Local::now()) {
            Ok(path) => {
                accepted(&format!("Report saved to {}", path.display()), use_colors);
                if verbose {
                    eprintln!("Report written to {}", path.display());
                }
            }
            Err(e) => {
                // Persistence failure never aborts the session; the report
                // was already displayed.
                rejected(&format!("Could not save report: {:#}", e), use_colors);
            }
        }
    } else if verbose {
        eprintln!("Report persistence disabled by config");
    }

    print_summary(&selection, breakdown.total(), use_colors);
    Ok(())
}

fn print_banner() {
    println!("{}", divider('='));
    println!("          KAER MORHEN ACADEMY - MEDALLION FORGE");
    println!("{}", divider('='));
    println!();
    println!("Welcome to the ancestral forge. Your choices shape the");
    println!("medallion and its final score; special combinations grant");
    println!("extra bonuses, and the finished report is saved for you.");
    println!();
}

/// Prompt for every field in order. Each loop re-asks until the pure
/// validator accepts, echoing the corrective reason on each miss.
fn collect_selection(use_colors: bool) -> Result<Selection> {
    let name = loop {
        let raw = prompt("Your name, young apprentice: ")?;
        match validate_name(&raw) {
            Ok(name) => {
                accepted(&format!("Name accepted: {}", name), use_colors);
                break name;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("WITCHER SCHOOLS:");
    for school in School::ALL {
        println!(
            "  {} {} - {}",
            school.glyph(),
            capitalize(school.name()),
            school.blurb()
        );
    }
    let school = loop {
        let raw = prompt("Choose your school: ")?;
        match raw.parse::<School>() {
            Ok(school) => {
                accepted(
                    &format!("School chosen: {}", capitalize(school.name())),
                    use_colors,
                );
                break school;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("MAGIC SIGNS:");
    for sign in Sign::ALL {
        println!(
            "  {} ({}) - {}",
            capitalize(sign.name()),
            sign.element(),
            sign.blurb()
        );
    }
    let sign = loop {
        let raw = prompt("Your favorite sign: ")?;
        match raw.parse::<Sign>() {
            Ok(sign) => {
                accepted(
                    &format!("Sign chosen: {}", capitalize(sign.name())),
                    use_colors,
                );
                break sign;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("STUDY DEDICATION:");
    println!("  How many hours per week will you train? (5-20 suits beginners)");
    let weekly_hours = loop {
        let raw = prompt(&format!("Hours per week ({}-{}): ", HOURS_MIN, HOURS_MAX))?;
        match parse_hours(&raw) {
            Ok(hours) => {
                accepted(&format!("Dedication set: {} hours/week", hours), use_colors);
                break hours;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("MEDALLION MATERIALS:");
    for color in Color::ALL {
        println!("  {} - {}", capitalize(color.name()), color.blurb());
    }
    let color = loop {
        let raw = prompt("Choose your material: ")?;
        match raw.parse::<Color>() {
            Ok(color) => {
                accepted(
                    &format!("Material chosen: {}", capitalize(color.name())),
                    use_colors,
                );
                break color;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("BORDER STYLES:");
    for (i, style) in BorderStyle::ALL.iter().enumerate() {
        println!(
            "  {}. {} {} - {}",
            i + 1,
            style.edge(),
            capitalize(style.name()),
            style.blurb()
        );
    }
    let border = loop {
        let raw = prompt(&format!("Choose a style (1-{}): ", BorderStyle::ALL.len()))?;
        match parse_menu_index(&raw, BorderStyle::ALL.len()) {
            Ok(index) => {
                let style = BorderStyle::from_index(index).unwrap_or(BorderStyle::Simple);
                accepted(
                    &format!("Style chosen: {}", capitalize(style.name())),
                    use_colors,
                );
                break style;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("PERSONAL MOTTO:");
    println!("  A phrase for your journey, up to {} chars.", MOTTO_MAX_LEN);
    let motto = loop {
        let raw = prompt("Your motto (Enter to skip): ")?;
        match validate_motto(&raw) {
            Ok(Some(motto)) => {
                accepted(&format!("Motto set: \"{}\"", motto), use_colors);
                break Some(motto);
            }
            Ok(None) => {
                accepted("No motto set", use_colors);
                break None;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("DOUBLE-SIDED MEDALLION:");
    println!("  A reverse side shows your motto and score (+10 bonus).");
    let double_sided = loop {
        let raw = prompt("Double-sided? (y/n): ")?;
        match parse_yes_no(&raw) {
            Ok(answer) => {
                let label = if answer { "double-sided" } else { "single-sided" };
                accepted(&format!("Medallion will be {}", label), use_colors);
                break answer;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    println!();
    println!("PERSONAL SYMBOL:");
    for (i, symbol) in Symbol::ALL.iter().enumerate() {
        println!(
            "  {}. {} {} - {}",
            i + 1,
            symbol.glyph(),
            capitalize(symbol.name()),
            symbol.blurb()
        );
    }
    let symbol = loop {
        let raw = prompt(&format!("Choose your symbol (1-{}): ", Symbol::ALL.len()))?;
        match parse_menu_index(&raw, Symbol::ALL.len()) {
            Ok(index) => {
                let symbol = Symbol::from_index(index).unwrap_or(Symbol::Sword);
                accepted(&format!("Symbol chosen: {}", symbol.glyph()), use_colors);
                break symbol;
            }
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    Ok(Selection {
        name,
        school,
        sign,
        weekly_hours,
        color,
        border,
        motto,
        double_sided,
        symbol,
    })
}

fn print_summary(selection: &Selection, total: u32, use_colors: bool) {
    println!();
    println!("{}", divider('-'));
    println!("SESSION SUMMARY");
    println!("{}", divider('-'));
    println!("Apprentice: {}", selection.name);
    println!(
        "Forged: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Commitment: {} hours/week", selection.weekly_hours);
    println!("Final score: {} points", total);
    accepted(
        &format!("Congratulations, {}. The forge awaits your return.", selection.name),
        use_colors,
    );
}
