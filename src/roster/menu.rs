//! Menu loop for the academy roster. The roster itself is owned by the
//! caller and threaded through by mutable reference.

use anyhow::Result;

use crate::prompt::{accepted, divider, prompt, rejected, should_use_colors};
use crate::report::capitalize;
use crate::selection::{parse_menu_index, validate_name, FieldError};

use super::ops::{search, stats, train};
use super::types::{clamp_age, clamp_level, Apprentice, MAX_LEVEL, MIN_AGE};

const MENU_ENTRIES: usize = 6;

/// Run the academy menu until the user leaves.
pub fn run(roster: &mut Vec<Apprentice>) -> Result<()> {
    let use_colors = should_use_colors();

    println!("{}", divider('='));
    println!("          KAER MORHEN ACADEMY - APPRENTICE ROSTER");
    println!("{}", divider('='));

    if roster.is_empty() {
        roster.push(Apprentice::new(
            "Geralt".to_string(),
            95,
            "Kaer Morhen".to_string(),
            99,
        ));
        println!();
        println!("One veteran is already registered as a demonstration:");
        print_card(&roster[0]);
    }

    loop {
        println!();
        println!("{}", divider('-'));
        println!("MAIN MENU:");
        println!("  1. Register a new apprentice");
        println!("  2. List all apprentices");
        println!("  3. Search apprentices by name");
        println!("  4. Train an apprentice");
        println!("  5. Academy statistics");
        println!("  6. Leave the academy");

        let choice = loop {
            let raw = prompt(&format!("Your choice (1-{}): ", MENU_ENTRIES))?;
            match parse_menu_index(&raw, MENU_ENTRIES) {
                Ok(choice) => break choice,
                Err(e) => rejected(&e.to_string(), use_colors),
            }
        };

        match choice {
            1 => add_apprentice(roster, use_colors)?,
            2 => list_apprentices(roster),
            3 => search_apprentices(roster, use_colors)?,
            4 => train_apprentice(roster, use_colors)?,
            5 => show_stats(roster),
            _ => break,
        }
    }

    println!();
    println!("Thank you for visiting Kaer Morhen. Until the next journey!");
    Ok(())
}

fn add_apprentice(roster: &mut Vec<Apprentice>, use_colors: bool) -> Result<()> {
    println!();
    println!("NEW APPRENTICE:");

    let name = loop {
        let raw = prompt("  Name: ")?;
        match validate_name(&raw) {
            Ok(name) => break name,
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    let age = loop {
        let raw = prompt("  Age: ")?;
        match raw.parse::<u32>() {
            Ok(age) => break age,
            Err(_) => rejected(&FieldError::NotANumber.to_string(), use_colors),
        }
    };
    if clamp_age(age) != age {
        rejected(
            &format!("Minimum training age is {}; adjusting.", MIN_AGE),
            use_colors,
        );
    }

    let origin = {
        let raw = prompt("  School of origin (Enter for 'New'): ")?;
        if raw.is_empty() {
            "New".to_string()
        } else {
            raw
        }
    };

    let level = loop {
        let raw = prompt(&format!("  Starting level (1-{}): ", MAX_LEVEL))?;
        match raw.parse::<u32>() {
            Ok(level) => break level,
            Err(_) => rejected(&FieldError::NotANumber.to_string(), use_colors),
        }
    };
    if clamp_level(level) != level {
        rejected(
            &format!("Level adjusted into 1-{}.", MAX_LEVEL),
            use_colors,
        );
    }

    let apprentice = Apprentice::new(name, age, origin, level);
    accepted(
        &format!("{} now trains at Kaer Morhen!", apprentice.name),
        use_colors,
    );
    print_card(&apprentice);
    roster.push(apprentice);
    Ok(())
}

fn list_apprentices(roster: &[Apprentice]) {
    println!();
    println!("REGISTERED APPRENTICES:");
    if roster.is_empty() {
        println!("  No apprentices registered yet.");
        return;
    }
    for (i, apprentice) in roster.iter().enumerate() {
        println!();
        println!("  #{}", i + 1);
        print_card(apprentice);
    }
    println!();
    println!("  Total: {}", roster.len());
}

fn search_apprentices(roster: &[Apprentice], use_colors: bool) -> Result<()> {
    println!();
    let needle = prompt("Name to search for: ")?;
    let hits = search(roster, &needle);
    if hits.is_empty() {
        rejected(&format!("No apprentice matches \"{}\"", needle), use_colors);
        return Ok(());
    }
    accepted(&format!("{} found:", hits.len()), use_colors);
    for apprentice in hits {
        println!();
        print_card(apprentice);
        print_signs(apprentice);
    }
    Ok(())
}

fn train_apprentice(roster: &mut [Apprentice], use_colors: bool) -> Result<()> {
    println!();
    if roster.is_empty() {
        rejected("No apprentices available for training.", use_colors);
        return Ok(());
    }

    println!("TRAINING GROUNDS:");
    for (i, apprentice) in roster.iter().enumerate() {
        println!(
            "  {}. {} (level {})",
            i + 1,
            apprentice.name,
            apprentice.level
        );
    }

    let index = loop {
        let raw = prompt(&format!("Pick an apprentice (1-{}): ", roster.len()))?;
        match parse_menu_index(&raw, roster.len()) {
            Ok(index) => break index,
            Err(e) => rejected(&e.to_string(), use_colors),
        }
    };

    let points = loop {
        let raw = prompt("Experience points to grant: ")?;
        match raw.trim().parse::<u32>() {
            Ok(points) => break points,
            Err(_) => rejected(&FieldError::NotANumber.to_string(), use_colors),
        }
    };

    let apprentice = &mut roster[index - 1];
    let (before, after) = train(apprentice, points);
    accepted(
        &format!(
            "{} advanced from level {} to level {}!",
            apprentice.name, before, after
        ),
        use_colors,
    );
    print_signs(apprentice);
    Ok(())
}

fn show_stats(roster: &[Apprentice]) {
    println!();
    println!("ACADEMY STATISTICS:");
    match stats(roster) {
        None => println!("  No data to report yet."),
        Some(stats) => {
            println!("  Apprentices: {}", stats.count);
            println!("  Mean age: {:.1} years", stats.mean_age);
            println!("  Mean level: {:.1}", stats.mean_level);
            println!(
                "  Most experienced: {} (level {})",
                stats.top_name, stats.top_level
            );
        }
    }
}

fn print_card(apprentice: &Apprentice) {
    println!("  Name: {}", apprentice.name);
    println!("  Age: {} years", apprentice.age);
    println!("  Origin: {}", apprentice.origin);
    println!("  Level: {}", apprentice.level);
}

fn print_signs(apprentice: &Apprentice) {
    let mastered: Vec<String> = apprentice
        .mastered_signs()
        .iter()
        .map(|s| capitalize(s.name()))
        .collect();
    println!("  Signs mastered: {}", mastered.join(", "));
    if let Some((sign, remaining)) = apprentice.next_sign() {
        println!(
            "  Next sign: {} in {} levels",
            capitalize(sign.name()),
            remaining
        );
    }
}
