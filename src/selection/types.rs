use std::fmt;
use std::str::FromStr;

use super::FieldError;

/// Rendered in place of a motto when the user skipped the prompt.
pub const NO_MOTTO: &str = "no motto";

/// Witcher school the medallion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum School {
    Wolf,
    Griffin,
    Cat,
    Viper,
    Bear,
    Manticore,
}

impl School {
    pub const ALL: [School; 6] = [
        School::Wolf,
        School::Griffin,
        School::Cat,
        School::Viper,
        School::Bear,
        School::Manticore,
    ];

    /// Canonical lowercase name, the form accepted at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            School::Wolf => "wolf",
            School::Griffin => "griffin",
            School::Cat => "cat",
            School::Viper => "viper",
            School::Bear => "bear",
            School::Manticore => "manticore",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            School::Wolf => "🐺",
            School::Griffin => "🦅",
            School::Cat => "🐱",
            School::Viper => "🐍",
            School::Bear => "🐻",
            School::Manticore => "🦁",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            School::Wolf => "versatile and adaptable",
            School::Griffin => "noble and precise",
            School::Cat => "agile and stealthy",
            School::Viper => "mystic and venomous",
            School::Bear => "strong and enduring",
            School::Manticore => "rare and powerful",
        }
    }

    fn options() -> String {
        School::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for School {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(FieldError::Empty);
        }
        School::ALL
            .iter()
            .copied()
            .find(|school| school.name() == s)
            .ok_or_else(|| FieldError::UnknownOption {
                options: School::options(),
            })
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Witcher sign favored by the apprentice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Igni,
    Quen,
    Aard,
    Axii,
    Yrden,
}

impl Sign {
    pub const ALL: [Sign; 5] = [Sign::Igni, Sign::Quen, Sign::Aard, Sign::Axii, Sign::Yrden];

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Igni => "igni",
            Sign::Quen => "quen",
            Sign::Aard => "aard",
            Sign::Axii => "axii",
            Sign::Yrden => "yrden",
        }
    }

    /// Elemental label shown next to the sign on panels.
    pub fn element(&self) -> &'static str {
        match self {
            Sign::Igni => "FIRE",
            Sign::Quen => "SHIELD",
            Sign::Aard => "FORCE",
            Sign::Axii => "MIND",
            Sign::Yrden => "TRAP",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Sign::Igni => "devastating flame",
            Sign::Quen => "protective ward",
            Sign::Aard => "concussive blast",
            Sign::Axii => "mind control",
            Sign::Yrden => "magic snare",
        }
    }

    fn options() -> String {
        Sign::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Sign {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(FieldError::Empty);
        }
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name() == s)
            .ok_or_else(|| FieldError::UnknownOption {
                options: Sign::options(),
            })
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Medallion material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Silver,
    Gold,
    Bronze,
    Ruby,
    Emerald,
    Amethyst,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Silver,
        Color::Gold,
        Color::Bronze,
        Color::Ruby,
        Color::Emerald,
        Color::Amethyst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Silver => "silver",
            Color::Gold => "gold",
            Color::Bronze => "bronze",
            Color::Ruby => "ruby",
            Color::Emerald => "emerald",
            Color::Amethyst => "amethyst",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Color::Silver => "classic and elegant",
            Color::Gold => "luxurious and bright",
            Color::Bronze => "rustic and durable",
            Color::Ruby => "red and mighty",
            Color::Emerald => "green and mystic",
            Color::Amethyst => "purple and enigmatic",
        }
    }

    fn options() -> String {
        Color::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Color {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(FieldError::Empty);
        }
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| FieldError::UnknownOption {
                options: Color::options(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Border drawn around the rendered medallion. Picked by menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Simple,
    Double,
    Ornate,
    Mystic,
    Royal,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Simple,
        BorderStyle::Double,
        BorderStyle::Ornate,
        BorderStyle::Mystic,
        BorderStyle::Royal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Simple => "simple",
            BorderStyle::Double => "double",
            BorderStyle::Ornate => "ornate",
            BorderStyle::Mystic => "mystic",
            BorderStyle::Royal => "royal",
        }
    }

    /// Character repeated along panel edges.
    pub fn edge(&self) -> char {
        match self {
            BorderStyle::Simple => '═',
            BorderStyle::Double => '║',
            BorderStyle::Ornate => '▓',
            BorderStyle::Mystic => '✦',
            BorderStyle::Royal => '♦',
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            BorderStyle::Simple => "clean and minimal",
            BorderStyle::Double => "elegant and strong",
            BorderStyle::Ornate => "rich in detail",
            BorderStyle::Mystic => "arcane sigils",
            BorderStyle::Royal => "fit for kings",
        }
    }

    /// Map a 1-based menu choice to a style.
    pub fn from_index(index: usize) -> Option<BorderStyle> {
        BorderStyle::ALL.get(index.checked_sub(1)?).copied()
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Personal glyph stamped on the medallion front. Picked by menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Sword,
    Shield,
    Book,
    Flame,
    Bolt,
    Star,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Sword,
        Symbol::Shield,
        Symbol::Book,
        Symbol::Flame,
        Symbol::Bolt,
        Symbol::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Sword => "sword",
            Symbol::Shield => "shield",
            Symbol::Book => "book",
            Symbol::Flame => "flame",
            Symbol::Bolt => "bolt",
            Symbol::Star => "star",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Sword => "⚔",
            Symbol::Shield => "🛡",
            Symbol::Book => "📚",
            Symbol::Flame => "🔥",
            Symbol::Bolt => "⚡",
            Symbol::Star => "🌟",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Symbol::Sword => "determination and courage",
            Symbol::Shield => "protection and defense",
            Symbol::Book => "knowledge and wisdom",
            Symbol::Flame => "passion and energy",
            Symbol::Bolt => "speed and power",
            Symbol::Star => "aspiration and brilliance",
        }
    }

    /// Map a 1-based menu choice to a symbol.
    pub fn from_index(index: usize) -> Option<Symbol> {
        Symbol::ALL.get(index.checked_sub(1)?).copied()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fully validated set of user choices. Built once during the prompt
/// flow and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub school: School,
    pub sign: Sign,
    pub weekly_hours: u32,
    pub color: Color,
    pub border: BorderStyle,
    pub motto: Option<String>,
    pub double_sided: bool,
    pub symbol: Symbol,
}

impl Selection {
    pub fn motto_display(&self) -> &str {
        self.motto.as_deref().unwrap_or(NO_MOTTO)
    }
}
