//! Board zones (the eight trigrams) and player positions (the three realms).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{EngineError, LookupKind};

/// One of the eight trigrams. Each is a zone on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigram {
    Qian,
    Kun,
    Zhen,
    Xun,
    Kan,
    Li,
    Gen,
    Dui,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Kun,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Li,
        Trigram::Gen,
        Trigram::Dui,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn pinyin(self) -> &'static str {
        match self {
            Trigram::Qian => "Qian",
            Trigram::Kun => "Kun",
            Trigram::Zhen => "Zhen",
            Trigram::Xun => "Xun",
            Trigram::Kan => "Kan",
            Trigram::Li => "Li",
            Trigram::Gen => "Gen",
            Trigram::Dui => "Dui",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Trigram::Qian => '乾',
            Trigram::Kun => '坤',
            Trigram::Zhen => '震',
            Trigram::Xun => '巽',
            Trigram::Kan => '坎',
            Trigram::Li => '离',
            Trigram::Gen => '艮',
            Trigram::Dui => '兑',
        }
    }

    /// The natural image the trigram stands for.
    #[must_use]
    pub const fn image(self) -> &'static str {
        match self {
            Trigram::Qian => "Heaven",
            Trigram::Kun => "Earth",
            Trigram::Zhen => "Thunder",
            Trigram::Xun => "Wind",
            Trigram::Kan => "Water",
            Trigram::Li => "Fire",
            Trigram::Gen => "Mountain",
            Trigram::Dui => "Lake",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pinyin())
    }
}

impl FromStr for Trigram {
    type Err = EngineError;

    /// Accepts the pinyin name, the image name or the character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Trigram::ALL
            .into_iter()
            .find(|t| {
                key.eq_ignore_ascii_case(t.pinyin())
                    || key.eq_ignore_ascii_case(t.image())
                    || key.chars().eq(std::iter::once(t.symbol()))
            })
            .ok_or_else(|| EngineError::not_found(LookupKind::Zone, key))
    }
}

/// Where a player stands: one of the three realms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Di. Arriving here grants Insight.
    #[default]
    Earth,
    /// Ren. Arriving here grants Sincerity.
    Humanity,
    /// Tian. Arriving here grants Qi; meditation is stronger here.
    Heaven,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Earth, Position::Humanity, Position::Heaven];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Position::Earth => '地',
            Position::Humanity => '人',
            Position::Heaven => '天',
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Position::Earth => "Earth",
            Position::Humanity => "Humanity",
            Position::Heaven => "Heaven",
        };
        f.write_str(name)
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let found = match key.to_ascii_lowercase().as_str() {
            "earth" | "di" | "地" => Some(Position::Earth),
            "humanity" | "ren" | "人" => Some(Position::Humanity),
            "heaven" | "tian" | "天" => Some(Position::Heaven),
            _ => None,
        };
        found.ok_or_else(|| EngineError::not_found(LookupKind::Position, key))
    }
}
