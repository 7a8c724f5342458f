//! The 64 hexagram cards.

use serde::{Deserialize, Serialize};

use crate::board::Trigram::{self, Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// King Wen order: (name, upper trigram, lower trigram).
const KING_WEN: [(&str, Trigram, Trigram); 64] = [
    ("Qian", Qian, Qian),
    ("Kun", Kun, Kun),
    ("Zhun", Kan, Zhen),
    ("Meng", Gen, Kan),
    ("Xu", Kan, Qian),
    ("Song", Qian, Kan),
    ("Shi", Kun, Kan),
    ("Bi", Kan, Kun),
    ("Xiao Chu", Xun, Qian),
    ("Lu", Qian, Dui),
    ("Tai", Kun, Qian),
    ("Pi", Qian, Kun),
    ("Tong Ren", Qian, Li),
    ("Da You", Li, Qian),
    ("Qian (Modesty)", Kun, Gen),
    ("Yu", Zhen, Kun),
    ("Sui", Dui, Zhen),
    ("Gu", Gen, Xun),
    ("Lin", Kun, Dui),
    ("Guan", Xun, Kun),
    ("Shi He", Li, Zhen),
    ("Bi (Grace)", Gen, Li),
    ("Bo", Gen, Kun),
    ("Fu", Kun, Zhen),
    ("Wu Wang", Qian, Zhen),
    ("Da Chu", Gen, Qian),
    ("Yi", Gen, Zhen),
    ("Da Guo", Dui, Xun),
    ("Kan", Kan, Kan),
    ("Li", Li, Li),
    ("Xian", Dui, Gen),
    ("Heng", Zhen, Xun),
    ("Dun", Qian, Gen),
    ("Da Zhuang", Zhen, Qian),
    ("Jin", Li, Kun),
    ("Ming Yi", Kun, Li),
    ("Jia Ren", Xun, Li),
    ("Kui", Li, Dui),
    ("Jian", Kan, Gen),
    ("Jie", Zhen, Kan),
    ("Sun", Gen, Dui),
    ("Yi (Increase)", Xun, Zhen),
    ("Guai", Dui, Qian),
    ("Gou", Qian, Xun),
    ("Cui", Dui, Kun),
    ("Sheng", Kun, Xun),
    ("Kun (Oppression)", Dui, Kan),
    ("Jing", Kan, Xun),
    ("Ge", Dui, Li),
    ("Ding", Li, Xun),
    ("Zhen", Zhen, Zhen),
    ("Gen", Gen, Gen),
    ("Jian (Development)", Xun, Gen),
    ("Gui Mei", Zhen, Dui),
    ("Feng", Zhen, Li),
    ("Lu (Wanderer)", Li, Gen),
    ("Xun", Xun, Xun),
    ("Dui", Dui, Dui),
    ("Huan", Xun, Kan),
    ("Jie (Limitation)", Kan, Dui),
    ("Zhong Fu", Xun, Dui),
    ("Xiao Guo", Zhen, Gen),
    ("Ji Ji", Kan, Li),
    ("Wei Ji", Li, Kan),
];

/// A hexagram card, identified by its King Wen number (1..=64).
///
/// Played cards place influence on one of the two trigrams they are
/// built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hexagram(u8);

impl TryFrom<u8> for Hexagram {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Hexagram::by_number(number).ok_or_else(|| format!("no hexagram numbered {}", number))
    }
}

impl From<Hexagram> for u8 {
    fn from(hexagram: Hexagram) -> u8 {
        hexagram.0
    }
}

impl Hexagram {
    /// Look up a hexagram by King Wen number.
    #[must_use]
    pub fn by_number(number: u8) -> Option<Self> {
        (1..=64).contains(&number).then_some(Self(number))
    }

    /// All 64 hexagrams in King Wen order.
    pub fn all() -> impl Iterator<Item = Hexagram> {
        (1..=64u8).map(Hexagram)
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    fn entry(self) -> &'static (&'static str, Trigram, Trigram) {
        &KING_WEN[usize::from(self.0 - 1)]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().0
    }

    #[must_use]
    pub fn upper(self) -> Trigram {
        self.entry().1
    }

    #[must_use]
    pub fn lower(self) -> Trigram {
        self.entry().2
    }

    /// The zones this card may be played to.
    #[must_use]
    pub fn zones(self) -> [Trigram; 2] {
        [self.upper(), self.lower()]
    }

    #[must_use]
    pub fn fits(self, zone: Trigram) -> bool {
        self.upper() == zone || self.lower() == zone
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} over {})", self.0, self.name(), self.upper(), self.lower())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_trigram_pair_once() {
        let pairs: HashSet<_> = Hexagram::all().map(|h| (h.upper(), h.lower())).collect();
        assert_eq!(pairs.len(), 64);
    }

    #[test]
    fn test_lookup() {
        let tai = Hexagram::by_number(11).unwrap();
        assert_eq!(tai.name(), "Tai");
        assert_eq!(tai.zones(), [Trigram::Kun, Trigram::Qian]);
        assert!(tai.fits(Trigram::Qian));
        assert!(!tai.fits(Trigram::Li));

        assert!(Hexagram::by_number(0).is_none());
        assert!(Hexagram::by_number(65).is_none());
    }

    #[test]
    fn test_pure_hexagram_single_zone() {
        let kan = Hexagram::by_number(29).unwrap();
        assert_eq!(kan.zones(), [Trigram::Kan, Trigram::Kan]);
        assert_eq!(format!("{}", kan), "29 Kan (Kan over Kan)");
    }

    #[test]
    fn test_deserialize_rejects_unknown_number() {
        let jing: Hexagram = serde_json::from_str("48").unwrap();
        assert_eq!(jing.name(), "Jing");
        assert!(serde_json::from_str::<Hexagram>("0").is_err());
        assert!(serde_json::from_str::<Hexagram>("99").is_err());
    }
}
