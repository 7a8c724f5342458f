//! The board: all eight zones.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerId};

use super::{BoardZone, Trigram};

/// Eight trigram zones sharing one per-zone capacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardModel {
    capacity: u32,
    zones: Vec<BoardZone>,
}

impl BoardModel {
    /// Create an empty board. `capacity` sets the majority rule.
    #[must_use]
    pub fn new(player_count: usize, capacity: u32) -> Self {
        Self {
            capacity,
            zones: Trigram::ALL
                .iter()
                .map(|&t| BoardZone::new(t, player_count))
                .collect(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Markers needed to control a zone: strictly more than this.
    #[must_use]
    pub fn majority_threshold(&self) -> u32 {
        self.capacity / 2
    }

    #[must_use]
    pub fn zone(&self, trigram: Trigram) -> &BoardZone {
        &self.zones[trigram.index()]
    }

    /// Look a zone up by name (pinyin, image or character).
    pub fn zone_by_name(&self, name: &str) -> Result<&BoardZone, EngineError> {
        let trigram: Trigram = name.parse()?;
        Ok(self.zone(trigram))
    }

    /// Zones in `Trigram::ALL` order.
    pub fn zones(&self) -> impl Iterator<Item = &BoardZone> {
        self.zones.iter()
    }

    /// Add (or remove) markers and recompute the zone's controller.
    ///
    /// Returns the player's new marker count in that zone.
    pub fn add_influence(&mut self, trigram: Trigram, player: PlayerId, amount: i64) -> u32 {
        let capacity = self.capacity;
        self.zones[trigram.index()].add(player, amount, capacity)
    }

    #[must_use]
    pub fn markers(&self, trigram: Trigram, player: PlayerId) -> u32 {
        self.zone(trigram).markers(player)
    }

    #[must_use]
    pub fn controller(&self, trigram: Trigram) -> Option<PlayerId> {
        self.zone(trigram).controller()
    }

    #[must_use]
    pub fn controlled_zone_count(&self, player: PlayerId) -> usize {
        self.zones
            .iter()
            .filter(|z| z.controller() == Some(player))
            .count()
    }

    #[must_use]
    pub fn controlled_zones(&self, player: PlayerId) -> Vec<Trigram> {
        self.zones
            .iter()
            .filter(|z| z.controller() == Some(player))
            .map(BoardZone::trigram)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_controlled_zone_count() {
        let mut board = BoardModel::new(2, 5);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        board.add_influence(Trigram::Qian, p0, 3);
        board.add_influence(Trigram::Kun, p0, 3);
        board.add_influence(Trigram::Zhen, p1, 3);
        board.add_influence(Trigram::Xun, p1, 1);

        assert_eq!(board.controlled_zone_count(p0), 2);
        assert_eq!(board.controlled_zone_count(p1), 1);
        assert_eq!(board.controlled_zones(p0), vec![Trigram::Qian, Trigram::Kun]);
        assert_eq!(board.controller(Trigram::Xun), None);
    }

    #[test]
    fn test_zone_by_name() {
        let mut board = BoardModel::new(3, 6);
        board.add_influence(Trigram::Dui, PlayerId::new(2), 2);

        assert_eq!(board.zone_by_name("dui").unwrap().markers(PlayerId::new(2)), 2);
        assert_eq!(
            board.zone_by_name("Atlantis").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_board_layout() {
        let board = BoardModel::new(4, 7);
        assert_eq!(board.zones().count(), 8);
        assert_eq!(board.majority_threshold(), 3);
        assert!(board.zones().all(|z| z.total() == 0));
    }
}
