//! A single influence zone.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

use super::Trigram;

/// Controller of a zone given its marker counts.
///
/// The player with strictly the most markers controls the zone if that
/// count is greater than `capacity / 2`. A tie for the most markers means
/// nobody controls it.
#[must_use]
pub fn derive_controller(markers: &PlayerMap<u32>, capacity: u32) -> Option<PlayerId> {
    let threshold = capacity / 2;
    let mut best: Option<(PlayerId, u32)> = None;
    let mut tied = false;

    for (player, &count) in markers.iter() {
        match best {
            Some((_, top)) if count == top => tied = true,
            Some((_, top)) if count < top => {}
            _ => {
                best = Some((player, count));
                tied = false;
            }
        }
    }

    match best {
        Some((player, count)) if !tied && count > threshold => Some(player),
        _ => None,
    }
}

/// Influence markers on one trigram, with the derived controller cached.
///
/// The cache is only written by [`BoardZone::add`], which recomputes it
/// from the markers every time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardZone {
    trigram: Trigram,
    markers: PlayerMap<u32>,
    controller: Option<PlayerId>,
}

impl BoardZone {
    #[must_use]
    pub fn new(trigram: Trigram, player_count: usize) -> Self {
        Self {
            trigram,
            markers: PlayerMap::with_value(player_count, 0),
            controller: None,
        }
    }

    #[must_use]
    pub fn trigram(&self) -> Trigram {
        self.trigram
    }

    #[must_use]
    pub fn markers(&self, player: PlayerId) -> u32 {
        self.markers[player]
    }

    #[must_use]
    pub fn all_markers(&self) -> &PlayerMap<u32> {
        &self.markers
    }

    #[must_use]
    pub fn controller(&self) -> Option<PlayerId> {
        self.controller
    }

    /// Total markers from every player.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.markers.iter().map(|(_, &c)| c).sum()
    }

    /// Add (or with a negative amount, remove) markers, then recompute control.
    ///
    /// Counts saturate at zero. Returns the player's new count.
    pub fn add(&mut self, player: PlayerId, amount: i64, capacity: u32) -> u32 {
        let count = &mut self.markers[player];
        *count = (i64::from(*count) + amount).clamp(0, i64::from(u32::MAX)) as u32;
        let updated = *count;
        self.controller = derive_controller(&self.markers, capacity);
        updated
    }
}
