//! Star points earned by finishing assignments, spent on reward cards.

use std::collections::BTreeSet;

use crate::error::{Result, TrackerError};

/// Price of each reward card, indexed by card.
pub const CARD_COSTS: [u32; 4] = [5, 10, 10, 5];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsLedger {
    star_points: u32,
    unlocked: BTreeSet<usize>,
}

impl RewardsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn star_points(&self) -> u32 {
        self.star_points
    }

    pub fn add_star_point(&mut self) {
        self.star_points += 1;
    }

    /// Saturates at zero.
    pub fn remove_star_point(&mut self) {
        self.star_points = self.star_points.saturating_sub(1);
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        self.unlocked.contains(&index)
    }

    pub fn unlocked_cards(&self) -> impl Iterator<Item = usize> + '_ {
        self.unlocked.iter().copied()
    }

    /// Whether the card is locked and currently affordable.
    pub fn can_unlock(&self, index: usize) -> bool {
        CARD_COSTS
            .get(index)
            .is_some_and(|&cost| !self.is_unlocked(index) && self.star_points >= cost)
    }

    /// Spend points on a card.
    pub fn try_unlock(&mut self, index: usize) -> Result<()> {
        let cost = *CARD_COSTS.get(index).ok_or(TrackerError::UnknownCard(index))?;
        if self.is_unlocked(index) {
            return Err(TrackerError::CardAlreadyUnlocked(index));
        }
        if self.star_points < cost {
            return Err(TrackerError::InsufficientPoints {
                needed: cost,
                available: self.star_points,
            });
        }
        self.star_points -= cost;
        self.unlocked.insert(index);
        tracing::info!(card = index, cost, remaining = self.star_points, "reward card unlocked");
        Ok(())
    }
}
