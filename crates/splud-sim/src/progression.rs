//! Experience curve and gold ledger.
//!
//! Stored in `SimulationEngine`, NOT as ECS components. Level-ups are
//! reported back to the caller, which applies the stat grants to the player.

use splud_core::constants::{EXP_THRESHOLD_GROWTH, INITIAL_EXP_FOR_NEXT_LEVEL};

/// Running totals for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Spendable gold.
    pub gold: u64,
    /// Gold earned over the whole run, unaffected by spending.
    pub gold_earned: u64,
    /// Experience earned over the whole run.
    pub total_exp: u64,
}

/// Kill score for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u64,
    pub enemies_killed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionTracker {
    level: u32,
    exp_for_next_level: u64,
    ledger: Ledger,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self {
            level: 1,
            exp_for_next_level: INITIAL_EXP_FOR_NEXT_LEVEL,
            ledger: Ledger::default(),
        }
    }
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp_for_next_level(&self) -> u64 {
        self.exp_for_next_level
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Experience shown against the current threshold.
    pub fn exp_into_level(&self) -> u64 {
        self.ledger.total_exp % self.exp_for_next_level
    }

    /// Add a kill's rewards to the running totals.
    pub fn apply_loot(&mut self, exp: u64, gold: u64) {
        self.ledger.total_exp = self.ledger.total_exp.saturating_add(exp);
        self.ledger.gold = self.ledger.gold.saturating_add(gold);
        self.ledger.gold_earned = self.ledger.gold_earned.saturating_add(gold);
    }

    /// Raise the level while accumulated experience covers the scaled
    /// threshold. Returns the new levels reached, in order (empty if none).
    ///
    /// Can gain several levels in one call when a single reward crosses more
    /// than one threshold. A requirement that saturates `u64` is never met.
    pub fn check_level_up(&mut self) -> Vec<u32> {
        let mut reached = Vec::new();
        loop {
            let required = self
                .exp_for_next_level
                .saturating_mul(u64::from(self.level));
            if required == u64::MAX || self.ledger.total_exp < required {
                break;
            }
            self.level = self.level.saturating_add(1);
            // Truncating cast matches the integer threshold table.
            self.exp_for_next_level =
                (self.exp_for_next_level as f64 * EXP_THRESHOLD_GROWTH) as u64;
            reached.push(self.level);
        }
        reached
    }

    /// Deduct `amount` from spendable gold. Returns false (and changes
    /// nothing) when the balance is short.
    pub fn spend(&mut self, amount: u64) -> bool {
        match self.ledger.gold.checked_sub(amount) {
            Some(rest) => {
                self.ledger.gold = rest;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level_up_from_sixty_exp() {
        let mut p = ProgressionTracker::new();
        p.apply_loot(60, 0);
        let reached = p.check_level_up();
        assert_eq!(reached, vec![2]);
        assert_eq!(p.level(), 2);
        assert_eq!(p.exp_for_next_level(), 75);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut p = ProgressionTracker::new();
        p.apply_loot(49, 3);
        assert!(p.check_level_up().is_empty());
        assert_eq!(p.level(), 1);
        assert_eq!(p.ledger().gold, 3);
        assert_eq!(p.exp_into_level(), 49);
    }

    #[test]
    fn test_multiple_levels_in_one_check() {
        let mut p = ProgressionTracker::new();
        // Thresholds: 50*1, then 75*2=150, then 112*3=336, then 168*4=672.
        p.apply_loot(400, 0);
        let reached = p.check_level_up();
        assert_eq!(reached, vec![2, 3, 4]);
        assert_eq!(p.exp_for_next_level(), 168);
    }

    #[test]
    fn test_huge_exp_levels_up_a_bounded_number_of_times() {
        let mut p = ProgressionTracker::new();
        p.apply_loot(u64::MAX, 0);
        let reached = p.check_level_up();
        assert!(!reached.is_empty());
        assert!(reached.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(p.level(), *reached.last().unwrap());
        assert!(p.check_level_up().is_empty());
    }

    #[test]
    fn test_saturating_exp_over_several_rewards() {
        let mut p = ProgressionTracker::new();
        let mut last_level = p.level();
        let mut last_threshold = p.exp_for_next_level();
        for _ in 0..4 {
            p.apply_loot(u64::MAX / 4, 0);
            p.check_level_up();
            assert!(p.level() >= last_level);
            assert!(p.exp_for_next_level() >= last_threshold);
            last_level = p.level();
            last_threshold = p.exp_for_next_level();
        }
        p.apply_loot(u64::MAX, 0);
        p.check_level_up();
        assert!(p.level() >= last_level);
        assert_eq!(p.ledger().total_exp, u64::MAX);
    }

    #[test]
    fn test_level_and_threshold_never_decrease() {
        let mut p = ProgressionTracker::new();
        let mut last_level = p.level();
        let mut last_threshold = p.exp_for_next_level();
        for i in 0..500u64 {
            p.apply_loot(2 + i % 4, 1 + i % 2);
            p.check_level_up();
            assert!(p.level() >= last_level);
            assert!(p.exp_for_next_level() >= last_threshold);
            last_level = p.level();
            last_threshold = p.exp_for_next_level();
        }
        assert!(p.level() > 1);
    }

    #[test]
    fn test_spend_keeps_lifetime_gold() {
        let mut p = ProgressionTracker::new();
        p.apply_loot(0, 20);
        assert!(p.spend(15));
        assert!(!p.spend(6));
        assert_eq!(p.ledger().gold, 5);
        assert_eq!(p.ledger().gold_earned, 20);
    }
}
