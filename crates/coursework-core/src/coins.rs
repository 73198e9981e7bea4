//! Bookkeeping for a stash of old Swedish coins.
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::{CourseworkError, Result};

/// A stash of riksdaler and skilling belonging to one owner.
///
/// Balances are never negative; a rejected deposit or withdrawal leaves
/// them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OldCoinStash {
    pub owner: String,
    riksdaler: f64,
    skilling: f64,
}

impl OldCoinStash {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            riksdaler: 0.0,
            skilling: 0.0,
        }
    }

    pub fn riksdaler(&self) -> f64 {
        self.riksdaler
    }

    pub fn skilling(&self) -> f64 {
        self.skilling
    }

    pub fn deposit(&mut self, riksdaler: f64, skilling: f64) -> Result<()> {
        if !(riksdaler >= 0.0 && skilling >= 0.0) || !riksdaler.is_finite() || !skilling.is_finite()
        {
            return Err(CourseworkError::NegativeAmount {
                riksdaler,
                skilling,
            });
        }
        self.riksdaler += riksdaler;
        self.skilling += skilling;
        debug!(
            "{} deposited {} riksdaler and {} skilling",
            self.owner, riksdaler, skilling
        );
        Ok(())
    }

    pub fn withdraw(&mut self, riksdaler: f64, skilling: f64) -> Result<()> {
        if riksdaler > self.riksdaler || skilling > self.skilling {
            return Err(CourseworkError::InsufficientFunds);
        }
        if !(riksdaler >= 0.0 && skilling >= 0.0) {
            return Err(CourseworkError::NegativeWithdrawal {
                riksdaler,
                skilling,
            });
        }
        self.riksdaler -= riksdaler;
        self.skilling -= skilling;
        debug!(
            "{} withdrew {} riksdaler and {} skilling",
            self.owner, riksdaler, skilling
        );
        Ok(())
    }

    pub fn check_balance(&self) -> String {
        format!(
            "Coins in stash: {} riksdaler and {} skillingar.",
            self.riksdaler, self.skilling
        )
    }
}

impl fmt::Display for OldCoinStash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OldCoinStash(owner='{}')", self.owner)
    }
}
