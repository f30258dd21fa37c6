//! Roles and shuffled role assignment.

use crate::game::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of Mr. White seats in a single game.
pub const MAX_MR_WHITE: u32 = 2;

/// The three secret roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Majority role; knows the primary secret word
    Civilian,
    /// Minority role; knows a different-but-related word
    Undercover,
    /// Wildcard role; knows no word at all
    #[serde(rename = "Mr. White")]
    MrWhite,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Civilian => write!(f, "Civilian"),
            Role::Undercover => write!(f, "Undercover"),
            Role::MrWhite => write!(f, "Mr. White"),
        }
    }
}

/// How many seats each role gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDistribution {
    pub civilians: u32,
    pub undercover: u32,
    pub mr_white: u32,
}

impl RoleDistribution {
    /// The default quota for a given player count: one Mr. White, undercover
    /// count scaling with the roster, civilians taking the remainder.
    pub fn default_for(player_count: u32) -> Self {
        let undercover = match player_count {
            0..=6 => 1,
            7..=10 => 2,
            _ => 3,
        };
        let mr_white = 1;

        Self {
            civilians: player_count.saturating_sub(undercover + mr_white),
            undercover,
            mr_white,
        }
    }

    /// Total number of seats this distribution covers.
    pub fn total(&self) -> u32 {
        self.civilians + self.undercover + self.mr_white
    }

    /// Check the distribution against a roster size.
    pub fn validate(&self, player_count: u32) -> Result<(), GameError> {
        if self.total() != player_count {
            return Err(GameError::DistributionMismatch {
                expected: player_count,
                actual: self.total(),
            });
        }
        if self.civilians == 0 {
            return Err(GameError::NoCivilians);
        }
        if self.mr_white > MAX_MR_WHITE {
            return Err(GameError::TooManyMrWhites);
        }
        Ok(())
    }

    /// Produce the role-to-seat mapping: the exact multiset of roles in a
    /// uniformly random order. Callers validate the distribution first.
    pub fn assign<R: Rng>(&self, rng: &mut R) -> Vec<Role> {
        let mut roles = Vec::with_capacity(self.total() as usize);
        roles.extend(std::iter::repeat(Role::Civilian).take(self.civilians as usize));
        roles.extend(std::iter::repeat(Role::Undercover).take(self.undercover as usize));
        roles.extend(std::iter::repeat(Role::MrWhite).take(self.mr_white as usize));
        roles.shuffle(rng);
        roles
    }
}
