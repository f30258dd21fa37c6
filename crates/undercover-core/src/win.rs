//! Win-condition evaluation.
//!
//! [`evaluate_winner`] is a pure function over the player set, run after
//! every elimination. Rule order is significant: the survival rules are
//! checked before the elimination rules so the game stops as soon as the
//! active roster is critically small.

use crate::player::Player;
use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// How a winner won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinReason {
    /// The opposing roles were all voted out
    Elimination,
    /// Survived to a critically small roster
    Survival,
    /// Mr. White guessed the civilian word
    Guess,
}

/// A declared winner. At most one per completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub role: Role,
    pub reason: WinReason,
}

/// Evaluate the current player set for a winner.
pub fn evaluate_winner(players: &[Player]) -> Option<Winner> {
    let active: Vec<&Player> = players.iter().filter(|p| p.is_active()).collect();

    let civilians = active.iter().filter(|p| p.role == Role::Civilian).count();
    let undercover = active.iter().filter(|p| p.role == Role::Undercover).count();
    let mr_white = active.iter().filter(|p| p.role == Role::MrWhite).count();

    // Lone survivor takes the game, whatever their role.
    if active.len() == 1 {
        return Some(Winner {
            role: active[0].role,
            reason: WinReason::Survival,
        });
    }

    // Mr. White only needs to reach the final two.
    if active.len() == 2 && mr_white > 0 {
        return Some(Winner {
            role: Role::MrWhite,
            reason: WinReason::Survival,
        });
    }

    // Every impostor is out.
    if undercover == 0 && mr_white == 0 && civilians > 0 {
        return Some(Winner {
            role: Role::Civilian,
            reason: WinReason::Elimination,
        });
    }

    // Undercover matched or outnumbered the civilians with Mr. White gone.
    if mr_white == 0 && undercover > 0 && undercover >= civilians {
        return Some(Winner {
            role: Role::Undercover,
            reason: WinReason::Elimination,
        });
    }

    None
}
