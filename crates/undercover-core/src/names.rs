//! Random display-name generation.
//!
//! Names are drawn from a cross product of first- and last-name pools. A
//! batch never repeats a first name, so two players can always be told
//! apart at a glance; last names may repeat.

use crate::game::GameError;
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Sam", "Mike", "Sarah", "David", "Emma", "Chris", "Lisa", "Tom",
    "Anna", "Mark", "Laura", "James", "Amy", "Daniel", "Olivia", "Ryan", "Emily",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
    "Martinez", "Robinson",
];

/// Largest roster `generate_names` can serve without repeating a first name.
pub const MAX_GENERATED_NAMES: usize = FIRST_NAMES.len();

/// Generate `count` distinct display names.
pub fn generate_names<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<String>, GameError> {
    if count > FIRST_NAMES.len() {
        return Err(GameError::NamePoolExhausted {
            requested: count,
            available: FIRST_NAMES.len(),
        });
    }

    let mut firsts: Vec<&str> = FIRST_NAMES.to_vec();
    firsts.shuffle(rng);

    Ok(firsts
        .into_iter()
        .take(count)
        .map(|first| {
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            format!("{} {}", first, last)
        })
        .collect())
}
