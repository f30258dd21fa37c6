//! Word pairs for the deception mechanic.
//!
//! Each pair holds two related but different words. At game creation one
//! pair is drawn at random: civilians all receive the first word, the
//! undercover players the second, and Mr. White receives nothing.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The curated word-pair table. Both words of a pair are always different.
pub const WORD_PAIRS: &[(&str, &str)] = &[
    ("Apple", "Banana"),
    ("Dog", "Cat"),
    ("Sun", "Moon"),
    ("Coffee", "Tea"),
    ("Car", "Bus"),
    ("Beach", "Mountain"),
    ("Book", "Magazine"),
    ("Guitar", "Piano"),
    ("Sneakers", "Sandals"),
    ("Pencil", "Pen"),
    ("Phone", "Computer"),
    ("River", "Lake"),
    ("Winter", "Summer"),
    ("Fork", "Spoon"),
    ("Chair", "Sofa"),
    ("Soccer", "Basketball"),
    ("Shirt", "Jacket"),
    ("Camera", "Binoculars"),
    ("Butterfly", "Bee"),
    ("Train", "Subway"),
    ("Pizza", "Burger"),
    ("Hotel", "Motel"),
    ("Violin", "Cello"),
    ("Theater", "Cinema"),
    ("Doctor", "Nurse"),
    ("Painting", "Drawing"),
    ("Ocean", "Sea"),
    ("Airplane", "Helicopter"),
    ("Sweater", "Hoodie"),
    ("Strawberry", "Raspberry"),
    ("Milk", "Juice"),
    ("Mouse", "Rat"),
    ("Breakfast", "Dinner"),
    ("Sky", "Cloud"),
    ("Keyboard", "Mouse"),
    ("Map", "Globe"),
    ("Fire", "Smoke"),
    ("Hospital", "Clinic"),
    ("Backpack", "Suitcase"),
    ("Bicycle", "Motorcycle"),
    ("Socks", "Gloves"),
    ("Watch", "Clock"),
    ("Bowl", "Plate"),
    ("Elephant", "Giraffe"),
    ("Diamond", "Ruby"),
    ("Scissors", "Knife"),
    ("Hammer", "Screwdriver"),
    ("Shower", "Bath"),
    ("Glasses", "Contacts"),
    ("Football", "Rugby"),
];

/// A drawn pair of secret words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// The word civilians receive
    pub word1: String,
    /// The word undercover players receive
    pub word2: String,
}

/// Draw one pair uniformly at random from the table.
pub fn random_pair<R: Rng>(rng: &mut R) -> WordPair {
    let (word1, word2) = WORD_PAIRS[rng.gen_range(0..WORD_PAIRS.len())];
    WordPair {
        word1: word1.to_string(),
        word2: word2.to_string(),
    }
}

/// Look up a specific pair by table index.
pub fn pair_at(index: usize) -> Option<WordPair> {
    WORD_PAIRS.get(index).map(|&(word1, word2)| WordPair {
        word1: word1.to_string(),
        word2: word2.to_string(),
    })
}
