use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, Deck};
use crate::error::GameError;
use crate::rules::check_player_count;
use crate::types::{Category, Solution};

/// Draw the secret: one item per category, uniformly and independently.
pub fn generate_solution<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Result<Solution, GameError> {
    let mut pick = |category: Category| -> Result<String, GameError> {
        deck.items(category)
            .choose(rng)
            .map(|s| s.to_string())
            .ok_or_else(|| GameError::invariant(format!("deck has no {category} items")))
    };
    let suspect = pick(Category::Suspect)?;
    let weapon = pick(Category::Weapon)?;
    let room = pick(Category::Room)?;
    Ok(Solution {
        suspect,
        weapon,
        room,
    })
}

/// Shuffle every non-solution card and deal round-robin from player 0.
/// Hand sizes differ by at most one.
pub fn deal<R: Rng + ?Sized>(
    deck: &Deck,
    solution: &Solution,
    player_count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<Card>>, GameError> {
    check_player_count(player_count)?;

    let mut pool: Vec<Card> = deck
        .cards()
        .filter(|c| !solution.contains(c))
        .cloned()
        .collect();
    pool.shuffle(rng);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(pool.len() / player_count + 1); player_count];
    for (i, card) in pool.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    Ok(hands)
}
