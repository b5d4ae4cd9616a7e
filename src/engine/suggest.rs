use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::types::{PlayerId, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refutation {
    Refuted { refuter: PlayerId, card: Card },
    Unrefuted,
}

impl Refutation {
    #[inline]
    pub fn refuter(&self) -> Option<PlayerId> {
        match self {
            Refutation::Refuted { refuter, .. } => Some(*refuter),
            Refutation::Unrefuted => None,
        }
    }
}

/// Seats asked to refute, nearest first: everyone after `suggester`, wrapping,
/// never the suggester.
#[inline]
pub fn refutation_order(suggester: PlayerId, player_count: usize) -> impl Iterator<Item = PlayerId> {
    (1..player_count).map(move |k| (suggester + k) % player_count)
}

/// Ask each other player in turn order; the first holding any named card
/// shows one of those cards, picked uniformly. Later players are not asked.
pub fn resolve_suggestion<R: Rng + ?Sized>(
    suggester: PlayerId,
    suggestion: &Suggestion,
    hands: &[&[Card]],
    rng: &mut R,
) -> Refutation {
    for seat in refutation_order(suggester, hands.len()) {
        let matching: Vec<&Card> = hands[seat].iter().filter(|c| suggestion.contains(c)).collect();
        trace!("seat {seat} holds {} matching cards", matching.len());
        if let Some(card) = matching.choose(rng) {
            return Refutation::Refuted {
                refuter: seat,
                card: (*card).clone(),
            };
        }
    }
    Refutation::Unrefuted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng_for_event;
    use crate::types::Category;

    fn c(cat: Category, n: &str) -> Card {
        Card::new(cat, n)
    }

    #[test]
    fn order_wraps_and_skips_self() {
        let order: Vec<_> = refutation_order(2, 4).collect();
        assert_eq!(order, vec![3, 0, 1]);
    }

    #[test]
    fn suggester_never_refutes_own_suggestion() {
        let s = Suggestion::new("Luis", "Cuchillo", "Sala");
        let h0 = vec![c(Category::Suspect, "Luis")];
        let h1 = vec![c(Category::Weapon, "Cuerda")];
        let h2 = vec![c(Category::Room, "Cocina")];
        let hands: Vec<&[Card]> = vec![h0.as_slice(), h1.as_slice(), h2.as_slice()];
        let mut rng = rng_for_event(5, 1);
        assert_eq!(resolve_suggestion(0, &s, &hands, &mut rng), Refutation::Unrefuted);
    }

    #[test]
    fn nearest_holder_refutes_with_a_named_card() {
        let s = Suggestion::new("Luis", "Cuchillo", "Sala");
        let h0 = vec![c(Category::Room, "Cocina")];
        let h1 = vec![c(Category::Weapon, "Cuerda")];
        let h2 = vec![c(Category::Room, "Sala"), c(Category::Suspect, "Luis"), c(Category::Room, "Comedor")];
        let h3 = vec![c(Category::Weapon, "Cuchillo")];
        let hands: Vec<&[Card]> = vec![h0.as_slice(), h1.as_slice(), h2.as_slice(), h3.as_slice()];
        for ev in 1..20 {
            let mut rng = rng_for_event(77, ev);
            match resolve_suggestion(0, &s, &hands, &mut rng) {
                Refutation::Refuted { refuter, card } => {
                    assert_eq!(refuter, 2);
                    assert!(card.name == "Sala" || card.name == "Luis");
                }
                Refutation::Unrefuted => panic!("seat 2 can refute"),
            }
        }
    }
}
