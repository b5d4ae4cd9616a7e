use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::{KnowledgeSnapshot, Status};
use crate::types::Solution;

pub const PREPOSITIONS: [&str; 5] = ["con", "en", "por", "mediante", "utilizando"];

pub fn rules_text() -> &'static str {
    "\
Goal: find out who committed the murder, with which weapon, and in which room.
1. At the start one card of each category (suspect, weapon, room) is drawn at random and hidden: that is the solution.
2. The remaining cards are dealt to the players as evenly as possible.
3. On your turn:
   - Move your token into a room.
   - From a room you may make a suggestion naming a suspect, a weapon and that room.
   - Going round the table from your left, the first player holding any of the named cards shows you one of them in private.
4. When you think you know the solution, make an accusation.
5. A correct accusation wins. A wrong one eliminates you; your cards leave the game.
6. Play goes on until someone accuses correctly or only one player is left standing."
}

/// The solution as a sentence, with a random connective before each item.
pub fn solution_sentence<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> String {
    let mut prep = || PREPOSITIONS.choose(rng).copied().unwrap_or("con");
    let (p1, p2, p3) = (prep(), prep(), prep());
    format!(
        "El crimen fue cometido {p1} {}, {p2} {}, {p3} {}.",
        solution.suspect, solution.weapon, solution.room
    )
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unknown => f.write_str("unknown"),
            Status::Cleared => f.write_str("cleared"),
        }
    }
}

impl fmt::Display for KnowledgeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.categories.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", report.category.plural())?;
            for e in &report.entries {
                let mark = if e.checked { " [x]" } else { "" };
                writeln!(f, "  - {}: {}{mark}", e.name, e.status)?;
            }
        }
        Ok(())
    }
}
