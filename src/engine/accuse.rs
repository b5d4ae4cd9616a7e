use crate::types::{Accusation, Solution};

/// Exact, case-sensitive match on all three items.
#[inline]
pub fn judge_accusation(accusation: &Accusation, solution: &Solution) -> bool {
    accusation == solution
}
