use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user's sparse movie-id → rating mapping
///
/// May be empty: a user with no ratings in the store resolves to an empty
/// vector, never to an error.
pub type RatingVector = HashMap<String, f64>;

/// Another user ranked by similarity to a target user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighbor {
    /// Decoded user id (no store key prefix)
    pub user_id: String,
    /// Pearson similarity to the target user, in [-1, 1]
    pub similarity: f64,
}

impl Neighbor {
    pub fn new(user_id: impl Into<String>, similarity: f64) -> Self {
        Self {
            user_id: user_id.into(),
            similarity,
        }
    }
}

/// A resolved title paired with the rating the user gave it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatedTitle {
    pub title: String,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_neighbor() {
        let neighbor = Neighbor::new("42", 0.87);
        assert_eq!(neighbor.user_id, "42");
        assert_eq!(neighbor.similarity, 0.87);
    }
}
