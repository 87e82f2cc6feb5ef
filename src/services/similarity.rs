use std::collections::HashMap;
use std::fmt::Display;

use crate::models::RatingVector;

/// Canonical cache key for a pair of users
///
/// The pair is ordered lexicographically on construction, so the same two
/// users produce the same key regardless of argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimilarityKey {
    first: String,
    second: String,
}

impl SimilarityKey {
    pub fn new(user_a: &str, user_b: &str) -> Self {
        if user_a <= user_b {
            Self {
                first: user_a.to_string(),
                second: user_b.to_string(),
            }
        } else {
            Self {
                first: user_b.to_string(),
                second: user_a.to_string(),
            }
        }
    }
}

impl Display for SimilarityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sim:{}:{}", self.first, self.second)
    }
}

/// Memoized similarity scores for one recommendation request
///
/// Insert-only for the life of a request, never shared across requests.
#[derive(Debug, Default)]
pub struct SimilarityCache {
    scores: HashMap<SimilarityKey, f64>,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SimilarityKey) -> Option<f64> {
        self.scores.get(key).copied()
    }

    pub fn insert(&mut self, key: SimilarityKey, score: f64) {
        self.scores.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Computes the Pearson similarity between two users' rating vectors
///
/// The score is correlation over the movies both users rated: 1.0 for
/// perfectly aligned tastes, -1.0 for opposed ones. Pairs with no common
/// movies, or with zero rating variance over the common movies, score 0.
/// Results are memoized in the per-request cache under the canonical key.
pub fn user_similarity(
    cache: &mut SimilarityCache,
    user_a: &str,
    ratings_a: &RatingVector,
    user_b: &str,
    ratings_b: &RatingVector,
) -> f64 {
    let key = SimilarityKey::new(user_a, user_b);
    if let Some(cached) = cache.get(&key) {
        tracing::debug!(key = %key, "Similarity cache hit");
        return cached;
    }

    let score = pearson(ratings_a, ratings_b);
    cache.insert(key, score);
    score
}

/// Pearson correlation over the movies present in both vectors
fn pearson(ratings_a: &RatingVector, ratings_b: &RatingVector) -> f64 {
    let common: Vec<(f64, f64)> = ratings_a
        .iter()
        .filter_map(|(movie_id, &a)| ratings_b.get(movie_id).map(|&b| (a, b)))
        .collect();

    let n = common.len() as f64;
    if common.is_empty() {
        return 0.0;
    }

    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    let mut sq_sum_a = 0.0;
    let mut sq_sum_b = 0.0;
    let mut product_sum = 0.0;

    for (a, b) in common {
        sum_a += a;
        sum_b += b;
        sq_sum_a += a * a;
        sq_sum_b += b * b;
        product_sum += a * b;
    }

    let numerator = product_sum - (sum_a * sum_b / n);
    let denominator =
        ((sq_sum_a - sum_a * sum_a / n) * (sq_sum_b - sum_b * sum_b / n)).sqrt();

    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}
