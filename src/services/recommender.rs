use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{neighbors::top_neighbors, similarity::SimilarityCache},
    store::{MovieCatalog, RatingStore},
};

/// Collaborative-filtering recommendation service
///
/// Aggregates neighbor ratings, weighted by similarity to the target user,
/// into a ranked list of movie titles the target has not rated yet. Both
/// store adapters are injected so the service can run against any backend.
pub struct Recommender {
    ratings: Arc<dyn RatingStore>,
    catalog: Arc<dyn MovieCatalog>,
    neighbor_count: usize,
    recommendation_count: usize,
}

impl Recommender {
    pub fn new(
        ratings: Arc<dyn RatingStore>,
        catalog: Arc<dyn MovieCatalog>,
        config: &Config,
    ) -> Self {
        Self {
            ratings,
            catalog,
            neighbor_count: config.neighbor_count,
            recommendation_count: config.recommendation_count,
        }
    }

    /// Recommends up to `limit` movie titles for a user
    ///
    /// A movie the user has already rated is never recommended. Movie ids
    /// with no resolvable title are dropped, so the result may be shorter
    /// than `limit`. Every call works from a fresh similarity cache; nothing
    /// is shared across requests.
    pub async fn recommend(&self, user_id: &str, limit: usize) -> AppResult<Vec<String>> {
        let mut cache = SimilarityCache::new();

        let target_ratings = self.ratings.get_rating_vector(user_id).await?;
        let all_user_ids = self.ratings.list_rating_user_ids().await?;

        let neighbors = top_neighbors(
            self.ratings.as_ref(),
            user_id,
            &all_user_ids,
            &mut cache,
            self.neighbor_count,
        )
        .await?;

        let mut candidate_scores: HashMap<String, f64> = HashMap::new();
        for neighbor in &neighbors {
            if neighbor.user_id == user_id {
                continue;
            }

            let neighbor_ratings = self.ratings.get_rating_vector(&neighbor.user_id).await?;
            for (movie_id, rating) in neighbor_ratings {
                if !target_ratings.contains_key(&movie_id) {
                    *candidate_scores.entry(movie_id).or_insert(0.0) +=
                        neighbor.similarity * rating;
                }
            }
        }

        let mut ranked: Vec<(String, f64)> = candidate_scores.into_iter().collect();
        // Movie-id tiebreak keeps equal-score output deterministic
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(limit);

        let mut titles = Vec::with_capacity(ranked.len());
        for (movie_id, _) in ranked {
            if let Some(title) = self.catalog.get_title(&movie_id).await? {
                titles.push(title);
            }
        }

        tracing::info!(
            user_id = %user_id,
            neighbor_count = neighbors.len(),
            recommendation_count = titles.len(),
            "Recommendations computed"
        );

        Ok(titles)
    }

    /// Records a rating and refreshes the user's recommendations
    ///
    /// The refresh is synchronous write-through: the next `recommend` call
    /// for this user sees the new rating without any further trigger.
    pub async fn add_rating(&self, user_id: &str, movie_id: &str, rating: f64) -> AppResult<()> {
        self.ratings.add_rating(user_id, movie_id, rating).await?;

        let refreshed = self.recommend(user_id, self.recommendation_count).await?;
        tracing::debug!(
            user_id = %user_id,
            recommendation_count = refreshed.len(),
            "Recommendations refreshed after rating write"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingVector;
    use crate::store::{MockMovieCatalog, MockRatingStore};

    fn vector(entries: &[(&str, f64)]) -> RatingVector {
        entries
            .iter()
            .map(|(id, rating)| (id.to_string(), *rating))
            .collect()
    }

    fn fixture_ratings() -> MockRatingStore {
        let mut store = MockRatingStore::new();
        store.expect_get_rating_vector().returning(|user_id| {
            Ok(match user_id {
                "u1" => vector(&[("m1", 5.0), ("m2", 3.0), ("m3", 4.0)]),
                "u2" => vector(&[("m1", 4.0), ("m2", 2.0), ("m3", 3.0), ("m4", 5.0), ("m5", 2.0)]),
                _ => RatingVector::new(),
            })
        });
        store
            .expect_list_rating_user_ids()
            .returning(|| Ok(vec!["u1".to_string(), "u2".to_string()]));
        store
    }

    fn fixture_catalog() -> MockMovieCatalog {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_get_title().returning(|movie_id| {
            Ok(match movie_id {
                "m4" => Some("Heat".to_string()),
                "m5" => Some("Se7en".to_string()),
                _ => None,
            })
        });
        catalog
    }

    fn recommender(ratings: MockRatingStore, catalog: MockMovieCatalog) -> Recommender {
        Recommender::new(Arc::new(ratings), Arc::new(catalog), &Config::default())
    }

    #[tokio::test]
    async fn test_never_recommends_already_rated_movies() {
        let service = recommender(fixture_ratings(), fixture_catalog());

        let titles = service.recommend("u1", 5).await.unwrap();

        // m1..m3 are rated by u1; only m4 and m5 are candidates
        assert_eq!(titles, vec!["Heat".to_string(), "Se7en".to_string()]);
    }

    #[tokio::test]
    async fn test_respects_limit_and_score_order() {
        let service = recommender(fixture_ratings(), fixture_catalog());

        // m4 accumulates similarity * 5.0, m5 similarity * 2.0
        let titles = service.recommend("u1", 1).await.unwrap();
        assert_eq!(titles, vec!["Heat".to_string()]);
    }

    #[tokio::test]
    async fn test_unresolvable_titles_are_dropped() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_get_title().returning(|movie_id| {
            Ok(match movie_id {
                "m5" => Some("Se7en".to_string()),
                _ => None,
            })
        });
        let service = recommender(fixture_ratings(), catalog);

        // m4 outranks m5 but has no catalog entry, so the list shrinks
        let titles = service.recommend("u1", 5).await.unwrap();
        assert_eq!(titles, vec!["Se7en".to_string()]);
    }

    #[tokio::test]
    async fn test_no_neighbors_yields_empty_list() {
        let mut store = MockRatingStore::new();
        store
            .expect_get_rating_vector()
            .returning(|_| Ok(RatingVector::new()));
        store
            .expect_list_rating_user_ids()
            .returning(|| Ok(vec!["u1".to_string()]));

        let service = recommender(store, MockMovieCatalog::new());

        let titles = service.recommend("u1", 5).await.unwrap();
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_add_rating_writes_through_store() {
        let mut store = fixture_ratings();
        store
            .expect_add_rating()
            .withf(|user_id, movie_id, rating| {
                user_id == "u1" && movie_id == "m9" && *rating == 4.5
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = recommender(store, fixture_catalog());
        service.add_rating("u1", "m9", 4.5).await.unwrap();
    }
}
