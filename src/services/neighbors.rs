use std::cmp::Ordering;

use crate::{
    error::AppResult,
    models::Neighbor,
    services::similarity::{user_similarity, SimilarityCache},
    store::RatingStore,
};

/// Ranks the users most similar to a target user
///
/// Scores every other rating-bearing user against the target and returns the
/// top `k` by similarity, descending. Zero and negative scores are retained:
/// a negatively correlated neighbor later subtracts weight from the movies it
/// rated, which is intentional collaborative-filtering behavior.
pub async fn top_neighbors(
    store: &dyn RatingStore,
    target_user_id: &str,
    all_user_ids: &[String],
    cache: &mut SimilarityCache,
    k: usize,
) -> AppResult<Vec<Neighbor>> {
    let target_ratings = store.get_rating_vector(target_user_id).await?;

    let mut neighbors = Vec::with_capacity(all_user_ids.len().saturating_sub(1));
    for user_id in all_user_ids {
        if user_id == target_user_id {
            continue;
        }

        let other_ratings = store.get_rating_vector(user_id).await?;
        let similarity = user_similarity(
            cache,
            target_user_id,
            &target_ratings,
            user_id,
            &other_ratings,
        );
        neighbors.push(Neighbor::new(user_id.clone(), similarity));
    }

    // Stable sort keeps input order among equal scores
    neighbors.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    neighbors.truncate(k);

    tracing::debug!(
        target_user_id = %target_user_id,
        neighbor_count = neighbors.len(),
        "Selected nearest neighbors"
    );

    Ok(neighbors)
}
