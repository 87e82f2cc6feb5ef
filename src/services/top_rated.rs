use std::cmp::Ordering;

use crate::{
    error::AppResult,
    models::RatedTitle,
    store::{MovieCatalog, RatingStore},
};

/// Lists a user's own highest-rated movies, resolved to titles
///
/// Movie ids without a catalog entry are dropped, so fewer than `limit`
/// entries may come back.
pub async fn top_rated_for_user(
    ratings: &dyn RatingStore,
    catalog: &dyn MovieCatalog,
    user_id: &str,
    limit: usize,
) -> AppResult<Vec<RatedTitle>> {
    let rating_vector = ratings.get_rating_vector(user_id).await?;

    let mut ranked: Vec<(String, f64)> = rating_vector.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(limit);

    let mut top_rated = Vec::with_capacity(ranked.len());
    for (movie_id, rating) in ranked {
        if let Some(title) = catalog.get_title(&movie_id).await? {
            top_rated.push(RatedTitle { title, rating });
        }
    }

    Ok(top_rated)
}
