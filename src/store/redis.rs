use redis::{AsyncCommands, Client};

use crate::{
    error::AppResult,
    models::{Movie, RatingVector},
    store::{MovieCatalog, RatingStore},
};

/// Key prefix for per-user rating sorted sets (`ratings:{user_id}`)
const RATINGS_PREFIX: &str = "ratings:";

/// Creates a Redis client for the ratings and catalog store
///
/// Uses connection pooling via the connection-manager feature.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed implementation of the store adapters
///
/// Key scheme:
/// - `ratings:{user_id}` — sorted set, member = movie id, score = rating
/// - `movie:{movie_id}` — hash with `title` and JSON-encoded `genres` fields
/// - `genre:{genre}` — set of movie ids
#[derive(Clone)]
pub struct RedisStore {
    redis_client: Client,
}

impl RedisStore {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        let conn = self
            .redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Redis connection failed");
                e
            })?;
        Ok(conn)
    }
}

#[async_trait::async_trait]
impl RatingStore for RedisStore {
    async fn get_rating_vector(&self, user_id: &str) -> AppResult<RatingVector> {
        let mut conn = self.connection().await?;
        let entries: Vec<(String, f64)> = conn
            .zrange_withscores(format!("{}{}", RATINGS_PREFIX, user_id), 0, -1)
            .await?;

        Ok(entries.into_iter().collect())
    }

    async fn list_rating_user_ids(&self) -> AppResult<Vec<String>> {
        let mut conn = self.connection().await?;

        let mut user_ids = Vec::new();
        {
            let mut keys = conn
                .scan_match::<_, String>(format!("{}*", RATINGS_PREFIX))
                .await?;
            while let Some(key) = keys.next_item().await {
                if let Some(user_id) = key.strip_prefix(RATINGS_PREFIX) {
                    user_ids.push(user_id.to_string());
                }
            }
        }

        tracing::debug!(user_count = user_ids.len(), "Listed rating-bearing users");
        Ok(user_ids)
    }

    async fn add_rating(&self, user_id: &str, movie_id: &str, rating: f64) -> AppResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn
            .zadd(format!("{}{}", RATINGS_PREFIX, user_id), movie_id, rating)
            .await?;

        tracing::info!(user_id = %user_id, movie_id = %movie_id, rating, "Rating recorded");
        Ok(())
    }
}

#[async_trait::async_trait]
impl MovieCatalog for RedisStore {
    async fn get_title(&self, movie_id: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;
        let title: Option<String> = conn.hget(format!("movie:{}", movie_id), "title").await?;
        Ok(title)
    }

    async fn get_movie(&self, movie_id: &str) -> AppResult<Option<Movie>> {
        let mut conn = self.connection().await?;
        let mut fields: std::collections::HashMap<String, String> =
            conn.hgetall(format!("movie:{}", movie_id)).await?;

        let Some(title) = fields.remove("title") else {
            return Ok(None);
        };

        Ok(Some(Movie::from_fields(
            movie_id,
            title,
            fields.get("genres").map(String::as_str),
        )))
    }

    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let movie_ids: Vec<String> = conn.smembers(format!("genre:{}", genre)).await?;
        Ok(movie_ids)
    }
}
