/// Store adapter abstraction
///
/// The engine never talks to Redis directly; it is constructed over these
/// traits so the store can be swapped for a test double. Adapters are thin:
/// one lookup per call, no retries or batching, and missing keys resolve to
/// empty results rather than errors.
use crate::{
    error::AppResult,
    models::{Movie, RatingVector},
};

pub mod redis;

pub use self::redis::{create_redis_client, RedisStore};

/// Read/write access to per-user rating vectors
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RatingStore: Send + Sync {
    /// Fetch a user's full rating vector
    ///
    /// Returns an empty vector when the user has no ratings on record.
    async fn get_rating_vector(&self, user_id: &str) -> AppResult<RatingVector>;

    /// List the decoded ids of every user with at least one rating
    async fn list_rating_user_ids(&self) -> AppResult<Vec<String>>;

    /// Add or update a single rating for a user
    async fn add_rating(&self, user_id: &str, movie_id: &str, rating: f64) -> AppResult<()>;
}

/// Read access to movie metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Resolve a movie id to its display title, if the catalog knows it
    async fn get_title(&self, movie_id: &str) -> AppResult<Option<String>>;

    /// Fetch a movie's full metadata record
    async fn get_movie(&self, movie_id: &str) -> AppResult<Option<Movie>>;

    /// List the movie ids tagged with a genre
    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<String>>;
}
