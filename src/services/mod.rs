pub mod neighbors;
pub mod recommender;
pub mod similarity;
pub mod top_rated;

pub use neighbors::top_neighbors;
pub use recommender::Recommender;
pub use similarity::{user_similarity, SimilarityCache, SimilarityKey};
pub use top_rated::top_rated_for_user;
