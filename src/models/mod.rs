pub mod movie;
pub mod rating;

pub use movie::Movie;
pub use rating::{Neighbor, RatedTitle, RatingVector};
