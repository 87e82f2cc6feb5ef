use serde::{Deserialize, Serialize};

/// Descriptive metadata for a movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Opaque movie id, as stored
    pub id: String,
    /// Display title
    pub title: String,
    /// Genres the movie is tagged with; empty when the catalog has none
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Movie {
    /// Creates a movie record from raw catalog hash fields
    ///
    /// The catalog stores genres as a JSON-encoded string array; a missing or
    /// malformed field yields an empty genre list rather than an error.
    pub fn from_fields(id: impl Into<String>, title: String, genres_json: Option<&str>) -> Self {
        let genres = genres_json
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();

        Self {
            id: id.into(),
            title,
            genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_parses_genres() {
        let movie = Movie::from_fields(
            "318",
            "The Shawshank Redemption".to_string(),
            Some(r#"["Crime", "Drama"]"#),
        );
        assert_eq!(movie.id, "318");
        assert_eq!(movie.genres, vec!["Crime", "Drama"]);
    }

    #[test]
    fn test_from_fields_tolerates_missing_genres() {
        let movie = Movie::from_fields("1", "Toy Story".to_string(), None);
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_from_fields_tolerates_malformed_genres() {
        let movie = Movie::from_fields("1", "Toy Story".to_string(), Some("not-json"));
        assert!(movie.genres.is_empty());
    }
}
