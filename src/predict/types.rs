use serde::{Deserialize, Serialize};

/// Marker rendered for any field the remote services could not guess.
pub const FALLBACK: &str = "N/A";

#[derive(Debug, Deserialize)]
pub struct AgeGuess {
    pub age: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GenderGuess {
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryGuess {
    pub country_id: String,
    #[serde(default)]
    pub probability: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct NationalityGuess {
    #[serde(default)]
    pub country: Vec<CountryGuess>,
}

/// Composite assembled per request from the three service responses;
/// discarded after render.
#[derive(Debug, Serialize)]
pub struct Prediction {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub country: Vec<CountryGuess>,
}

impl Prediction {
    pub fn age_text(&self) -> String {
        self.age
            .map(|age| age.to_string())
            .unwrap_or_else(|| FALLBACK.into())
    }

    pub fn gender_text(&self) -> &str {
        self.gender.as_deref().unwrap_or(FALLBACK)
    }

    /// First country code of the guess list, or the fallback marker.
    pub fn nationality(&self) -> &str {
        self.country
            .first()
            .map(|c| c.country_id.as_str())
            .unwrap_or(FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::{AgeGuess, GenderGuess, NationalityGuess, Prediction};

    #[test]
    fn parses_agify_shape() {
        let guess: AgeGuess =
            serde_json::from_str(r#"{"name":"alice","age":32,"count":12345}"#).unwrap();
        assert_eq!(guess.age, Some(32));

        let null_age: AgeGuess = serde_json::from_str(r#"{"name":"zzzz","age":null}"#).unwrap();
        assert_eq!(null_age.age, None);
    }

    #[test]
    fn parses_genderize_shape() {
        let guess: GenderGuess =
            serde_json::from_str(r#"{"gender":"female","probability":0.98}"#).unwrap();
        assert_eq!(guess.gender.as_deref(), Some("female"));

        let unknown: GenderGuess =
            serde_json::from_str(r#"{"gender":null,"probability":0.0}"#).unwrap();
        assert!(unknown.gender.is_none());
    }

    #[test]
    fn parses_nationalize_shape() {
        let guess: NationalityGuess = serde_json::from_str(
            r#"{"country":[{"country_id":"US","probability":0.3},{"country_id":"GB","probability":0.1}]}"#,
        )
        .unwrap();
        assert_eq!(guess.country[0].country_id, "US");

        // The country field may be missing entirely.
        let empty: NationalityGuess = serde_json::from_str(r#"{"name":"alice"}"#).unwrap();
        assert!(empty.country.is_empty());
    }

    #[test]
    fn composite_falls_back_per_field() {
        let prediction = Prediction {
            name: "alice".into(),
            age: None,
            gender: None,
            country: Vec::new(),
        };

        assert_eq!(prediction.age_text(), "N/A");
        assert_eq!(prediction.gender_text(), "N/A");
        assert_eq!(prediction.nationality(), "N/A");
    }

    #[test]
    fn composite_reads_first_country() {
        let guess: NationalityGuess = serde_json::from_str(
            r#"{"country":[{"country_id":"US","probability":0.3},{"country_id":"GB","probability":0.1}]}"#,
        )
        .unwrap();

        let prediction = Prediction {
            name: "alice".into(),
            age: Some(32),
            gender: Some("female".into()),
            country: guess.country,
        };

        assert_eq!(prediction.age_text(), "32");
        assert_eq!(prediction.gender_text(), "female");
        assert_eq!(prediction.nationality(), "US");
    }
}
