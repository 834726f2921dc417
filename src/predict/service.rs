use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

use crate::predict::types::{AgeGuess, GenderGuess, NationalityGuess, Prediction};

/// Client for the three public demographic-guessing services. One shared
/// connection pool; base URLs are overridable through the environment.
#[derive(Clone)]
pub struct PredictionService {
    client: reqwest::Client,
    agify_url: String,
    genderize_url: String,
    nationalize_url: String,
}

impl PredictionService {
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            agify_url: dotenvy::var("AGIFY_URL").unwrap_or_else(|_| "https://api.agify.io".into()),
            genderize_url: dotenvy::var("GENDERIZE_URL")
                .unwrap_or_else(|_| "https://api.genderize.io".into()),
            nationalize_url: dotenvy::var("NATIONALIZE_URL")
                .unwrap_or_else(|_| "https://api.nationalize.io".into()),
        }
    }

    /// Query all three services concurrently. The first sub-call failure
    /// fails the whole aggregation; there are no partial results.
    pub async fn predict(&self, name: &str) -> Result<Prediction> {
        let (age, gender, nationality) = tokio::try_join!(
            self.predicted_age(name),
            self.predicted_gender(name),
            self.predicted_nationality(name),
        )?;

        Ok(Prediction {
            name: name.to_string(),
            age: age.age,
            gender: gender.gender,
            country: nationality.country,
        })
    }

    async fn predicted_age(&self, name: &str) -> Result<AgeGuess> {
        self.fetch_guess(&self.agify_url, name).await
    }

    async fn predicted_gender(&self, name: &str) -> Result<GenderGuess> {
        self.fetch_guess(&self.genderize_url, name).await
    }

    async fn predicted_nationality(&self, name: &str) -> Result<NationalityGuess> {
        self.fetch_guess(&self.nationalize_url, name).await
    }

    async fn fetch_guess<T: DeserializeOwned>(&self, base_url: &str, name: &str) -> Result<T> {
        let response = self
            .client
            .get(base_url)
            .query(&[("name", name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "prediction_service_error: {} returned {}",
                base_url,
                response.status()
            ));
        }

        Ok(response.json().await?)
    }
}
