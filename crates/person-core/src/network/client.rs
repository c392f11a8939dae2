//! HTTP client for the persons REST endpoint.
//!
//! ## API Surface
//!
//! - `POST   persons`      — Create a person, returns it with its id
//! - `PUT    persons/{id}` — Replace a person
//! - `DELETE persons/{id}` — Delete a person
//! - `GET    persons`      — List all persons, sorted by query parameters

use super::traits::PersonApi;
use crate::config::{MirrorConfig, NetworkConfig, SortQueryPolicy};
use crate::models::{Person, PersonSortingOptions};
use crate::{MirrorError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Helper to create a network error.
fn net_err(msg: String, err: reqwest::Error) -> MirrorError {
    match MirrorError::from(err) {
        MirrorError::Network { cause, .. } => MirrorError::Network {
            message: msg,
            cause,
        },
        other => other,
    }
}

/// reqwest-backed [`PersonApi`].
#[derive(Debug, Clone)]
pub struct HttpPersonApi {
    base_url: Url,
    client: Client,
    sort_policy: SortQueryPolicy,
}

impl HttpPersonApi {
    /// Create a client from the given configuration.
    pub fn new(config: &MirrorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(NetworkConfig::CONTENT_TYPE));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(NetworkConfig::CONTENT_TYPE),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(NetworkConfig::USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| MirrorError::Network {
            message: format!("Failed to create HTTP client: {}", e),
            cause: None,
        })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            sort_policy: config.sort_policy,
        })
    }

    fn collection_url(&self) -> Result<Url> {
        Ok(self.base_url.join(NetworkConfig::PERSONS_PATH)?)
    }

    fn item_url(&self, person: &Person, operation: &'static str) -> Result<Url> {
        let id = person.id.ok_or(MirrorError::MissingId { operation })?;
        Ok(self
            .base_url
            .join(&format!("{}/{}", NetworkConfig::PERSONS_PATH, id))?)
    }

    /// Sorting options actually sent on the wire.
    fn effective_sorting(&self, requested: &PersonSortingOptions) -> PersonSortingOptions {
        match self.sort_policy {
            SortQueryPolicy::Fixed => PersonSortingOptions::default(),
            SortQueryPolicy::FromOptions => *requested,
        }
    }
}

/// Turn a non-2xx response into a status error.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(MirrorError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl PersonApi for HttpPersonApi {
    async fn create(&self, person: &Person) -> Result<Person> {
        let url = self.collection_url()?;
        debug!("POST {} ({})", url, person.name);

        let response = self
            .client
            .post(url.clone())
            .json(person)
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to send create request to {}", url), e))?;

        let created: Person = check_status(response).await?.json().await?;
        Ok(created)
    }

    async fn update(&self, person: &Person) -> Result<Person> {
        let url = self.item_url(person, "update")?;
        debug!("PUT {}", url);

        let response = self
            .client
            .put(url.clone())
            .json(person)
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to send update request to {}", url), e))?;

        let updated: Person = check_status(response).await?.json().await?;
        Ok(updated)
    }

    async fn delete(&self, person: &Person) -> Result<()> {
        let url = self.item_url(person, "delete")?;
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to send delete request to {}", url), e))?;

        check_status(response).await?;
        Ok(())
    }

    async fn list(&self, options: &PersonSortingOptions) -> Result<Vec<Person>> {
        let url = self.collection_url()?;
        let sorting = self.effective_sorting(options);
        debug!(
            "GET {} (sortField={}, sortingOrder={})",
            url, sorting.sort_field, sorting.sorting_order
        );

        let response = self
            .client
            .get(url.clone())
            .query(&sorting.query_pairs())
            .send()
            .await
            .map_err(|e| net_err(format!("Failed to connect to {}", url), e))?;

        let persons: Vec<Person> = check_status(response).await?.json().await?;
        debug!("Server returned {} persons", persons.len());
        Ok(persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortField, SortingOrder};

    fn api(policy: SortQueryPolicy) -> HttpPersonApi {
        let config = MirrorConfig::new("http://127.0.0.1:9/")
            .unwrap()
            .with_sort_policy(policy);
        HttpPersonApi::new(&config).unwrap()
    }

    #[test]
    fn test_urls() {
        let api = api(SortQueryPolicy::Fixed);
        assert_eq!(
            api.collection_url().unwrap().as_str(),
            "http://127.0.0.1:9/persons"
        );
        let person = Person::new("Ada").with_id(42);
        assert_eq!(
            api.item_url(&person, "update").unwrap().as_str(),
            "http://127.0.0.1:9/persons/42"
        );
    }

    #[test]
    fn test_item_url_requires_id() {
        let api = api(SortQueryPolicy::Fixed);
        let err = api.item_url(&Person::new("Ada"), "delete").unwrap_err();
        assert!(matches!(err, MirrorError::MissingId { operation: "delete" }));
    }

    #[test]
    fn test_fixed_policy_ignores_requested_sorting() {
        let requested = PersonSortingOptions::new(SortField::Name, SortingOrder::Descending);
        assert_eq!(
            api(SortQueryPolicy::Fixed).effective_sorting(&requested),
            PersonSortingOptions::default()
        );
        assert_eq!(
            api(SortQueryPolicy::FromOptions).effective_sorting(&requested),
            requested
        );
    }
}
