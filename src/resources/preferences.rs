//! Product list preferences endpoint.
//!
//! `GET`, `PUT`, `PATCH` and `DELETE` on `/users/preferences/products`. The
//! signed-in user is identified by the session's bearer token.

use async_trait::async_trait;

use crate::clients::{HttpError, RestClient, RestError};
use crate::models::{PreferencesPatch, ProductPreferences};
use crate::preferences::{PreferencesBackend, PreferencesError};
use crate::resources::errors::ResourceError;

const PATH: &str = "users/preferences/products";
const RESOURCE: &str = "ProductPreferences";

/// REST implementation of [`PreferencesBackend`].
#[derive(Debug)]
pub struct PreferencesApi {
    client: RestClient,
}

// Verify PreferencesApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PreferencesApi>();
};

impl PreferencesApi {
    /// Creates a preferences client on top of a REST client.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, PreferencesError> {
        serde_json::to_value(value).map_err(|source| {
            ResourceError::Deserialize {
                resource: RESOURCE,
                source,
            }
            .into()
        })
    }
}

#[async_trait]
impl PreferencesBackend for PreferencesApi {
    async fn fetch(&self) -> Result<Option<ProductPreferences>, PreferencesError> {
        let response = match self.client.get(PATH).await {
            Ok(response) => response,
            Err(RestError::Http(HttpError::Response(e))) if e.code == 404 => return Ok(None),
            Err(e) => return Err(ResourceError::from_rest_error(e, RESOURCE, None).into()),
        };

        parse_preferences(response.body)
    }

    async fn save(&self, preferences: &ProductPreferences) -> Result<(), PreferencesError> {
        let body = Self::to_body(preferences)?;
        self.client
            .put(PATH, body)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, None))?;
        Ok(())
    }

    async fn patch(&self, patch: &PreferencesPatch) -> Result<(), PreferencesError> {
        if patch.is_empty() {
            return Ok(());
        }
        let body = Self::to_body(patch)?;
        self.client
            .patch(PATH, body)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, None))?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), PreferencesError> {
        match self.client.delete(PATH).await {
            Ok(_) => Ok(()),
            Err(RestError::Http(HttpError::Response(e))) if e.code == 404 => Ok(()),
            Err(e) => Err(ResourceError::from_rest_error(e, RESOURCE, None).into()),
        }
    }
}

/// Reads a preferences document from a `GET` body.
///
/// The document is either the body itself or nested under `preferences` or
/// `data`. Empty bodies and `null` mean the user has no saved preferences.
fn parse_preferences(body: serde_json::Value) -> Result<Option<ProductPreferences>, PreferencesError> {
    let document = match body {
        serde_json::Value::Object(mut map) => {
            if let Some(nested) = map.remove("preferences").or_else(|| map.remove("data")) {
                nested
            } else if map.is_empty() {
                return Ok(None);
            } else {
                serde_json::Value::Object(map)
            }
        }
        other => other,
    };

    match document {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        value => serde_json::from_value(value).map(Some).map_err(|source| {
            ResourceError::Deserialize {
                resource: RESOURCE,
                source,
            }
            .into()
        }),
    }
}
