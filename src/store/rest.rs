// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Catalog REST API client.
//!
//! | Call        | Request                      |
//! |-------------|------------------------------|
//! | `get_all`   | `GET {base}/{path}`          |
//! | `get_by_id` | `GET {base}/{path}/{id}`     |
//! | `create`    | `POST {base}/{path}`         |
//! | `patch`     | `PATCH {base}/{path}/{id}`   |
//! | `remove`    | `DELETE {base}/{path}/{id}`  |
//!
//! Redirects are not followed: the API answers a duplicate write with the
//! configured conflict status, which is a redirect code on the stock backend.

use std::{marker::PhantomData, time::Duration};

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::AppConfig,
    error::StoreError,
    store::{Entity, EntityStore},
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection details shared by every entity store.
#[derive(Clone)]
pub(crate) struct RestApi {
    agent: ureq::Agent,
    base_url: String,
    conflict_status: u16,
}

impl RestApi {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(config.timeout())
            .timeout_write(config.timeout())
            .redirects(0)
            .build();

        Self {
            agent,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            conflict_status: config.conflict_status,
        }
    }

    pub(crate) fn store<E: Entity>(&self) -> RestStore<E> {
        RestStore {
            api: self.clone(),
            _entity: PhantomData,
        }
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, path, id)
    }

    fn call(&self, method: &str, url: &str) -> Result<ureq::Response, StoreError> {
        debug!("{method} {url}");
        self.finish(url, self.agent.request(method, url).call())
    }

    fn call_with<B: Serialize>(
        &self,
        method: &str,
        url: &str,
        body: &B,
    ) -> Result<ureq::Response, StoreError> {
        debug!("{method} {url}");
        self.finish(url, self.agent.request(method, url).send_json(body))
    }

    /// Sorts a raw result into a usable response or one of the store errors.
    fn finish(
        &self,
        url: &str,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<ureq::Response, StoreError> {
        match result {
            Ok(response) => {
                self.check_status(url, response.status())?;
                Ok(response)
            }
            Err(ureq::Error::Status(status, _)) => Err(self.status_error(url, status)),
            Err(ureq::Error::Transport(transport)) => Err(StoreError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            }),
        }
    }

    fn check_status(&self, url: &str, status: u16) -> Result<(), StoreError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(self.status_error(url, status))
        }
    }

    fn status_error(&self, url: &str, status: u16) -> StoreError {
        if status == self.conflict_status {
            StoreError::Conflict(url.to_string())
        } else {
            StoreError::Status {
                url: url.to_string(),
                status,
            }
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: ureq::Response) -> Result<T, StoreError> {
    response.into_json().map_err(|source| StoreError::Decode {
        url: url.to_string(),
        source,
    })
}

/// The API collection for one entity type.
pub(crate) struct RestStore<E> {
    api: RestApi,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityStore<E> for RestStore<E> {
    fn get_all(&self) -> Result<Vec<E>, StoreError> {
        let url = self.api.collection_url(E::PATH);
        decode(&url, self.api.call("GET", &url)?)
    }

    fn get_by_id(&self, id: i64) -> Result<E, StoreError> {
        let url = self.api.item_url(E::PATH, id);
        decode(&url, self.api.call("GET", &url)?)
    }

    fn create(&self, entity: &E::New) -> Result<E, StoreError> {
        let url = self.api.collection_url(E::PATH);
        decode(&url, self.api.call_with("POST", &url, entity)?)
    }

    fn patch(&self, id: i64, changes: &E::Patch) -> Result<E, StoreError> {
        let url = self.api.item_url(E::PATH, id);
        decode(&url, self.api.call_with("PATCH", &url, changes)?)
    }

    fn remove(&self, id: i64) -> Result<E, StoreError> {
        let url = self.api.item_url(E::PATH, id);
        decode(&url, self.api.call("DELETE", &url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> RestApi {
        let config = AppConfig {
            base_url: base_url.to_string(),
            ..AppConfig::default()
        };
        RestApi::new(&config)
    }

    fn response(status: u16, body: &str) -> ureq::Response {
        ureq::Response::new(status, "status", body).unwrap()
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let api = api(" http://localhost:8080/ ");
        assert_eq!(api.collection_url("artists"), "http://localhost:8080/artists");
        assert_eq!(api.item_url("tracks", 161), "http://localhost:8080/tracks/161");
    }

    #[test]
    fn test_conflict_status_is_distinguished() {
        let api = api("http://localhost:8080");
        let url = "http://localhost:8080/albums/1";

        let redirected = api.finish(url, Ok(response(302, "")));
        assert!(matches!(redirected, Err(StoreError::Conflict(_))));

        let rejected = api.finish(url, Err(ureq::Error::Status(302, response(302, ""))));
        assert!(matches!(rejected, Err(StoreError::Conflict(_))));
    }

    #[test]
    fn test_other_failures_are_generic() {
        let api = api("http://localhost:8080");
        let url = "http://localhost:8080/albums/1";

        let missing = api.finish(url, Err(ureq::Error::Status(404, response(404, ""))));
        assert!(matches!(missing, Err(StoreError::Status { status: 404, .. })));

        let moved = api.finish(url, Ok(response(301, "")));
        assert!(matches!(moved, Err(StoreError::Status { status: 301, .. })));
    }

    #[test]
    fn test_configured_conflict_status() {
        let config = AppConfig {
            conflict_status: 409,
            ..AppConfig::default()
        };
        let api = RestApi::new(&config);

        let conflict = api.finish("x", Err(ureq::Error::Status(409, response(409, ""))));
        assert!(matches!(conflict, Err(StoreError::Conflict(_))));

        let found = api.finish("x", Ok(response(302, "")));
        assert!(matches!(found, Err(StoreError::Status { status: 302, .. })));
    }

    #[test]
    fn test_decode_body() {
        let body = r#"[{ "id": 1, "title": "Jazz" }, { "id": 2, "title": "Folk" }]"#;
        let genres: Vec<crate::model::Genre> = decode("x", response(200, body)).unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[1].title, "Folk");

        let broken: Result<Vec<crate::model::Genre>, _> = decode("x", response(200, "not json"));
        assert!(matches!(broken, Err(StoreError::Decode { .. })));
    }
}
