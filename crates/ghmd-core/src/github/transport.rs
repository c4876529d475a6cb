// SPDX-License-Identifier: Apache-2.0

//! GraphQL transport seam.
//!
//! The resolver only shapes a logical query and its variables; an
//! implementation of [`GraphqlTransport`] owns HTTP, authentication,
//! deadlines, retries and caching.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TransportError;

/// GraphQL error `type` GitHub reports for a missing node.
pub const NOT_FOUND_ERROR_TYPE: &str = "NOT_FOUND";

/// A named GraphQL operation with its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// Operation name, also used as the `operationName` field.
    #[serde(rename = "operationName")]
    pub operation_name: String,
    /// Query document.
    pub query: String,
    /// Variables referenced by the query.
    pub variables: Map<String, Value>,
}

impl GraphqlRequest {
    /// Creates a request without variables.
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Adds a variable.
    #[must_use]
    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphqlError {
    /// Human-readable message.
    pub message: String,
    /// GitHub error type, e.g. `NOT_FOUND` or `FORBIDDEN`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Path of the field that failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}

impl GraphqlError {
    /// Returns true when GitHub reports the node as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind.as_deref() == Some(NOT_FOUND_ERROR_TYPE)
    }
}

/// A GraphQL response: partial data may come back alongside errors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GraphqlResponse {
    /// The `data` document, if any.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported next to (or instead of) the data.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// A successful response carrying `data`.
    #[must_use]
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Decodes the `data` document into a typed shape.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::MalformedResponse` when the document does
    /// not fit `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, TransportError> {
        match &self.data {
            None | Some(Value::Null) => Ok(None),
            Some(data) => serde_json::from_value(data.clone())
                .map(Some)
                .map_err(TransportError::MalformedResponse),
        }
    }

    /// Returns true when every reported error is a `NOT_FOUND`.
    #[must_use]
    pub fn only_not_found_errors(&self) -> bool {
        self.errors.iter().all(GraphqlError::is_not_found)
    }

    /// Joins all error messages into one line.
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Executes GraphQL requests against GitHub.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Runs one request and returns the raw response.
    ///
    /// GraphQL-level errors are returned inside the response, not as `Err`:
    /// a missing node is an expected outcome for union lookups.
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError>;
}
