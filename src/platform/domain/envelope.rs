//! Canonical remote-call envelope shared by every adapter operation.

use serde_json::Value;
use thiserror::Error;

/// Normalized outcome of one remote tool invocation.
///
/// Remote tools report success inconsistently: some set a top-level
/// `success` or `ok` flag, some nest the flag inside the data payload, and
/// some report nominal success while embedding an error object. This
/// envelope is the single shape the rest of the crate sees; [`Self::from_raw`]
/// and [`Self::into_result`] fold every known variant into it at the adapter
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    success: bool,
    data: Option<Value>,
    error: Option<String>,
}

impl ToolResponse {
    /// Builds a successful envelope carrying a data payload.
    #[must_use]
    pub const fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Builds a failed envelope carrying an error message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Normalizes a raw tool payload into the canonical envelope.
    ///
    /// Recognized shapes, in order: an object with a boolean `success` or
    /// `ok` flag (optional `data` and `error` fields), an object with an
    /// `error` field and no flag, and any other value, which is treated as a
    /// bare successful payload.
    #[must_use]
    pub fn from_raw(raw: Value) -> Self {
        let Value::Object(mut fields) = raw else {
            return Self::ok(raw);
        };

        let flag = ["success", "ok"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_bool));
        let error = fields.remove("error").and_then(|err| error_message(&err));
        let data = fields.remove("data");

        match (flag, error) {
            (Some(false), error) => Self {
                success: false,
                data,
                error,
            },
            (None, Some(message)) => Self {
                success: false,
                data,
                error: Some(message),
            },
            (Some(true), error) => Self {
                success: true,
                data: Some(data.unwrap_or(Value::Object(fields))),
                error,
            },
            (None, None) => Self::ok(data.unwrap_or(Value::Object(fields))),
        }
    }

    /// Returns true when the remote call reported success.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Converts the envelope into the data payload or a failure.
    ///
    /// A nominally successful envelope whose payload embeds an error marker
    /// (`error`, or a false `success`/`ok` flag) is treated as a failure:
    /// some platforms bury the real outcome one level down.
    ///
    /// # Errors
    ///
    /// Returns [`ToolFailure`] when the call failed or the payload embeds an
    /// error.
    pub fn into_result(self) -> Result<Value, ToolFailure> {
        if !self.success {
            return Err(ToolFailure::new(
                self.error
                    .unwrap_or_else(|| "remote call failed without detail".to_owned()),
            ));
        }
        let data = self.data.unwrap_or(Value::Null);
        if let Some(message) = embedded_error(&data) {
            return Err(ToolFailure::new(message));
        }
        Ok(data)
    }
}

/// Failure reported by (or buried inside) a remote tool response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ToolFailure(String);

impl ToolFailure {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Extracts an error marker from a nominally successful data payload.
fn embedded_error(data: &Value) -> Option<String> {
    let fields = data.as_object()?;
    if let Some(err) = fields.get("error") {
        return error_message(err);
    }
    let flagged_failure = ["success", "ok"]
        .iter()
        .any(|key| fields.get(*key).and_then(Value::as_bool) == Some(false));
    flagged_failure.then(|| "remote call reported an embedded failure".to_owned())
}

/// Reads an error message from a string or `{ "message": .. }` object.
fn error_message(err: &Value) -> Option<String> {
    match err {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .or_else(|| Some(err.to_string())),
        other => Some(other.to_string()),
    }
}
