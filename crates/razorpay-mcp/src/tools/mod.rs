//! Razorpay tool definitions.
//!
//! Every tool is a [`ToolSpec`]: a static description of one Razorpay
//! endpoint plus the parameters it accepts. A `ToolSpec` produces the MCP
//! [`Tool`] (with a JSON schema generated from its parameters) and turns a
//! call's arguments into a [`PreparedRequest`] for the client.
//!
//! Path parameters are written as `{name}` in the path template. The
//! remaining arguments go to the query string for `GET` and to the JSON
//! body otherwise.

pub mod orders;
pub mod payment_links;
pub mod payments;
pub mod payouts;
pub mod qr_codes;
pub mod refunds;
pub mod settlements;

use std::sync::Arc;

use razorpay_mcp_client::{Method, RazorpayClient};
use rmcp::model::{CallToolResult, Content, ErrorData, JsonObject, Tool, ToolAnnotations};
use serde_json::{Map, Value, json};

use crate::registry::ToolResult;

// ============================================================================
// Parameters
// ============================================================================

/// JSON type of a tool parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
}

impl ParamKind {
    /// JSON schema `type` keyword.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(is_whole_i64)
            }
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
        }
    }
}

/// One named tool parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// A parameter the caller must supply.
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// A parameter the caller may omit.
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

// Shared parameter definitions for list endpoints.
pub(crate) const COUNT: Param =
    Param::optional("count", ParamKind::Integer, "Number of items to return (default 10, max 100)");
pub(crate) const SKIP: Param =
    Param::optional("skip", ParamKind::Integer, "Number of items to skip for pagination");
pub(crate) const FROM: Param =
    Param::optional("from", ParamKind::Integer, "Unix timestamp from which items are fetched");
pub(crate) const TO: Param =
    Param::optional("to", ParamKind::Integer, "Unix timestamp till which items are fetched");
pub(crate) const NOTES: Param = Param::optional(
    "notes",
    ParamKind::Object,
    "Key-value pairs for additional information (max 15 pairs, 256 chars each)",
);

// ============================================================================
// ToolSpec
// ============================================================================

/// HTTP verb of a Razorpay endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    fn method(&self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Patch => Method::PATCH,
        }
    }
}

/// Static description of one Razorpay tool.
#[derive(Clone, Copy, Debug)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API root, e.g. `/payments/{payment_id}`.
    pub path: &'static str,
    pub params: &'static [Param],
    /// `false` for tools that create or modify Razorpay resources.
    pub read_only: bool,
}

/// A Razorpay request derived from tool arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ToolSpec {
    /// JSON schema for the tool's arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::from(param.name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// MCP tool definition.
    pub fn tool(&self) -> Tool {
        let mut tool = Tool::new(self.name, self.description, Arc::new(self.input_schema()));
        tool.annotations = Some(
            ToolAnnotations::new()
                .read_only(self.read_only)
                .destructive(false),
        );
        tool
    }

    /// Validate `args` and map them onto a Razorpay request.
    ///
    /// Errors are caller-facing messages, returned to the client as tool errors.
    pub fn prepare(&self, args: &Value) -> Result<PreparedRequest, String> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => return Err("arguments must be a JSON object".to_string()),
        };

        for param in self.params {
            match args.get(param.name) {
                None | Some(Value::Null) if param.required => {
                    return Err(format!("missing required parameter: {}", param.name));
                }
                Some(value) if !value.is_null() && !param.kind.accepts(value) => {
                    return Err(format!(
                        "parameter {} must be of type {}",
                        param.name,
                        param.kind.schema_type()
                    ));
                }
                _ => {}
            }
        }

        let (path, path_params) = self.render_path(args)?;

        let mut rest = Map::new();
        for param in self.params {
            if path_params.contains(&param.name) {
                continue;
            }
            if let Some(value) = args.get(param.name).filter(|v| !v.is_null()) {
                rest.insert(param.name.to_string(), normalize(param.kind, value));
            }
        }

        let (query, body) = match self.method {
            HttpMethod::Get => (query_pairs(&rest), None),
            HttpMethod::Post | HttpMethod::Patch => (Vec::new(), Some(Value::Object(rest))),
        };

        Ok(PreparedRequest {
            method: self.method.method(),
            path,
            query,
            body,
        })
    }

    /// Substitute `{name}` placeholders; returns the path and the names used.
    fn render_path(&self, args: &Map<String, Value>) -> Result<(String, Vec<&'static str>), String> {
        let mut path = self.path.to_string();
        let mut used = Vec::new();
        for param in self.params {
            let placeholder = format!("{{{}}}", param.name);
            if !path.contains(&placeholder) {
                continue;
            }
            let value = match args.get(param.name) {
                Some(Value::String(s)) => s.trim(),
                _ => return Err(format!("missing required parameter: {}", param.name)),
            };
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                return Err(format!("invalid value for parameter {}", param.name));
            }
            path = path.replace(&placeholder, value);
            used.push(param.name);
        }
        Ok((path, used))
    }

    /// Run the tool against Razorpay.
    ///
    /// Validation failures and API errors become tool results with
    /// `is_error` set; only serialization bugs surface as protocol errors.
    pub fn call(&'static self, client: Arc<RazorpayClient>, args: Value) -> ToolResult {
        Box::pin(async move {
            let request = match self.prepare(&args) {
                Ok(request) => request,
                Err(message) => {
                    tracing::debug!(tool = self.name, %message, "rejected tool arguments");
                    return Ok(CallToolResult::error(vec![Content::text(message)]));
                }
            };

            tracing::info!(tool = self.name, method = %request.method, path = %request.path, "calling Razorpay");
            match client
                .request(request.method, &request.path, &request.query, request.body.as_ref())
                .await
            {
                Ok(value) => {
                    let text = serde_json::to_string_pretty(&value)
                        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
                    Ok(CallToolResult::success(vec![Content::text(text)]))
                }
                Err(e) => {
                    tracing::warn!(tool = self.name, error = %e, "Razorpay request failed");
                    Ok(CallToolResult::error(vec![Content::text(format!(
                        "{} failed: {e}",
                        self.name
                    ))]))
                }
            }
        })
    }
}

/// Whole floats that convert to `i64` without saturating.
fn is_whole_i64(f: f64) -> bool {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f)
}

/// Integers sent as `1.0` by loosely typed clients are sent on as `1`.
fn normalize(kind: ParamKind, value: &Value) -> Value {
    match (kind, value.as_f64()) {
        (ParamKind::Integer, Some(f)) if !value.is_i64() && !value.is_u64() => Value::from(f as i64),
        _ => value.clone(),
    }
}

fn query_pairs(args: &Map<String, Value>) -> Vec<(String, String)> {
    args.iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FETCH: ToolSpec = ToolSpec {
        name: "fetch_thing",
        description: "Fetch a thing",
        method: HttpMethod::Get,
        path: "/things/{thing_id}",
        params: &[
            Param::required("thing_id", ParamKind::String, "Thing id"),
            Param::optional("expand", ParamKind::Boolean, "Expand nested objects"),
        ],
        read_only: true,
    };

    const CREATE: ToolSpec = ToolSpec {
        name: "create_thing",
        description: "Create a thing",
        method: HttpMethod::Post,
        path: "/things",
        params: &[
            Param::required("amount", ParamKind::Integer, "Amount in paise"),
            Param::optional("currency", ParamKind::String, "Currency"),
            NOTES,
        ],
        read_only: false,
    };

    #[test]
    fn test_input_schema() {
        let schema = FETCH.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["thing_id"]["type"], "string");
        assert_eq!(schema["properties"]["expand"]["type"], "boolean");
        assert_eq!(schema["required"], json!(["thing_id"]));
    }

    #[test]
    fn test_input_schema_without_required() {
        const LIST: ToolSpec = ToolSpec {
            name: "list_things",
            description: "List things",
            method: HttpMethod::Get,
            path: "/things",
            params: &[COUNT, SKIP],
            read_only: true,
        };
        assert!(LIST.input_schema().get("required").is_none());
    }

    #[test]
    fn test_tool_annotations() {
        let tool = CREATE.tool();
        assert_eq!(tool.name, "create_thing");
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(false));
    }

    #[test]
    fn test_prepare_get_splits_path_and_query() {
        let request = FETCH
            .prepare(&json!({ "thing_id": "thing_123", "expand": true }))
            .unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/things/thing_123");
        assert_eq!(request.query, vec![("expand".to_string(), "true".to_string())]);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_prepare_post_builds_body() {
        let request = CREATE
            .prepare(&json!({ "amount": 50000, "currency": "INR", "notes": { "k": "v" } }))
            .unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/things");
        assert!(request.query.is_empty());
        assert_eq!(
            request.body.unwrap(),
            json!({ "amount": 50000, "currency": "INR", "notes": { "k": "v" } })
        );
    }

    #[test]
    fn test_prepare_missing_required() {
        let err = CREATE.prepare(&json!({ "currency": "INR" })).unwrap_err();
        assert_eq!(err, "missing required parameter: amount");
    }

    #[test]
    fn test_prepare_null_arguments() {
        let err = FETCH.prepare(&Value::Null).unwrap_err();
        assert!(err.contains("thing_id"));
    }

    #[test]
    fn test_prepare_wrong_type() {
        let err = CREATE.prepare(&json!({ "amount": "fifty" })).unwrap_err();
        assert_eq!(err, "parameter amount must be of type integer");
    }

    #[test]
    fn test_prepare_non_object_arguments() {
        let err = FETCH.prepare(&json!(["thing_123"])).unwrap_err();
        assert!(err.contains("JSON object"));
    }

    #[test]
    fn test_prepare_rejects_path_traversal() {
        let err = FETCH.prepare(&json!({ "thing_id": "../orders" })).unwrap_err();
        assert!(err.contains("invalid value"));
    }

    #[test]
    fn test_prepare_integer_from_float() {
        let request = CREATE.prepare(&json!({ "amount": 100.0 })).unwrap();
        assert_eq!(request.body.unwrap()["amount"], json!(100));
    }

    #[test]
    fn test_prepare_rejects_integer_beyond_i64() {
        let err = CREATE.prepare(&json!({ "amount": 1e20 })).unwrap_err();
        assert_eq!(err, "parameter amount must be of type integer");
    }

    #[test]
    fn test_prepare_ignores_unknown_and_null_arguments() {
        let request = CREATE
            .prepare(&json!({ "amount": 100, "currency": null, "bogus": 1 }))
            .unwrap();
        assert_eq!(request.body.unwrap(), json!({ "amount": 100 }));
    }

    #[test]
    fn test_param_kind_accepts() {
        assert!(ParamKind::Integer.accepts(&json!(5)));
        assert!(!ParamKind::Integer.accepts(&json!(5.5)));
        assert!(!ParamKind::Integer.accepts(&json!(1e20)));
        assert!(!ParamKind::Integer.accepts(&json!(-1e19)));
        assert!(ParamKind::Integer.accepts(&json!(-9.0e18)));
        assert!(!ParamKind::Integer.accepts(&json!(f64::MAX)));
        assert!(ParamKind::Number.accepts(&json!(5.5)));
        assert!(ParamKind::Object.accepts(&json!({})));
        assert!(!ParamKind::String.accepts(&json!(1)));
    }
}
