//! JSON bodies exchanged with the mobile client

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credentials posted to `/api/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Pick the credentials out of a decoded JSON object.
    ///
    /// Absent, null, and non-string fields become empty strings, so they
    /// simply fail to match instead of rejecting the body.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            email: text("email"),
            password: text("password"),
        }
    }
}

/// The account returned on a successful login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}

/// Body of every `/api/login` response. `data` is only present on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
}

impl LoginResponse {
    pub fn success(message: impl Into<String>, data: LoginData) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Body of `GET /api/test`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReachabilityResponse {
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fields(body: &str) -> Map<String, Value> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_from_fields_missing_default_to_empty() {
        assert_eq!(LoginRequest::from_fields(&fields("{}")), LoginRequest::default());

        let req = LoginRequest::from_fields(&fields(r#"{"email":"a@b.c"}"#));
        assert_eq!(req.email, "a@b.c");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_from_fields_non_strings_are_empty() {
        let req = LoginRequest::from_fields(&fields(r#"{"email":1,"password":null}"#));
        assert_eq!(req, LoginRequest::default());

        let req = LoginRequest::from_fields(&fields(r#"{"email":["boss@boss.com"],"password":{}}"#));
        assert_eq!(req, LoginRequest::default());
    }

    #[test]
    fn test_from_fields_duplicate_key_last_wins() {
        let req = LoginRequest::from_fields(&fields(r#"{"email":"a","email":"b"}"#));
        assert_eq!(req.email, "b");
    }

    #[test]
    fn test_failure_omits_data() {
        let value = serde_json::to_value(LoginResponse::failure("nope")).unwrap();
        assert_eq!(value, json!({"success": false, "message": "nope"}));
    }

    #[test]
    fn test_success_shape() {
        let res = LoginResponse::success(
            "ok",
            LoginData {
                user: User {
                    id: 1,
                    email: "a@b.c".to_string(),
                    name: "A".to_string(),
                    role: 6,
                },
                token: "t".to_string(),
            },
        );
        let value: Value = serde_json::to_value(res).unwrap();
        assert_eq!(value["data"]["user"]["role"], 6);
        assert_eq!(value["data"]["token"], "t");
    }
}
