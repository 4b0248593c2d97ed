//! Hardcoded-credential login for `POST /api/login`

use crate::models::{LoginData, LoginRequest, LoginResponse, User};
use crate::{Request, Response, StatusCode};
use serde_json::{Map, Value};

/// The only accepted email
pub const TEST_EMAIL: &str = "boss@boss.com";
/// The only accepted password
pub const TEST_PASSWORD: &str = "password";
/// Token handed out on every successful login. Never checked anywhere.
pub const SESSION_TOKEN: &str = "test_token_12345";

const SUCCESS_MESSAGE: &str = "Connexion réussie";
const FAILURE_MESSAGE: &str = "Email ou mot de passe incorrect";

fn test_user() -> User {
    User {
        id: 1,
        email: TEST_EMAIL.to_string(),
        name: "Boss".to_string(),
        role: 6,
    }
}

/// Check the posted credentials.
///
/// - 200 with the fixed user and token on an exact match
/// - 401 for any other JSON object, including missing or non-string fields
/// - 400 when the body is empty, not JSON, or JSON that is not an object
pub fn login(req: &Request) -> Response {
    let credentials = match serde_json::from_slice::<Map<String, Value>>(&req.body) {
        Ok(fields) => LoginRequest::from_fields(&fields),
        Err(e) => {
            log::debug!("rejecting login body: {}", e);
            return Response::json(
                StatusCode::BAD_REQUEST,
                &LoginResponse::failure(format!("Erreur: {}", e)),
            );
        }
    };

    if credentials.email == TEST_EMAIL && credentials.password == TEST_PASSWORD {
        log::info!("login accepted for {}", credentials.email);
        Response::json(
            StatusCode::OK,
            &LoginResponse::success(
                SUCCESS_MESSAGE,
                LoginData {
                    user: test_user(),
                    token: SESSION_TOKEN.to_string(),
                },
            ),
        )
    } else {
        log::info!("login refused for {:?}", credentials.email);
        Response::json(StatusCode::UNAUTHORIZED, &LoginResponse::failure(FAILURE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestBuilder};

    fn post(body: &'static str) -> (StatusCode, LoginResponse) {
        let req = RequestBuilder::new(Method::Post, "/api/login")
            .header("content-type", "application/json")
            .body(body)
            .build();
        let res = login(&req);
        let parsed = serde_json::from_slice(&res.body).unwrap();
        (res.status, parsed)
    }

    #[test]
    fn test_valid_credentials() {
        let (status, body) = post(r#"{"email": "boss@boss.com", "password": "password"}"#);
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.message, SUCCESS_MESSAGE);

        let data = body.data.unwrap();
        assert_eq!(data.token, SESSION_TOKEN);
        assert_eq!(data.user.id, 1);
        assert_eq!(data.user.role, 6);
        assert_eq!(data.user.email, TEST_EMAIL);
    }

    #[test]
    fn test_wrong_credentials() {
        let (status, body) = post(r#"{"email": "x@x.com", "password": "wrong"}"#);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.success);
        assert_eq!(body.message, FAILURE_MESSAGE);
        assert!(body.data.is_none());
    }

    #[test]
    fn test_match_is_exact() {
        let (status, _) = post(r#"{"email": "BOSS@boss.com", "password": "password"}"#);
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = post(r#"{"email": "boss@boss.com", "password": "password "}"#);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_empty_object_is_unauthorized() {
        let (status, body) = post("{}");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.success);
    }

    #[test]
    fn test_malformed_body() {
        let (status, body) = post("not json");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert!(body.message.starts_with("Erreur: "));
        assert!(body.message.len() > "Erreur: ".len());
    }

    #[test]
    fn test_empty_body() {
        let (status, body) = post("");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.contains("EOF"));
    }

    #[test]
    fn test_non_object_json_is_bad_request() {
        for body in [r#"["boss@boss.com", "password"]"#, "[]", "null", "42", r#""boss@boss.com""#] {
            let (status, parsed) = post(body);
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
            assert!(!parsed.success);
            assert!(parsed.data.is_none());
            assert!(parsed.message.starts_with("Erreur: "), "{}", parsed.message);
        }
    }

    #[test]
    fn test_non_string_fields_are_unauthorized() {
        for body in [
            r#"{"email": 1, "password": "x"}"#,
            r#"{"email": null}"#,
            r#"{"email": "boss@boss.com", "password": ["password"]}"#,
            r#"{"email": "boss@boss.com", "email": "x@x.com", "password": "password"}"#,
        ] {
            let (status, parsed) = post(body);
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", body);
            assert!(!parsed.success);
        }
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let (status, parsed) =
            post(r#"{"email": "x@x.com", "email": "boss@boss.com", "password": "password"}"#);
        assert_eq!(status, StatusCode::OK);
        assert!(parsed.success);
    }
}
