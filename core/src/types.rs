//! Request and response schemas for the create-user endpoint.
//!
//! # Design
//! These types mirror the mock-server's user shape but are defined
//! independently. Field names follow the wire format (camelCase); the
//! response's `type` field is exposed as `kind` since `type` is reserved.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Request payload for `POST /v2/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i32,
}

/// Response payload returned by the service after a create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub code: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl CreateUserRequest {
    /// Check an untyped JSON payload against the request schema.
    ///
    /// The payload must carry every required field with the right primitive
    /// type and pass the field-level rules (email format). A payload that
    /// fails to deserialize is reported under the `__all__` key with code
    /// `schema`.
    pub fn validate_json(value: &serde_json::Value) -> Result<Self, ValidationErrors> {
        let request = Self::deserialize(value).map_err(|e| {
            let mut error = ValidationError::new("schema");
            error.message = Some(e.to_string().into());
            let mut errors = ValidationErrors::new();
            errors.add("__all__", error);
            errors
        })?;
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn alice() -> CreateUserRequest {
        CreateUserRequest {
            id: 1234,
            username: "alice99".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            phone: "555-0100".to_string(),
            user_status: 1,
        }
    }

    #[test]
    fn request_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["id"], 1234);
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["userStatus"], 1);
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(alice().validate().is_ok());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let mut user = alice();
        user.email = "not-an-email".to_string();
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn validate_json_accepts_conforming_payload() {
        let value = serde_json::to_value(alice()).unwrap();
        let request = CreateUserRequest::validate_json(&value).unwrap();
        assert_eq!(request, alice());
    }

    #[test]
    fn validate_json_rejects_string_ids() {
        let mut value = serde_json::to_value(alice()).unwrap();
        value["id"] = json!("not-a-number");
        value["userStatus"] = json!("not-a-number");
        let errors = CreateUserRequest::validate_json(&value).unwrap_err();
        assert_eq!(errors.field_errors()["__all__"][0].code, "schema");
    }

    #[test]
    fn validate_json_rejects_missing_field() {
        let mut value = serde_json::to_value(alice()).unwrap();
        value.as_object_mut().unwrap().remove("phone");
        assert!(CreateUserRequest::validate_json(&value).is_err());
    }

    #[test]
    fn validate_json_applies_field_rules() {
        let mut value = serde_json::to_value(alice()).unwrap();
        value["email"] = json!("alice");
        let errors = CreateUserRequest::validate_json(&value).unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn response_maps_type_to_kind() {
        let response: CreateUserResponse =
            serde_json::from_str(r#"{"code":200,"type":"unknown","message":"1234"}"#).unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.kind, "unknown");
        assert_eq!(response.message, "1234");
    }

    #[test]
    fn response_rejects_missing_message() {
        let result: Result<CreateUserResponse, _> =
            serde_json::from_str(r#"{"code":200,"type":"unknown"}"#);
        assert!(result.is_err());
    }
}
