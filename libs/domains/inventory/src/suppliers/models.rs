use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Business registration number, unique across suppliers
    pub tax_id: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Payload for both create and update; every field is overwritten on update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Acme")]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "12.345")]
    pub tax_id: String,
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "555-0001")]
    pub phone: String,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
}

impl Supplier {
    pub(crate) fn from_request(id: i64, input: SupplierRequest) -> Self {
        Self {
            id,
            name: input.name,
            tax_id: input.tax_id,
            phone: input.phone,
            email: input.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SupplierRequest {
        SupplierRequest {
            name: "Acme".into(),
            tax_id: "12.345".into(),
            phone: "555-0001".into(),
            email: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let errors = SupplierRequest {
            name: " ".into(),
            tax_id: String::new(),
            phone: String::new(),
            ..request()
        }
        .validate()
        .unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("tax_id"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_email_is_checked_only_when_present() {
        let bad = SupplierRequest {
            email: Some("not-an-email".into()),
            ..request()
        };
        assert!(bad.validate().is_err());

        let good = SupplierRequest {
            email: Some("sales@acme.test".into()),
            ..request()
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let input: SupplierRequest =
            serde_json::from_str(r#"{"name":"Acme","taxId":"12.345","phone":"555-0001"}"#).unwrap();
        assert_eq!(input.tax_id, "12.345");
        assert!(input.email.is_none());

        let json = serde_json::to_value(Supplier::from_request(1, input)).unwrap();
        assert_eq!(json["taxId"], "12.345");
    }
}
