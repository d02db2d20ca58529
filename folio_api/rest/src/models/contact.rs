use folio_models::contact::ContactForm;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Request body of `POST /contact`. Every field is optional, validation
/// happens in the contact service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactForm {
    /// Full name of the visitor
    #[serde(default, deserialize_with = "string_or_missing")]
    pub name: Option<String>,
    /// Email address replies are sent to
    #[serde(default, deserialize_with = "string_or_missing")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_missing")]
    pub message: Option<String>,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

/// Values that are not strings are treated like a missing field, so the
/// visitor gets a field error instead of a rejected request.
fn string_or_missing<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn non_string_fields_are_missing() {
        let form: ContactForm = serde_json::from_value::<ApiContactForm>(json!({
            "name": 5,
            "email": ["al@example.com"],
            "message": "Hello there, this is a test.",
        }))
        .unwrap()
        .into();

        assert_eq!(
            form,
            ContactForm {
                name: None,
                email: None,
                message: Some("Hello there, this is a test.".into()),
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let form = serde_json::from_value::<ApiContactForm>(json!({"name": "Al", "age": 3}))
            .unwrap();

        assert_eq!(form.name.as_deref(), Some("Al"));
        assert_eq!(form.email, None);
    }
}
