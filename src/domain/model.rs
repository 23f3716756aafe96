use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Input for a single notification run.
///
/// Fields are passed through as-is; an empty `number` skips the SMS step.
/// JSON keys match field names case-insensitively (`To`, `to`, `TO`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotifyRequest {
    pub to: String,
    pub from: String,
    pub number: String,
    pub subject: String,
    pub body: String,
}

impl NotifyRequest {
    pub fn is_number_set(&self) -> bool {
        !self.number.is_empty()
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key.to_ascii_lowercase().as_str() {
            "to" => Some(&mut self.to),
            "from" => Some(&mut self.from),
            "number" => Some(&mut self.number),
            "subject" => Some(&mut self.subject),
            "body" => Some(&mut self.body),
            _ => None,
        }
    }
}

struct NotifyRequestVisitor;

impl<'de> Visitor<'de> for NotifyRequestVisitor {
    type Value = NotifyRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a notification request object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = NotifyRequest::default();

        // Later keys overwrite earlier ones; null leaves the field untouched.
        while let Some(key) = map.next_key::<String>()? {
            match request.field_mut(&key) {
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(request)
    }
}

impl<'de> Deserialize<'de> for NotifyRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NotifyRequestVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number_set() {
        let mut request = NotifyRequest::default();
        assert!(!request.is_number_set());

        request.number = "0123456789".to_string();
        assert!(request.is_number_set());
    }

    #[test]
    fn test_decode_pascal_case_and_defaults() {
        let request: NotifyRequest =
            serde_json::from_str(r#"{"To":"a@example.com","Number":"0123456789"}"#).unwrap();
        assert_eq!(request.to, "a@example.com");
        assert_eq!(request.number, "0123456789");
        assert_eq!(request.subject, "");
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_decode_lowercase_and_unknown_keys() {
        let request: NotifyRequest =
            serde_json::from_str(r#"{"to":"a@example.com","body":"hi","extra":1}"#).unwrap();
        assert_eq!(request.to, "a@example.com");
        assert_eq!(request.body, "hi");
    }

    #[test]
    fn test_decode_mixed_case_keys() {
        let request: NotifyRequest =
            serde_json::from_str(r#"{"TO":"a@b.c","nUmBeR":"123","sUbJeCt":"Hi"}"#).unwrap();
        assert_eq!(request.to, "a@b.c");
        assert_eq!(request.number, "123");
        assert_eq!(request.subject, "Hi");
        assert!(request.is_number_set());
    }

    #[test]
    fn test_decode_last_key_wins_and_null_is_skipped() {
        let request: NotifyRequest =
            serde_json::from_str(r#"{"To":"first","to":"second","Body":null}"#).unwrap();
        assert_eq!(request.to, "second");
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_decode_rejects_non_string() {
        assert!(serde_json::from_str::<NotifyRequest>(r#"{"To":42}"#).is_err());
        assert!(serde_json::from_str::<NotifyRequest>(r#"["To"]"#).is_err());
    }

    #[test]
    fn test_serialize_uses_pascal_case() {
        let request = NotifyRequest {
            to: "a@b.c".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["To"], "a@b.c");
    }
}
