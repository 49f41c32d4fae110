use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::regexps::RE_POSITIVE;

/// Id carried as a string in the request body. A missing field deserializes
/// to the empty string so it fails the same non-empty rule.
#[derive(Deserialize, Serialize, Validate, ToSchema)]
pub struct IdParams {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "id不可为空"),
        regex(path = *RE_POSITIVE, message = "请输入有效的id")
    )]
    pub id: String,
}

impl IdParams {
    /// Numeric value; only callable after validation passed, so the parse
    /// can only fail on overflow.
    pub fn value(&self) -> anyhow::Result<u64> {
        Ok(self.id.parse()?)
    }
}

#[cfg(test)]
mod test {
    use super::IdParams;
    use validator::Validate;

    fn messages(params: &IdParams) -> String {
        match params.validate() {
            Ok(()) => String::new(),
            Err(e) => e
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    #[test]
    fn test_empty_id() {
        let params = IdParams {
            id: "".to_string(),
        };
        assert!(messages(&params).contains("id不可为空"));
    }

    #[test]
    fn test_invalid_id() {
        for id in ["-5", "abc", "3.5"] {
            let params = IdParams { id: id.to_string() };
            let msgs = messages(&params);
            assert!(msgs.contains("请输入有效的id"), "id {:?} gave {:?}", id, msgs);
        }
    }

    #[test]
    fn test_valid_id() {
        let params = IdParams {
            id: "42".to_string(),
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.value().unwrap(), 42);
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let params: IdParams = serde_json::from_str("{}").unwrap();
        assert!(messages(&params).contains("id不可为空"));
    }
}
