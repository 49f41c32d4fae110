use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::error::AppError;

/// JSON extractor that runs the DTO's declared constraints before the
/// handler executes. A violated constraint rejects the request with a 400
/// carrying every field message, so handlers only ever see valid input.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        value
            .validate()
            .map_err(|e| AppError::bad_request(collect_messages(&e)))?;
        Ok(ValidatedJson(value))
    }
}

fn collect_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let mut messages = Vec::new();
    for (_, field_errors) in fields {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(error.code.to_string()),
            }
        }
    }
    messages.join(", ")
}

#[cfg(test)]
mod test {
    use super::collect_messages;
    use validator::Validate;

    #[derive(serde::Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "name不可为空"))]
        name: String,
    }

    #[test]
    fn test_collect_declared_message() {
        let probe = Probe {
            name: "".to_string(),
        };
        let errors = probe.validate().unwrap_err();
        assert_eq!(collect_messages(&errors), "name不可为空");
    }
}
