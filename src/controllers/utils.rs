use crate::{prelude::*, result::ApiError};

use axum::{extract::rejection::FormRejection, Form};

/// Unwraps a form body. A request without a form content type counts as an
/// empty form, so its required fields surface as `MissingParameter`.
pub fn form_or_empty<T: Default>(
    form: std::result::Result<Form<T>, FormRejection>,
) -> Result<T> {
    return match form {
        Ok(Form(body)) => Ok(body),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(ApiError::InvalidParameter {
            name: "body",
            reason: rejection.body_text(),
        }
        .into()),
    };
}

pub fn require_param(value: Option<String>, name: &'static str) -> Result<String> {
    return value.ok_or_else(|| ApiError::MissingParameter(name).into());
}

pub fn require_id_param(value: Option<String>, name: &'static str) -> Result<i64> {
    let raw = require_param(value, name)?;

    let id = raw.trim().parse::<i64>().map_err(|_| ApiError::InvalidParameter {
        name,
        reason: format!("expected an integer, got {raw:?}"),
    })?;

    return Ok(id);
}
