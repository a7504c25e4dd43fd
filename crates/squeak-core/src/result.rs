//! The `{data, error}` envelope returned by error-returning calls.

use serde::Serialize;

use crate::error::{Error, ErrorPayload};

/// Outcome of an error-returning call.
///
/// Exactly one of `data` and `error` is present. The fields are private so
/// the envelope can only be built through [`ApiResult::success`] and
/// [`ApiResult::failure`]. It serializes as `{"data": .., "error": ..}` with
/// the absent side as `null`.
///
/// # Example
///
/// ```
/// use squeak_core::{ApiResult, ErrorPayload};
///
/// let ok: ApiResult<u32> = ApiResult::success(7);
/// assert_eq!(ok.data(), Some(&7));
/// assert!(ok.error().is_none());
///
/// let failed: ApiResult<u32> = ApiResult::failure(ErrorPayload::auth_required());
/// assert!(failed.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResult<T> {
    data: Option<T>,
    error: Option<ErrorPayload>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ErrorPayload) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, ErrorPayload> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            // Unreachable through the constructors.
            (None, None) => Err(ErrorPayload::new("empty result", None)),
        }
    }
}

impl<T> From<Result<T, Error>> for ApiResult<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => ApiResult::success(data),
            Err(err) => ApiResult::failure(err.into()),
        }
    }
}

impl<T> From<Result<T, ErrorPayload>> for ApiResult<T> {
    fn from(result: Result<T, ErrorPayload>) -> Self {
        match result {
            Ok(data) => ApiResult::success(data),
            Err(error) => ApiResult::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, ErrorCode};
    use serde_json::json;

    #[test]
    fn success_serializes_with_null_error() {
        let result = ApiResult::success(json!({"plan": "PRO"}));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"data": {"plan": "PRO"}, "error": null})
        );
    }

    #[test]
    fn failure_serializes_with_null_data() {
        let result: ApiResult<()> = ApiResult::failure(ErrorPayload::auth_required());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"data": null, "error": {"error": "Missing authentication", "code": "AUTH_REQUIRED"}})
        );
    }

    #[test]
    fn from_error_flattens_payload() {
        let result: ApiResult<u8> = Err(Error::from(AuthError::Required)).into();
        assert_eq!(
            result.error().and_then(|e| e.code.clone()),
            Some(ErrorCode::AuthRequired)
        );
        assert!(!result.is_success());
    }

    #[test]
    fn into_result_splits_sides() {
        assert_eq!(ApiResult::success(42).into_result(), Ok(42));
        let failed: ApiResult<u8> = ApiResult::failure(ErrorPayload::auth_required());
        assert_eq!(failed.into_result(), Err(ErrorPayload::auth_required()));
    }
}
