//! Standardized API response types (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }
}

/// Problem categories the API reports, each with its own `type` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    MalformedRequest,
    NotFound,
    Conflict,
    InvalidPost,
    Internal,
}

impl ProblemKind {
    pub fn status(self) -> u16 {
        match self {
            ProblemKind::MalformedRequest => 400,
            ProblemKind::NotFound => 404,
            ProblemKind::Conflict => 409,
            ProblemKind::InvalidPost => 422,
            ProblemKind::Internal => 500,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ProblemKind::MalformedRequest => "malformed-request",
            ProblemKind::NotFound => "not-found",
            ProblemKind::Conflict => "conflict",
            ProblemKind::InvalidPost => "validation",
            ProblemKind::Internal => "internal",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ProblemKind::MalformedRequest => "Malformed request",
            ProblemKind::NotFound => "Resource not found",
            ProblemKind::Conflict => "Conflicting change",
            ProblemKind::InvalidPost => "Validation failed",
            ProblemKind::Internal => "Internal server error",
        }
    }
}

/// Base of every problem `type` URI.
pub const PROBLEM_BASE: &str = "https://zenith.app/problems/";

/// RFC 7807 problem document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// One entry per rejected field or credential.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn of(kind: ProblemKind) -> Self {
        Self {
            error_type: format!("{PROBLEM_BASE}{}", kind.slug()),
            title: kind.title().to_string(),
            status: kind.status(),
            detail: None,
            errors: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::of(ProblemKind::MalformedRequest).with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::of(ProblemKind::NotFound).with_detail(detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::of(ProblemKind::Conflict).with_detail(detail)
    }

    /// 422 listing every problem found, in the order found.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            detail: Some(format!("{} problem(s) in the submitted data", errors.len())),
            errors,
            ..Self::of(ProblemKind::InvalidPost)
        }
    }

    pub fn internal_error() -> Self {
        Self::of(ProblemKind::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_document_shape() {
        let body = serde_json::to_value(ErrorResponse::validation(vec![
            "content is required".to_string(),
            "time is required".to_string(),
        ]))
        .unwrap();

        assert_eq!(body["type"], "https://zenith.app/problems/validation");
        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"][1], "time is required");
        assert_eq!(body["detail"], "2 problem(s) in the submitted data");
    }

    #[test]
    fn test_internal_error_has_no_detail() {
        let body = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(body["status"], 500);
        assert!(body.get("detail").is_none());
        assert!(body.get("errors").is_none());
    }
}
