//! 에러 응답 매핑.

use serde::{Deserialize, Serialize};
use vigil_core::error::CoreError;

/// 실패 응답 (`success`는 항상 false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }
}

impl From<&CoreError> for ErrorResponse {
    fn from(err: &CoreError) -> Self {
        let message = match err {
            CoreError::Validation { .. } => "유효성 검증 실패",
            CoreError::Serialization(_) => "잘못된 요청 본문",
            CoreError::NotFound { .. } => "리소스를 찾을 수 없음",
            CoreError::Conflict { .. } => "현재 상태와 충돌",
            CoreError::Auth(_) => "인증 실패",
            _ => "내부 서버 에러",
        };
        Self {
            success: false,
            message: message.to_string(),
            error: Some(err.to_string()),
        }
    }
}

/// 에러 종류별 HTTP 상태 코드
pub fn status_code(err: &CoreError) -> u16 {
    match err {
        CoreError::Validation { .. } | CoreError::Serialization(_) => 400,
        CoreError::Auth(_) => 401,
        CoreError::NotFound { .. } => 404,
        CoreError::Conflict { .. } => 409,
        CoreError::Network(_) => 502,
        _ => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = CoreError::validation("confidence", "0.0 ~ 1.0 범위를 벗어남: 1.5");
        assert_eq!(status_code(&err), 400);

        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert!(body.error.unwrap().contains("confidence"));
    }

    #[test]
    fn not_found_and_conflict_are_distinct() {
        let missing = CoreError::NotFound {
            resource_type: "DetectionSession".to_string(),
            id: "8".to_string(),
        };
        let closed = CoreError::Conflict {
            resource_type: "DetectionSession".to_string(),
            id: "8".to_string(),
            message: "이미 종료된 세션".to_string(),
        };
        assert_eq!(status_code(&missing), 404);
        assert_eq!(status_code(&closed), 409);
        assert_eq!(status_code(&CoreError::Internal("db".to_string())), 500);
    }

    #[test]
    fn plain_error_omits_detail() {
        let json = serde_json::to_value(ErrorResponse::new("변경할 필드가 없음")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("error").is_none());
    }
}
