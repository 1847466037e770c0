//! VIGIL 핵심 에러 타입.
//!
//! 스키마 경계에서의 유효성 검증 실패와, 세션 관리 협력자가 보고하는
//! 미발견/충돌 에러를 구분한다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 구문 에러 (잘린 입력, 잘못된 토큰 등)
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 리소스를 찾을 수 없음
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "DetectionSession", "DetectionModel")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 현재 상태와 충돌 (이미 종료된 세션 종료 등)
    #[error("{resource_type} 상태 충돌 ({id}): {message}")]
    Conflict {
        /// 리소스 종류
        resource_type: String,
        /// 리소스 식별자
        id: String,
        /// 충돌 사유
        message: String,
    },

    /// 인증 실패 (토큰 만료, 권한 부족 등)
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl CoreError {
    /// 필드 검증 에러 생성
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 유효성 검증 에러인지 확인
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
