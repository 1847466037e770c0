//! 감지 API 성공 응답 봉투.
//!
//! 모든 봉투는 `success` 플래그와 함께 도메인 레코드를 싣는다.

use serde::{Deserialize, Serialize};
use vigil_core::error::CoreError;
use vigil_core::models::detection_model::{DetectionModel, DetectionModelType};
use vigil_core::models::session::DetectionSession;
use vigil_core::models::statistics::ModelStatistics;
use vigil_core::schema::Validate;

/// `GET /models` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub success: bool,
    pub models: Vec<DetectionModel>,
}

impl ModelListResponse {
    pub fn new(models: Vec<DetectionModel>) -> Self {
        Self {
            success: true,
            models,
        }
    }
}

impl Validate for ModelListResponse {
    fn validate(&self) -> Result<(), CoreError> {
        vigil_core::models::detection_model::validate_catalog(&self.models)
    }
}

/// `GET /models/{model}` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub success: bool,
    pub model: DetectionModel,
}

impl ModelResponse {
    pub fn new(model: DetectionModel) -> Self {
        Self {
            success: true,
            model,
        }
    }
}

impl Validate for ModelResponse {
    fn validate(&self) -> Result<(), CoreError> {
        self.model.validate()
    }
}

/// `GET|PUT /preference` 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub success: bool,
    pub preferred_model: DetectionModelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PreferenceResponse {
    pub fn new(preferred_model: DetectionModelType) -> Self {
        Self {
            success: true,
            preferred_model,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for PreferenceResponse {
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// `POST /sessions`, `PUT /sessions/{id}/end` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub message: String,
    pub session: DetectionSession,
}

impl SessionResponse {
    pub fn created(session: DetectionSession) -> Self {
        Self {
            success: true,
            message: "감지 세션 생성됨".to_string(),
            session,
        }
    }

    pub fn ended(session: DetectionSession) -> Self {
        Self {
            success: true,
            message: "감지 세션 종료됨".to_string(),
            session,
        }
    }
}

impl Validate for SessionResponse {
    fn validate(&self) -> Result<(), CoreError> {
        self.session.validate()
    }
}

/// `GET /statistics` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: Vec<ModelStatistics>,
}

impl StatisticsResponse {
    pub fn new(statistics: Vec<ModelStatistics>) -> Self {
        Self {
            success: true,
            statistics,
        }
    }
}

impl Validate for StatisticsResponse {
    fn validate(&self) -> Result<(), CoreError> {
        self.statistics.validate()
    }
}

/// 본문 없는 성공 응답 (`PUT /models/{model}` 등)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
