//! 애플리케이션 설정 구조체.
//!
//! 백엔드/비전 서비스 URL, 기본 감지 모델 등
//! 런타임 설정을 정의한다. [`crate::config_manager`]를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::detection_model::DetectionModelType;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 서버 연결 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 감지 설정
    #[serde(default)]
    pub detection: DetectionConfig,
}

// ============================================================
// 서버 설정
// ============================================================

/// 서버 연결 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 백엔드 API 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 비전(MediaPipe) 서비스 URL
    #[serde(default = "default_vision_service_url")]
    pub vision_service_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            vision_service_url: default_vision_service_url(),
        }
    }
}

// ============================================================
// 감지 설정
// ============================================================

/// 감지 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// 선호도 조회 실패 시 사용할 모델
    #[serde(default)]
    pub default_model: DetectionModelType,
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.server.base_url.trim().is_empty() {
            return Err(CoreError::Config("server.base_url 비어 있음".to_string()));
        }
        if self.server.vision_service_url.trim().is_empty() {
            return Err(CoreError::Config(
                "server.vision_service_url 비어 있음".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_vision_service_url() -> String {
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"detection":{"default_model":"mediapipe"}}"#).unwrap();
        assert_eq!(config.detection.default_model, DetectionModelType::MediaPipe);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn blank_vision_url_rejected() {
        let mut config = AppConfig::default_config();
        assert!(config.validate().is_ok());

        config.server.vision_service_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
