//! # vigil-core
//!
//! VIGIL 졸음 감지 서브시스템의 도메인 모델, 유효성 검증, 포트(trait), 에러 타입.
//! 클라이언트와 서버가 주고받는 데이터 계약을 한 곳에서 정의한다.
//!
//! ## 구조
//!
//! - [`models`] — 감지 모델 카탈로그, 세션, 통계, 선호도, 프레임 결과 (serde Serialize/Deserialize)
//! - [`schema`] — 경계 유효성 검증 (`Validate`, `decode`, `encode`)
//! - [`ports`] — 감지 API 클라이언트 포트 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
pub mod schema;

#[cfg(test)]
mod tests {
    use crate::models::detection_model::DetectionModelType;
    use crate::models::statistics::ModelStatistics;

    #[test]
    fn statistics_serde_roundtrip() {
        let stats = ModelStatistics {
            detection_model: DetectionModelType::FaceApi,
            total_sessions: 3,
            total_frames: 9_000,
            total_events: 4,
            avg_confidence: 0.81,
            avg_latency: 42.0,
            avg_duration_minutes: 7.5,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: ModelStatistics = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.detection_model, DetectionModelType::FaceApi);
        assert_eq!(deserialized.total_frames, 9_000);
        assert!(deserialized.avg_confidence > 0.8);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.server.base_url, "http://localhost:3000");
        assert_eq!(config.server.vision_service_url, "http://localhost:8000");
        assert_eq!(config.detection.default_model, DetectionModelType::FaceApi);
    }
}
