//! 라우트 경로.

use vigil_core::config::ServerConfig;
use vigil_core::models::detection_model::DetectionModelType;

/// 감지 API 접두사
pub const DETECTION_PREFIX: &str = "/api/detection";
pub const MODELS: &str = "/api/detection/models";
pub const PREFERENCE: &str = "/api/detection/preference";
pub const SESSIONS: &str = "/api/detection/sessions";
pub const STATISTICS: &str = "/api/detection/statistics";

/// 비전 서비스 프레임 감지 경로
pub const VISION_DETECT: &str = "/detect";

/// `GET|PUT /api/detection/models/{model}`
pub fn model_path(model: DetectionModelType) -> String {
    format!("{MODELS}/{model}")
}

/// `PUT /api/detection/sessions/{id}/end`
pub fn end_session_path(session_id: i64) -> String {
    format!("{SESSIONS}/{session_id}/end")
}

/// 백엔드 기본 URL에 경로를 붙인 전체 URL
pub fn backend_url(server: &ServerConfig, path: &str) -> String {
    join_url(&server.base_url, path)
}

/// 비전 서비스 프레임 감지 URL
pub fn vision_detect_url(server: &ServerConfig) -> String {
    join_url(&server.vision_service_url, VISION_DETECT)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
