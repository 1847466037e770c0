//! 감지 API 클라이언트 포트.
//!
//! 모델 카탈로그, 사용자 선호도, 세션 생성/종료, 통계, 프레임 감지 호출.

use async_trait::async_trait;
use tracing::warn;

use crate::config::DetectionConfig;
use crate::error::CoreError;
use crate::models::detection_model::{DetectionModel, DetectionModelType, ModelSettingsUpdate};
use crate::models::preference::DetectionPreference;
use crate::models::result::{DetectionResult, FrameDetectionRequest};
use crate::models::session::{CreateSessionRequest, DetectionSession, EndSessionRequest};
use crate::models::statistics::ModelStatistics;

/// 감지 백엔드 API
#[async_trait]
pub trait DetectionApi: Send + Sync {
    /// 활성화된 모델 목록
    async fn list_models(&self) -> Result<Vec<DetectionModel>, CoreError>;

    /// 모델 하나 조회 (없으면 `NotFound`)
    async fn get_model(&self, model: DetectionModelType) -> Result<DetectionModel, CoreError>;

    /// 모델 설정 변경 (관리자 전용)
    async fn update_model_settings(
        &self,
        model: DetectionModelType,
        update: &ModelSettingsUpdate,
    ) -> Result<(), CoreError>;

    /// 현재 사용자의 선호 모델
    async fn get_preference(&self) -> Result<DetectionPreference, CoreError>;

    /// 현재 사용자의 선호 모델 변경
    async fn update_preference(&self, preference: &DetectionPreference) -> Result<(), CoreError>;

    /// 세션 생성 — 진행 중 세션 반환
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<DetectionSession, CoreError>;

    /// 세션 종료 — 확정된 세션 반환
    ///
    /// 이미 종료된 세션이면 `Conflict`, 없는 세션이면 `NotFound`.
    async fn end_session(
        &self,
        session_id: i64,
        request: &EndSessionRequest,
    ) -> Result<DetectionSession, CoreError>;

    /// 모델별 사용 통계 (관리자 전용)
    async fn statistics(&self) -> Result<Vec<ModelStatistics>, CoreError>;

    /// 프레임 한 장 감지 (서버 측 추론)
    async fn detect_frame(
        &self,
        request: &FrameDetectionRequest,
    ) -> Result<DetectionResult, CoreError>;
}

/// 사용자 선호 모델 결정
///
/// 선호도 조회에 실패하면 설정의 `default_model`을 사용한다.
pub async fn resolve_preferred_model(
    api: &dyn DetectionApi,
    config: &DetectionConfig,
) -> DetectionModelType {
    match api.get_preference().await {
        Ok(preference) => preference.preferred_model,
        Err(e) => {
            let fallback = config.default_model;
            warn!("선호 모델 조회 실패, {fallback} 사용: {e}");
            fallback
        }
    }
}
