//! 사용자 감지 모델 선호도.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::detection_model::{DetectionModel, DetectionModelType};
use crate::schema::Validate;

/// 사용자가 선택한 기본 백엔드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionPreference {
    pub preferred_model: DetectionModelType,
}

impl DetectionPreference {
    pub fn new(preferred_model: DetectionModelType) -> Self {
        Self { preferred_model }
    }

    /// 선호 모델이 카탈로그에 있고 활성화되어 있는지 확인
    pub fn ensure_available(&self, catalog: &[DetectionModel]) -> Result<(), CoreError> {
        let available = catalog
            .iter()
            .any(|m| m.model_name == self.preferred_model && m.is_available());
        if available {
            Ok(())
        } else {
            Err(CoreError::validation(
                "preferred_model",
                format!("선택한 모델을 사용할 수 없음: {}", self.preferred_model),
            ))
        }
    }
}

// 닫힌 열거형 하나뿐이라 디코딩 단계에서 이미 검증됨
impl Validate for DetectionPreference {
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::detection_model::ProcessingLocation;
    use chrono::Utc;

    fn row(model_name: DetectionModelType, is_enabled: bool) -> DetectionModel {
        let now = Utc::now();
        DetectionModel {
            id: 1,
            model_name,
            is_enabled,
            display_name: model_name.to_string(),
            description: String::new(),
            processing_location: ProcessingLocation::Server,
            landmarks_count: 478,
            avg_latency_ms: 20.0,
            requires_gpu: false,
            max_concurrent_users: Some(50),
            cost_per_hour: 0.05,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn default_is_face_api() {
        assert_eq!(
            DetectionPreference::default().preferred_model,
            DetectionModelType::FaceApi
        );
    }

    #[test]
    fn disabled_model_is_not_available() {
        let catalog = vec![
            row(DetectionModelType::FaceApi, true),
            row(DetectionModelType::MediaPipe, false),
        ];
        let pref = DetectionPreference::new(DetectionModelType::MediaPipe);
        assert!(pref.ensure_available(&catalog).unwrap_err().is_validation());
        assert!(DetectionPreference::new(DetectionModelType::FaceApi)
            .ensure_available(&catalog)
            .is_ok());
    }

    #[test]
    fn missing_model_is_not_available() {
        let pref = DetectionPreference::new(DetectionModelType::MediaPipe);
        assert!(pref.ensure_available(&[]).is_err());
    }
}
