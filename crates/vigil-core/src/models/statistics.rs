//! 모델별 집계 통계.
//!
//! 종료된 세션을 집계 프로세스가 계산한 읽기 전용 뷰.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::detection_model::DetectionModelType;
use crate::schema::{ensure_non_negative, ensure_unit_interval, Validate};

/// 감지 모델 사용 통계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// 집계 대상 백엔드
    pub detection_model: DetectionModelType,
    /// 종료된 세션 수
    pub total_sessions: u64,
    /// 처리한 총 프레임 수
    pub total_frames: u64,
    /// 감지된 총 이벤트 수
    pub total_events: u64,
    /// 평균 신뢰도
    pub avg_confidence: f64,
    /// 평균 추론 지연 (밀리초)
    pub avg_latency: f64,
    /// 평균 세션 길이 (분)
    pub avg_duration_minutes: f64,
}

impl Validate for ModelStatistics {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_unit_interval("avg_confidence", self.avg_confidence)?;
        ensure_non_negative("avg_latency", self.avg_latency)?;
        ensure_non_negative("avg_duration_minutes", self.avg_duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_duration_rejected() {
        let stats = ModelStatistics {
            detection_model: DetectionModelType::MediaPipe,
            total_sessions: 1,
            total_frames: 10,
            total_events: 0,
            avg_confidence: 0.5,
            avg_latency: 12.0,
            avg_duration_minutes: -3.0,
        };
        let err = stats.validate().unwrap_err();
        assert!(err.to_string().contains("avg_duration_minutes"));
    }
}
