//! 프레임 단위 감지 결과.
//!
//! 추론 호출마다 새로 만들어지는 일시적인 값이며 식별자를 갖지 않는다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::{ensure_finite, ensure_positive_id, ensure_unit_interval, Validate};

/// 정상 상태를 나타내는 이벤트 유형
pub const EVENT_NORMAL: &str = "normal";

/// 비전 서비스가 보고하는 이벤트 유형
pub const KNOWN_EVENT_TYPES: [&str; 6] = [
    EVENT_NORMAL,
    "eye_closed",
    "head_nodding",
    "yawning",
    "blinking_slow",
    "distraction",
];

/// 알려진 심각도 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// 와이어 문자열 파싱 (알 수 없는 값은 None)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// 프레임 하나의 추론 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// 추론 성공 여부
    pub success: bool,
    /// 이벤트 유형 (자유 문자열)
    pub event_type: String,
    /// 심각도 (자유 문자열)
    pub severity: String,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
    /// Eye Aspect Ratio
    pub ear: f64,
    /// Mouth Aspect Ratio
    pub mar: f64,
    /// 머리 기울기 (도)
    pub head_angle: f64,
    /// 추론 시각
    pub timestamp: DateTime<Utc>,
}

impl DetectionResult {
    pub fn known_severity(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }

    /// 경고가 필요한 심각도(high, critical)인지 확인
    pub fn requires_alert(&self) -> bool {
        self.known_severity()
            .map(|s| s >= Severity::High)
            .unwrap_or(false)
    }

    pub fn is_normal(&self) -> bool {
        self.event_type == EVENT_NORMAL
    }
}

impl Validate for DetectionResult {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_unit_interval("confidence", self.confidence)?;
        ensure_finite("ear", self.ear)?;
        ensure_finite("mar", self.mar)?;
        ensure_finite("head_angle", self.head_angle)
    }
}

/// 비전 서비스 프레임 감지 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDetectionRequest {
    pub driver_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    /// Base64 인코딩된 이미지 (data URL 허용)
    pub image_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for FrameDetectionRequest {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_positive_id("driver_id", self.driver_id)?;
        if let Some(vehicle_id) = self.vehicle_id {
            ensure_positive_id("vehicle_id", vehicle_id)?;
        }
        if self.image_data.trim().is_empty() {
            return Err(CoreError::validation("image_data", "이미지 데이터 없음"));
        }
        Ok(())
    }
}
