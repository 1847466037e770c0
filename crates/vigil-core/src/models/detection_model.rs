//! 감지 모델 카탈로그.
//!
//! 사용 가능한 감지 백엔드(face-api, mediapipe)와 관리자용 설정 변경 요청.
//! 카탈로그 행은 삭제되지 않고 `is_enabled`로 비활성화된다.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::{ensure_non_negative, ensure_not_before, Validate};

/// 감지 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DetectionModelType {
    /// 브라우저 face-api.js (68 랜드마크)
    #[default]
    #[serde(rename = "face-api")]
    FaceApi,
    /// MediaPipe Face Mesh
    #[serde(rename = "mediapipe")]
    MediaPipe,
}

impl DetectionModelType {
    /// 전체 백엔드 목록
    pub const ALL: [DetectionModelType; 2] = [Self::FaceApi, Self::MediaPipe];

    /// 와이어 표현 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FaceApi => "face-api",
            Self::MediaPipe => "mediapipe",
        }
    }
}

impl fmt::Display for DetectionModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionModelType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                CoreError::validation(
                    "detection_model",
                    format!("알 수 없는 모델: {s} (face-api 또는 mediapipe)"),
                )
            })
    }
}

/// 추론 실행 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingLocation {
    /// 브라우저/클라이언트 측 추론
    Client,
    /// 서버(비전 서비스) 측 추론
    Server,
}

impl ProcessingLocation {
    pub const ALL: [ProcessingLocation; 2] = [Self::Client, Self::Server];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for ProcessingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingLocation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| {
                CoreError::validation(
                    "processing_location",
                    format!("알 수 없는 처리 위치: {s}"),
                )
            })
    }
}

/// 카탈로그 행 — 사용 가능한 감지 백엔드 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionModel {
    /// 카탈로그 고유 ID
    pub id: i64,
    /// 백엔드 종류
    pub model_name: DetectionModelType,
    /// 사용자에게 제공 여부
    pub is_enabled: bool,
    /// 표시 이름
    pub display_name: String,
    /// 설명
    pub description: String,
    /// 추론 실행 위치
    pub processing_location: ProcessingLocation,
    /// 추적하는 얼굴 랜드마크 수
    pub landmarks_count: u32,
    /// 이동 평균 추론 지연 (밀리초)
    pub avg_latency_ms: f64,
    /// GPU 필요 여부
    pub requires_gpu: bool,
    /// 최대 동시 사용자 수 (None이면 무제한)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_users: Option<u32>,
    /// 시간당 비용
    pub cost_per_hour: f64,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 마지막 변경 시각
    pub updated_at: DateTime<Utc>,
}

impl DetectionModel {
    /// 사용자에게 제공 가능한지 확인
    pub fn is_available(&self) -> bool {
        self.is_enabled
    }

    /// 현재 사용자 수 기준으로 추가 사용자를 받을 수 있는지 확인
    pub fn has_capacity(&self, active_users: u32) -> bool {
        self.max_concurrent_users
            .map(|max| active_users < max)
            .unwrap_or(true)
    }

    /// 관리자 설정 변경 적용
    ///
    /// 빈 문자열 이름/설명과 0인 지연/동시 사용자 수는 변경 없음으로 취급한다.
    /// 남는 필드가 없으면 검증 에러. `updated_at`은 `now`로 갱신되며
    /// `created_at`보다 앞설 수 없다.
    pub fn apply_settings(
        &mut self,
        update: &ModelSettingsUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        update.validate()?;
        ensure_not_before("updated_at", now, self.created_at)?;

        let update = update.effective();
        if let Some(enabled) = update.is_enabled {
            self.is_enabled = enabled;
        }
        if let Some(name) = update.display_name {
            self.display_name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(latency) = update.avg_latency_ms {
            self.avg_latency_ms = latency;
        }
        if let Some(max) = update.max_concurrent_users {
            self.max_concurrent_users = Some(max);
        }
        if let Some(cost) = update.cost_per_hour {
            self.cost_per_hour = cost;
        }
        self.updated_at = now;
        Ok(())
    }
}

impl Validate for DetectionModel {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_non_negative("avg_latency_ms", self.avg_latency_ms)?;
        ensure_non_negative("cost_per_hour", self.cost_per_hour)?;
        ensure_not_before("updated_at", self.updated_at, self.created_at)
    }
}

/// 카탈로그 전체 검증 — 각 행의 제약 + ID 유일성
pub fn validate_catalog(models: &[DetectionModel]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(models.len());
    for model in models {
        model.validate()?;
        if !seen.insert(model.id) {
            return Err(CoreError::validation(
                "id",
                format!("카탈로그 ID 중복: {}", model.id),
            ));
        }
    }
    Ok(())
}

/// 관리자용 모델 설정 변경 요청 (생략된 필드는 유지)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_users: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_hour: Option<f64>,
}

impl ModelSettingsUpdate {
    /// 실제로 반영될 필드만 남긴 사본
    ///
    /// `is_enabled`, `cost_per_hour`는 값과 무관하게 반영되고,
    /// 나머지는 빈 문자열이나 0이면 제외된다.
    pub fn effective(&self) -> Self {
        Self {
            is_enabled: self.is_enabled,
            display_name: self.display_name.clone().filter(|v| !v.is_empty()),
            description: self.description.clone().filter(|v| !v.is_empty()),
            avg_latency_ms: self.avg_latency_ms.filter(|v| *v != 0.0),
            max_concurrent_users: self.max_concurrent_users.filter(|v| *v != 0),
            cost_per_hour: self.cost_per_hour,
        }
    }

    /// 반영될 필드가 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.effective() == Self::default()
    }
}

impl Validate for ModelSettingsUpdate {
    fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::validation("settings", "변경할 필드가 없음"));
        }
        if let Some(latency) = self.avg_latency_ms {
            ensure_non_negative("avg_latency_ms", latency)?;
        }
        if let Some(cost) = self.cost_per_hour {
            ensure_non_negative("cost_per_hour", cost)?;
        }
        Ok(())
    }
}
