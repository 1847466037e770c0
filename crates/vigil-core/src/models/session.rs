//! 감지 세션 모델.
//!
//! 운전자 한 명을 하나의 백엔드로 모니터링하는 구간.
//! `ended_at`이 None이면 진행 중(open)이고, 종료 후에는 변경되지 않는다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreError;
use crate::models::detection_model::DetectionModelType;
use crate::schema::{
    ensure_non_negative, ensure_not_before, ensure_positive_id, ensure_unit_interval, Validate,
};

const RESOURCE: &str = "DetectionSession";

/// 감지 세션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSession {
    /// 세션 고유 ID
    pub id: i64,
    /// 운전자 ID
    pub driver_id: i64,
    /// 차량 ID (차량과 연결되지 않으면 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    /// 세션을 시작한 사용자 계정 ID
    pub user_id: i64,
    /// 사용 중인 감지 백엔드
    pub detection_model: DetectionModelType,
    /// 시작 시각
    pub started_at: DateTime<Utc>,
    /// 종료 시각 (None이면 진행 중)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// 처리한 프레임 수
    pub total_frames_processed: u64,
    /// 감지된 이벤트 수
    pub total_events: u64,
    /// 평균 신뢰도 (0.0 ~ 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_confidence: Option<f64>,
    /// 평균 추론 지연 (밀리초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_latency_ms: Option<f64>,
    /// 세션 메모
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_notes: Option<String>,
}

impl DetectionSession {
    /// 생성 요청으로 진행 중 세션을 연다.
    ///
    /// `id`, `user_id`, `started_at`은 요청을 받은 쪽에서 할당한다.
    pub fn open(
        id: i64,
        user_id: i64,
        request: &CreateSessionRequest,
        started_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        request.validate()?;
        ensure_positive_id("user_id", user_id)?;

        info!(
            session_id = id,
            driver_id = request.driver_id,
            model = %request.detection_model,
            "감지 세션 시작"
        );

        Ok(Self {
            id,
            driver_id: request.driver_id,
            vehicle_id: request.vehicle_id,
            user_id,
            detection_model: request.detection_model,
            started_at,
            ended_at: None,
            total_frames_processed: 0,
            total_events: 0,
            avg_confidence: None,
            avg_latency_ms: None,
            session_notes: None,
        })
    }

    /// 세션 진행 중인지 확인
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// 프레임 처리 결과 반영 (카운터 증가)
    pub fn record_frames(&mut self, frames: u64, events: u64) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.total_frames_processed = self.total_frames_processed.saturating_add(frames);
        self.total_events = self.total_events.saturating_add(events);
        Ok(())
    }

    /// 종료 요청 적용
    ///
    /// 요청에 있는 필드는 세션 값을 대체하고, 생략된 필드는 현재 값을 유지한다.
    /// 카운터는 감소할 수 없다.
    pub fn close(
        &mut self,
        request: &EndSessionRequest,
        ended_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.ensure_open()?;
        request.validate()?;
        ensure_not_before("ended_at", ended_at, self.started_at)?;

        let frames = request.total_frames.unwrap_or(self.total_frames_processed);
        if frames < self.total_frames_processed {
            return Err(CoreError::validation(
                "total_frames",
                format!("카운터 감소 불가: {} → {frames}", self.total_frames_processed),
            ));
        }
        let events = request.total_events.unwrap_or(self.total_events);
        if events < self.total_events {
            return Err(CoreError::validation(
                "total_events",
                format!("카운터 감소 불가: {} → {events}", self.total_events),
            ));
        }

        self.total_frames_processed = frames;
        self.total_events = events;
        if request.avg_confidence.is_some() {
            self.avg_confidence = request.avg_confidence;
        }
        if request.avg_latency.is_some() {
            self.avg_latency_ms = request.avg_latency;
        }
        if request.notes.is_some() {
            self.session_notes = request.notes.clone();
        }
        self.ended_at = Some(ended_at);

        info!(
            session_id = self.id,
            frames = self.total_frames_processed,
            events = self.total_events,
            "감지 세션 종료"
        );
        Ok(())
    }

    /// 종료된 세션의 지속 시간
    pub fn duration(&self) -> Option<Duration> {
        self.ended_at.map(|end| end - self.started_at)
    }

    /// 종료된 세션의 지속 시간 (분)
    pub fn duration_minutes(&self) -> Option<f64> {
        self.duration()
            .map(|d| d.num_milliseconds() as f64 / 60_000.0)
    }

    fn ensure_open(&self) -> Result<(), CoreError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(CoreError::Conflict {
                resource_type: RESOURCE.to_string(),
                id: self.id.to_string(),
                message: "이미 종료된 세션".to_string(),
            })
        }
    }
}

impl Validate for DetectionSession {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_positive_id("driver_id", self.driver_id)?;
        ensure_positive_id("user_id", self.user_id)?;
        if let Some(vehicle_id) = self.vehicle_id {
            ensure_positive_id("vehicle_id", vehicle_id)?;
        }
        if let Some(ended_at) = self.ended_at {
            ensure_not_before("ended_at", ended_at, self.started_at)?;
        }
        if let Some(confidence) = self.avg_confidence {
            ensure_unit_interval("avg_confidence", confidence)?;
        }
        if let Some(latency) = self.avg_latency_ms {
            ensure_non_negative("avg_latency_ms", latency)?;
        }
        Ok(())
    }
}

/// 세션 생성 요청 (ID와 시각은 수신 측에서 할당)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// 운전자 ID
    pub driver_id: i64,
    /// 차량 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    /// 사용할 감지 백엔드
    pub detection_model: DetectionModelType,
}

impl Validate for CreateSessionRequest {
    fn validate(&self) -> Result<(), CoreError> {
        ensure_positive_id("driver_id", self.driver_id)?;
        if let Some(vehicle_id) = self.vehicle_id {
            ensure_positive_id("vehicle_id", vehicle_id)?;
        }
        Ok(())
    }
}

/// 세션 종료 요청 (모든 필드 선택)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_events: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_confidence: Option<f64>,
    /// 평균 추론 지연 (밀리초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_latency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EndSessionRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Validate for EndSessionRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(confidence) = self.avg_confidence {
            ensure_unit_interval("avg_confidence", confidence)?;
        }
        if let Some(latency) = self.avg_latency {
            ensure_non_negative("avg_latency", latency)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateSessionRequest {
        CreateSessionRequest {
            driver_id: 42,
            vehicle_id: Some(7),
            detection_model: DetectionModelType::MediaPipe,
        }
    }

    fn open_session() -> DetectionSession {
        let started_at = Utc::now() - Duration::minutes(30);
        DetectionSession::open(1, 5, &create_request(), started_at).unwrap()
    }

    #[test]
    fn open_session_starts_empty() {
        let session = open_session();
        assert!(session.is_open());
        assert_eq!(session.driver_id, 42);
        assert_eq!(session.vehicle_id, Some(7));
        assert_eq!(session.total_frames_processed, 0);
        assert!(session.avg_confidence.is_none());
        assert!(session.duration().is_none());
    }

    #[test]
    fn open_rejects_missing_driver() {
        let request = CreateSessionRequest {
            driver_id: 0,
            ..create_request()
        };
        let err = DetectionSession::open(1, 5, &request, Utc::now()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn counters_accumulate_while_open() {
        let mut session = open_session();
        session.record_frames(30, 0).unwrap();
        session.record_frames(30, 2).unwrap();
        assert_eq!(session.total_frames_processed, 60);
        assert_eq!(session.total_events, 2);
    }

    #[test]
    fn close_replaces_supplied_fields_only() {
        let mut session = open_session();
        session.record_frames(100, 1).unwrap();

        let request = EndSessionRequest {
            total_frames: Some(1_800),
            avg_confidence: Some(0.91),
            notes: Some("야간 주행".to_string()),
            ..Default::default()
        };
        let ended_at = session.started_at + Duration::minutes(30);
        session.close(&request, ended_at).unwrap();

        assert!(!session.is_open());
        assert_eq!(session.total_frames_processed, 1_800);
        assert_eq!(session.total_events, 1);
        assert_eq!(session.avg_confidence, Some(0.91));
        assert!(session.avg_latency_ms.is_none());
        assert_eq!(session.session_notes.as_deref(), Some("야간 주행"));
        assert_eq!(session.duration_minutes(), Some(30.0));
    }

    #[test]
    fn closing_twice_is_conflict() {
        let mut session = open_session();
        let ended_at = Utc::now();
        session.close(&EndSessionRequest::default(), ended_at).unwrap();

        let err = session
            .close(&EndSessionRequest::default(), ended_at)
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));
        assert!(session.record_frames(1, 0).is_err());
        assert_eq!(session.ended_at, Some(ended_at));
    }

    #[test]
    fn close_before_start_rejected() {
        let mut session = open_session();
        let ended_at = session.started_at - Duration::seconds(1);
        let err = session
            .close(&EndSessionRequest::default(), ended_at)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(session.is_open());
    }

    #[test]
    fn close_cannot_decrease_counters() {
        let mut session = open_session();
        session.record_frames(500, 3).unwrap();

        let request = EndSessionRequest {
            total_events: Some(2),
            ..Default::default()
        };
        let err = session.close(&request, Utc::now()).unwrap_err();
        assert!(err.is_validation());
        assert!(session.is_open());
    }

    #[test]
    fn end_request_confidence_out_of_range() {
        let request = EndSessionRequest {
            avg_confidence: Some(1.2),
            ..Default::default()
        };
        assert!(request.validate().is_err());
        assert!(!request.is_empty());
    }
}
