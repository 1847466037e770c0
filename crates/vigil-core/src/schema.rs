//! 스키마 경계 유효성 검증.
//!
//! 값이 생성되거나 파싱되는 경계에서 필드 제약을 강제한다.
//! 구문 에러(잘린 JSON 등)는 `Serialization`으로, 타입/열거형/범위 위반은
//! `Validation`으로 보고한다.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use tracing::debug;

use crate::error::CoreError;

/// 디코딩 단계 데이터 에러에 붙는 필드명
pub const PAYLOAD_FIELD: &str = "payload";

/// 필드 제약 검증
pub trait Validate {
    /// 모든 필드 제약을 검사한다.
    fn validate(&self) -> Result<(), CoreError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), CoreError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// JSON 문자열을 디코딩하고 유효성 검증까지 수행
pub fn decode<T>(json: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(json).map_err(classify_decode_error)?;
    value.validate()?;
    debug!("페이로드 디코딩 완료 ({} bytes)", json.len());
    Ok(value)
}

/// 유효성 검증 후 JSON 문자열로 인코딩
pub fn encode<T>(value: &T) -> Result<String, CoreError>
where
    T: Serialize + Validate,
{
    value.validate()?;
    Ok(serde_json::to_string(value)?)
}

/// serde_json 에러 분류.
///
/// `Data` 범주(알 수 없는 열거형 값, 음수 카운터, 누락 필드)는 검증 에러로 취급한다.
fn classify_decode_error(err: serde_json::Error) -> CoreError {
    match err.classify() {
        Category::Data => CoreError::validation(PAYLOAD_FIELD, err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => CoreError::Serialization(err),
    }
}

/// 유한한 실수인지 확인 (NaN, ±inf 거부)
pub fn ensure_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::validation(field, format!("유한한 값이어야 함: {value}")))
    }
}

/// 0 이상 유한 실수인지 확인
pub fn ensure_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CoreError::validation(
            field,
            format!("0 이상이어야 함: {value}"),
        ));
    }
    Ok(())
}

/// [0, 1] 구간 실수인지 확인
pub fn ensure_unit_interval(field: &str, value: f64) -> Result<(), CoreError> {
    ensure_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CoreError::validation(
            field,
            format!("0.0 ~ 1.0 범위를 벗어남: {value}"),
        ));
    }
    Ok(())
}

/// 참조 ID가 양수인지 확인
pub fn ensure_positive_id(field: &str, id: i64) -> Result<(), CoreError> {
    if id > 0 {
        Ok(())
    } else {
        Err(CoreError::validation(field, format!("양수 ID 필요: {id}")))
    }
}

/// `later`가 `earlier`보다 앞서지 않는지 확인
pub fn ensure_not_before(
    field: &str,
    later: DateTime<Utc>,
    earlier: DateTime<Utc>,
) -> Result<(), CoreError> {
    if later < earlier {
        return Err(CoreError::validation(
            field,
            format!("{} 이전일 수 없음 ({})", earlier.to_rfc3339(), later.to_rfc3339()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn unit_interval_bounds() {
        assert!(ensure_unit_interval("confidence", 0.0).is_ok());
        assert!(ensure_unit_interval("confidence", 1.0).is_ok());
        assert!(ensure_unit_interval("confidence", 1.5).is_err());
        assert!(ensure_unit_interval("confidence", -0.01).is_err());
        assert!(ensure_unit_interval("confidence", f64::NAN).is_err());
    }

    #[test]
    fn non_negative_rejects_infinity() {
        assert!(ensure_non_negative("avg_latency_ms", 0.0).is_ok());
        assert!(ensure_non_negative("avg_latency_ms", -1.0).is_err());
        assert!(ensure_non_negative("avg_latency_ms", f64::INFINITY).is_err());
    }

    #[test]
    fn positive_id() {
        assert!(ensure_positive_id("driver_id", 1).is_ok());
        assert!(ensure_positive_id("driver_id", 0).is_err());
    }

    #[test]
    fn not_before_reports_field() {
        let now = Utc::now();
        let err = ensure_not_before("ended_at", now - Duration::seconds(1), now).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "ended_at"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(ensure_not_before("ended_at", now, now).is_ok());
    }

    #[test]
    fn syntax_error_is_not_validation() {
        let err = classify_decode_error(serde_json::from_str::<u64>("").unwrap_err());
        assert!(matches!(err, CoreError::Serialization(_)));

        let err = classify_decode_error(serde_json::from_str::<u64>("-3").unwrap_err());
        assert!(err.is_validation());
    }
}
