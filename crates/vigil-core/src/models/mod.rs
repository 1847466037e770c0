//! VIGIL 도메인 모델.
//!
//! 클라이언트-서버 간 공유하는 감지 데이터 계약을 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize와 [`crate::schema::Validate`]를 구현한다.

pub mod detection_model;
pub mod preference;
pub mod result;
pub mod session;
pub mod statistics;
