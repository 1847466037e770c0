//! # vigil-api-contracts
//!
//! 감지 HTTP API의 전송 계약: 응답 봉투(envelope), 에러 매핑, 라우트 경로.
//! 도메인 레코드는 [`vigil_core::models`]를 그대로 싣는다.

pub mod detection;
pub mod error;
pub mod routes;
