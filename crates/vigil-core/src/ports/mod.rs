//! 포트 인터페이스 (trait).
//!
//! 감지 백엔드 API는 외부 협력자가 구현하며,
//! 소비자는 `Arc<dyn DetectionApi>`로 주입받는다.
//!
//! 모든 async trait은 `async_trait` 매크로를 사용하여 object safety를 보장한다.

pub mod detection_api;
