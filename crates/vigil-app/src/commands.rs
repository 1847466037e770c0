//! CLI 하위 명령 구현.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use vigil_api_contracts::routes;
use vigil_core::config::{AppConfig, DetectionConfig, ServerConfig};
use vigil_core::error::CoreError;
use vigil_core::models::detection_model::{
    validate_catalog, DetectionModel, DetectionModelType, ModelSettingsUpdate,
};
use vigil_core::models::preference::DetectionPreference;
use vigil_core::models::result::DetectionResult;
use vigil_core::models::session::{CreateSessionRequest, DetectionSession, EndSessionRequest};
use vigil_core::models::statistics::ModelStatistics;
use vigil_core::schema::{self, Validate};

/// 검증 대상 페이로드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    DetectionModel,
    /// 카탈로그 배열 (ID 유일성 포함)
    ModelCatalog,
    DetectionSession,
    ModelStatistics,
    DetectionPreference,
    CreateSession,
    EndSession,
    ModelSettings,
    DetectionResult,
}

/// JSON 문자열을 종류에 맞게 디코딩/검증
pub fn validate_payload(kind: PayloadKind, json: &str) -> Result<(), CoreError> {
    match kind {
        PayloadKind::DetectionModel => check::<DetectionModel>(json),
        PayloadKind::ModelCatalog => {
            let models: Vec<DetectionModel> = schema::decode(json)?;
            validate_catalog(&models)
        }
        PayloadKind::DetectionSession => check::<DetectionSession>(json),
        PayloadKind::ModelStatistics => check::<ModelStatistics>(json),
        PayloadKind::DetectionPreference => check::<DetectionPreference>(json),
        PayloadKind::CreateSession => check::<CreateSessionRequest>(json),
        PayloadKind::EndSession => check::<EndSessionRequest>(json),
        PayloadKind::ModelSettings => check::<ModelSettingsUpdate>(json),
        PayloadKind::DetectionResult => check::<DetectionResult>(json),
    }
}

fn check<T: DeserializeOwned + Validate>(json: &str) -> Result<(), CoreError> {
    schema::decode::<T>(json).map(|_| ())
}

/// `vigil validate <KIND> <FILE>`
pub fn run_validate(kind: PayloadKind, file: &Path) -> Result<()> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("페이로드 파일 읽기 실패: {}", file.display()))?;
    debug!(?kind, "페이로드 검증 시작: {}", file.display());

    validate_payload(kind, &json)
        .with_context(|| format!("{} 검증 실패", file.display()))?;

    info!(?kind, "페이로드 검증 통과");
    println!("ok");
    Ok(())
}

/// `vigil models`
///
/// 설정의 기본 모델 앞에 `*`를 붙인다.
pub fn list_models(config: &DetectionConfig) -> Vec<String> {
    DetectionModelType::ALL
        .iter()
        .map(|&m| {
            let marker = if m == config.default_model { '*' } else { ' ' };
            format!("{marker} {m}")
        })
        .collect()
}

/// `vigil routes`
pub fn list_endpoints(server: &ServerConfig) -> Vec<String> {
    let mut lines: Vec<String> = [
        routes::MODELS,
        routes::PREFERENCE,
        routes::SESSIONS,
        routes::STATISTICS,
    ]
    .iter()
    .map(|path| routes::backend_url(server, path))
    .collect();
    lines.extend(
        DetectionModelType::ALL
            .iter()
            .map(|&m| routes::backend_url(server, &routes::model_path(m))),
    );
    lines.push(routes::backend_url(
        server,
        &format!("{}/{{id}}/end", routes::SESSIONS),
    ));
    lines.push(routes::vision_detect_url(server));
    lines
}

/// `vigil config`
pub fn render_config(config: &AppConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("설정 직렬화 실패")
}
