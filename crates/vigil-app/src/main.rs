//! # vigil-app
//!
//! VIGIL CLI 바이너리 진입점.
//! 감지 데이터 계약에 맞춰 JSON 페이로드를 검증하고 설정을 조회한다.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vigil_core::config_manager::ConfigManager;

use crate::commands::PayloadKind;

/// VIGIL 졸음 감지 데이터 계약 도구
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// JSON 페이로드를 디코딩하고 필드 제약을 검증
    Validate {
        /// 페이로드 종류
        #[arg(value_enum)]
        kind: PayloadKind,
        /// JSON 파일 경로
        file: PathBuf,
    },
    /// 지원하는 감지 모델 목록 (`*` = 설정 기본값)
    Models,
    /// 설정된 서버 기준 API 엔드포인트 URL
    Routes,
    /// 현재 설정 출력
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Validate { kind, file } => commands::run_validate(kind, &file),
        Command::Models => {
            let config = load_config(args.config)?.get();
            for line in commands::list_models(&config.detection) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Routes => {
            let config = load_config(args.config)?.get();
            for url in commands::list_endpoints(&config.server) {
                println!("{url}");
            }
            Ok(())
        }
        Command::Config => {
            let manager = load_config(args.config)?;
            println!("{}", commands::render_config(&manager.get())?);
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ConfigManager> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    debug!("설정 파일: {}", manager.config_path().display());
    Ok(manager)
}
