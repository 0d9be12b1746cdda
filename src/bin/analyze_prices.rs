use brvm_analysis::config_loader::{ConfigFormat, ConfigLoader};
use brvm_analysis::source::{JsonFileDataSource, PriceDataSource, SyntheticDataSource};
use brvm_analysis::{AnalysisConfig, AnalysisService, TechnicalAnalyzer};
use log::{debug, error, info};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// 커맨드 라인 인수
#[derive(Debug, Default)]
struct Args {
    symbol: Option<String>,
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "사용법: {} <종목코드|--all> [--data 시세파일.json] [--config 설정파일.toml|json]",
        program
    )
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => {
                let path = iter.next().ok_or("--data 뒤에 파일 경로가 필요합니다")?;
                parsed.data_path = Some(PathBuf::from(path));
            }
            "--config" => {
                let path = iter.next().ok_or("--config 뒤에 파일 경로가 필요합니다")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--all" => parsed.symbol = None,
            other if other.starts_with("--") => {
                return Err(format!("알 수 없는 옵션: {}", other));
            }
            symbol => parsed.symbol = Some(symbol.to_uppercase()),
        }
    }

    Ok(parsed)
}

fn run<S: PriceDataSource + std::fmt::Debug>(
    service: AnalysisService<S>,
    symbol: Option<&str>,
) -> Result<String, String> {
    let output = match symbol {
        Some(symbol) => {
            let result = service.analyze_symbol(symbol).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&result)
        }
        None => {
            let results = service.analyze_all().map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&results)
        }
    };
    output.map_err(|e| format!("JSON 직렬화 실패: {}", e))
}

fn main() -> ExitCode {
    env_logger::init();

    let raw_args: Vec<String> = env::args().collect();
    let program = raw_args.first().map(String::as_str).unwrap_or("analyze_prices");
    debug!("커맨드 라인 인수: {:?}", raw_args);

    if raw_args.len() < 2 {
        eprintln!("{}", usage(program));
        return ExitCode::FAILURE;
    }

    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}\n{}", e, usage(program));
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config_path {
        Some(path) => match ConfigLoader::load_from_file::<AnalysisConfig>(path, ConfigFormat::Auto)
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("설정 로드 실패: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            debug!("기본 설정 사용");
            AnalysisConfig::default()
        }
    };
    let analyzer = TechnicalAnalyzer::new(config);

    let output = match &args.data_path {
        Some(path) => match JsonFileDataSource::open(path) {
            Ok(source) => run(
                AnalysisService::new(source, analyzer),
                args.symbol.as_deref(),
            ),
            Err(e) => Err(e.to_string()),
        },
        None => {
            info!("합성 데이터 사용");
            run(
                AnalysisService::new(SyntheticDataSource::default(), analyzer),
                args.symbol.as_deref(),
            )
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("분석 실패: {}", e);
            eprintln!("분석 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}
