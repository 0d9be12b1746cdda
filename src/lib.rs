pub mod analyzer;
pub mod candle;
pub mod candle_store;
pub mod indicator;
pub mod model;
pub mod service;
pub mod source;
pub mod technical_analysis;

/// 설정
pub mod config;
pub mod config_loader;

pub use config::AnalysisConfig;
pub use service::AnalysisService;
pub use technical_analysis::{AnalysisResult, ChartSeries, TechnicalAnalyzer};
