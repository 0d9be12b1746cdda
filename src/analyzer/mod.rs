// 기술적 분석기 모듈
// 지표 스냅샷, 캔들, 가격 시퀀스를 해석해 신호/패턴/레벨/추세/추천을 만듭니다.

pub mod candle_pattern_analyzer;
pub mod recommendation_analyzer;
pub mod signal_analyzer;
pub mod support_resistance_analyzer;
pub mod trend_analyzer;

pub use candle_pattern_analyzer::{CandlePattern, CandlePatternAnalyzer};
pub use recommendation_analyzer::RecommendationAnalyzer;
pub use signal_analyzer::{SignalAnalyzer, SignalScore};
pub use support_resistance_analyzer::{PriceLevel, SupportResistance, SupportResistanceAnalyzer};
pub use trend_analyzer::TrendAnalyzer;
