use crate::analyzer::{
    CandlePattern, CandlePatternAnalyzer, RecommendationAnalyzer, SignalAnalyzer,
    SupportResistance, SupportResistanceAnalyzer, TrendAnalyzer,
};
use crate::candle::{Candle, close_prices};
use crate::candle_store::CandleStore;
use crate::config::{AnalysisConfig, IndicatorConfig};
use crate::indicator::{
    MacdOutput, calculate_bollinger_bands, calculate_macd_series, calculate_macd_with,
    calculate_rsi, calculate_rsi_series, ema, sma,
};
use crate::model::{BollingerBand, IndicatorSet, Quote, Recommendation, Signal, Trend};
use serde::Serialize;
use std::fmt::Display;

/// 차트 렌더링용 지표 시리즈
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub closes: Vec<f64>,
    /// SMA 시리즈 (period번째 종가부터 정렬)
    pub sma: Vec<f64>,
    /// EMA 시리즈 (종가와 같은 길이)
    pub ema: Vec<f64>,
    /// 볼린저 밴드 시리즈 (SMA와 정렬)
    pub bollinger: Vec<BollingerBand>,
    /// RSI 시리즈 (rsi_period번째 종가 다음부터)
    pub rsi: Vec<f64>,
    pub macd: Vec<MacdOutput>,
}

/// 한 번의 분석 호출 결과
///
/// 매 요청마다 다시 계산되는 값 객체이며 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub quote: Quote,
    pub indicators: IndicatorSet,
    pub signal: Signal,
    pub trend: Trend,
    pub patterns: Vec<CandlePattern>,
    pub support_resistance: SupportResistance,
    pub recommendation: Recommendation,
    pub chart: ChartSeries,
}

impl Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | signal {} ({:.2}) | tendance {} | {}",
            self.quote,
            self.indicators,
            self.signal.signal_type,
            self.signal.confidence,
            self.trend,
            self.recommendation
        )
    }
}

/// 기술적 분석 엔진
///
/// 상태가 없으며 한 번 생성해 참조로 공유합니다.
/// 데이터 흐름: 종가 → 지표 → 신호 → 추천, 종가/캔들 → 패턴·지지저항·추세.
#[derive(Debug, Clone, Default)]
pub struct TechnicalAnalyzer {
    indicator_config: IndicatorConfig,
    signal_analyzer: SignalAnalyzer,
    pattern_analyzer: CandlePatternAnalyzer,
    level_analyzer: SupportResistanceAnalyzer,
    trend_analyzer: TrendAnalyzer,
    recommendation_analyzer: RecommendationAnalyzer,
}

impl TechnicalAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        TechnicalAnalyzer {
            indicator_config: config.indicators,
            signal_analyzer: SignalAnalyzer::new(config.signal),
            pattern_analyzer: CandlePatternAnalyzer::new(),
            level_analyzer: SupportResistanceAnalyzer::new(),
            trend_analyzer: TrendAnalyzer::new(config.trend),
            recommendation_analyzer: RecommendationAnalyzer::new(config.recommendation),
        }
    }

    /// 최신 지표 스냅샷 계산
    ///
    /// SMA/EMA/볼린저 밴드를 계산할 수 없으면 `fallback_price`를 사용합니다
    /// (밴드는 그 가격으로 모임). RSI는 50, MACD는 0으로 떨어집니다.
    /// MACD 느린 기간보다 짧은 이력에서는 MACD 0과 `가격 == SMA`가 모두 매도로
    /// 집계되므로, RSI가 중립이면 신호는 매도 쪽으로 기웁니다.
    pub fn indicators(&self, prices: &[f64], fallback_price: f64) -> IndicatorSet {
        let cfg = &self.indicator_config;

        IndicatorSet {
            rsi: calculate_rsi(prices, cfg.rsi_period),
            macd: calculate_macd_with(prices, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)
                .macd_line,
            sma: sma(prices, cfg.sma_period)
                .next_back()
                .unwrap_or(fallback_price),
            ema: ema(prices, cfg.ema_period)
                .last()
                .copied()
                .unwrap_or(fallback_price),
            bollinger: calculate_bollinger_bands(prices, cfg.bband_period, cfg.bband_multiplier)
                .last()
                .copied()
                .unwrap_or_else(|| BollingerBand::collapsed(fallback_price)),
        }
    }

    /// 차트용 지표 시리즈 계산
    pub fn chart_series(&self, prices: &[f64]) -> ChartSeries {
        let cfg = &self.indicator_config;

        ChartSeries {
            closes: prices.to_vec(),
            sma: sma(prices, cfg.sma_period).collect(),
            ema: ema(prices, cfg.ema_period),
            bollinger: calculate_bollinger_bands(prices, cfg.bband_period, cfg.bband_multiplier),
            rsi: calculate_rsi_series(prices, cfg.rsi_period),
            macd: calculate_macd_series(prices, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal),
        }
    }

    /// 시간 순서의 캔들로 전체 분석 수행
    pub fn analyze<C: Candle>(&self, quote: &Quote, candles: &[C]) -> AnalysisResult {
        let prices = close_prices(candles);
        let patterns = self.pattern_analyzer.analyze(candles);
        self.analyze_with_patterns(quote, &prices, patterns)
    }

    /// 캔들 저장소로 전체 분석 수행
    pub fn analyze_store<C: Candle>(
        &self,
        quote: &Quote,
        store: &CandleStore<C>,
    ) -> AnalysisResult {
        self.analyze(quote, &store.get_time_ordered_items())
    }

    /// 종가만으로 분석 수행 (캔들 패턴은 비어 있음)
    pub fn analyze_prices(&self, quote: &Quote, prices: &[f64]) -> AnalysisResult {
        self.analyze_with_patterns(quote, prices, Vec::new())
    }

    fn analyze_with_patterns(
        &self,
        quote: &Quote,
        prices: &[f64],
        patterns: Vec<CandlePattern>,
    ) -> AnalysisResult {
        let indicators = self.indicators(prices, quote.last_price);
        let signal = self.signal_analyzer.analyze(quote, &indicators);
        let trend = self.trend_analyzer.analyze(prices);
        let recommendation = self
            .recommendation_analyzer
            .analyze(quote.last_price, &signal, trend);

        let result = AnalysisResult {
            quote: quote.clone(),
            indicators,
            signal,
            trend,
            patterns,
            support_resistance: self.level_analyzer.analyze(prices),
            recommendation,
            chart: self.chart_series(prices),
        };

        log::debug!("분석 완료: {}", result);
        result
    }
}
