use crate::config_loader::{ConfigError, ConfigResult, ConfigValidation};
use crate::indicator::bband::{DEFAULT_BBAND_MULTIPLIER, DEFAULT_BBAND_PERIOD};
use crate::indicator::macd::{DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD};
use serde::{Deserialize, Serialize};

/// 지표 계산 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub sma_period: usize,
    pub ema_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bband_period: usize,
    pub bband_multiplier: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            rsi_period: 14,
            sma_period: 20,
            ema_period: 20,
            macd_fast: DEFAULT_FAST_PERIOD,
            macd_slow: DEFAULT_SLOW_PERIOD,
            macd_signal: DEFAULT_SIGNAL_PERIOD,
            bband_period: DEFAULT_BBAND_PERIOD,
            bband_multiplier: DEFAULT_BBAND_MULTIPLIER,
        }
    }
}

/// 신호 분석 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// 과매도 기준 (이 값 미만이면 강한 매수 가중치)
    pub oversold: f64,
    /// 과매수 기준 (이 값 초과면 강한 매도 가중치)
    pub overbought: f64,
    /// 매수/매도로 분류하기 위한 최소 신뢰도 (초과)
    pub confidence_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        SignalConfig {
            oversold: 30.0,
            overbought: 70.0,
            confidence_threshold: 0.6,
        }
    }
}

/// 추세 분류 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    pub period: usize,
    /// 첫 가격 대비 변화 비율 기준 (0.02 = 2%)
    pub threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        TrendConfig {
            period: 20,
            threshold: 0.02,
        }
    }
}

/// 추천 생성 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub confidence_boost: f64,
    pub max_confidence: f64,
    pub hold_confidence: f64,
    /// 목표가/손절가 비율 (0.05 = ±5%)
    pub target_rate: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        RecommendationConfig {
            confidence_boost: 0.1,
            max_confidence: 0.9,
            hold_confidence: 0.5,
            target_rate: 0.05,
        }
    }
}

/// 기술적 분석 엔진 전체 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub indicators: IndicatorConfig,
    pub signal: SignalConfig,
    pub trend: TrendConfig,
    pub recommendation: RecommendationConfig,
}

fn ensure(condition: bool, message: &str) -> ConfigResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(message.to_string()))
    }
}

fn is_ratio(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

impl ConfigValidation for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        let ind = &self.indicators;
        ensure(
            ind.rsi_period > 0
                && ind.sma_period > 0
                && ind.ema_period > 0
                && ind.bband_period > 0
                && ind.macd_fast > 0
                && ind.macd_slow > 0
                && ind.macd_signal > 0,
            "지표 기간은 0보다 커야 합니다",
        )?;
        ensure(
            ind.macd_fast < ind.macd_slow,
            "MACD 빠른 기간은 느린 기간보다 작아야 합니다",
        )?;
        ensure(
            ind.bband_multiplier >= 0.0,
            "볼린저 밴드 배수는 0 이상이어야 합니다",
        )?;

        let signal = &self.signal;
        ensure(
            (0.0..=100.0).contains(&signal.oversold) && (0.0..=100.0).contains(&signal.overbought),
            "RSI 기준값은 0에서 100 사이여야 합니다",
        )?;
        ensure(
            signal.oversold < signal.overbought,
            "과매도 기준은 과매수 기준보다 작아야 합니다",
        )?;
        ensure(
            is_ratio(signal.confidence_threshold),
            "신뢰도 기준은 0에서 1 사이여야 합니다",
        )?;

        ensure(self.trend.period > 0, "추세 기간은 0보다 커야 합니다")?;
        ensure(self.trend.threshold >= 0.0, "추세 기준은 0 이상이어야 합니다")?;

        let rec = &self.recommendation;
        ensure(
            is_ratio(rec.confidence_boost)
                && is_ratio(rec.max_confidence)
                && is_ratio(rec.hold_confidence),
            "추천 신뢰도 값은 0에서 1 사이여야 합니다",
        )?;
        ensure(rec.target_rate >= 0.0, "목표가 비율은 0 이상이어야 합니다")?;

        Ok(())
    }
}
