use crate::config::TrendConfig;
use crate::indicator::ma::sma::sma;
use crate::model::Trend;

/// 추세 분류기
///
/// 최근 `period`개 가격에 `period / 2` 윈도우 SMA를 적용하고 첫 값과 마지막 값을 비교합니다.
/// 차이가 윈도우 첫 가격의 `threshold`(기본 2%)를 넘으면 상승, `-threshold` 미만이면 하락입니다.
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig) -> Self {
        TrendAnalyzer { config }
    }

    pub fn period(&self) -> usize {
        self.config.period
    }

    /// 데이터가 `period`보다 짧으면 횡보를 반환합니다.
    pub fn analyze(&self, prices: &[f64]) -> Trend {
        let period = self.config.period;
        if period == 0 || prices.len() < period {
            log::trace!("추세 분석 데이터 부족: {}개 (필요: {}개)", prices.len(), period);
            return Trend::Sideways;
        }

        let recent = &prices[prices.len() - period..];
        let averages = sma(recent, (period / 2).max(1));
        let (Some(first), Some(last)) = (averages.clone().next(), averages.last()) else {
            return Trend::Sideways;
        };

        let change = last - first;
        let threshold = self.config.threshold * recent[0];

        if change > threshold {
            Trend::Bullish
        } else if change < -threshold {
            Trend::Bearish
        } else {
            Trend::Sideways
        }
    }
}
