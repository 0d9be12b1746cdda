use crate::config::RecommendationConfig;
use crate::model::{Recommendation, RecommendationAction, Signal, SignalType, Trend};

/// 신호와 추세를 결합해 매매 추천을 생성하는 분석기
///
/// 목표가/손절가는 변동성과 무관하게 최종가의 고정 비율(기본 ±5%)입니다.
#[derive(Debug, Clone, Default)]
pub struct RecommendationAnalyzer {
    config: RecommendationConfig,
}

impl RecommendationAnalyzer {
    pub fn new(config: RecommendationConfig) -> Self {
        RecommendationAnalyzer { config }
    }

    /// 추천 생성
    ///
    /// - 매수 신호이고 하락 추세가 아니면 매수 (신뢰도 +0.1, 최대 0.9)
    /// - 매도 신호이고 상승 추세가 아니면 매도 (동일)
    /// - 그 외에는 보유, 신뢰도 0.5 고정
    pub fn analyze(&self, last_price: f64, signal: &Signal, trend: Trend) -> Recommendation {
        let boosted =
            (signal.confidence + self.config.confidence_boost).min(self.config.max_confidence);
        let up = last_price * (1.0 + self.config.target_rate);
        let down = last_price * (1.0 - self.config.target_rate);

        match (signal.signal_type, trend) {
            (SignalType::Buy, trend) if trend != Trend::Bearish => Recommendation {
                action: RecommendationAction::Buy,
                reason: format!("Signal d'achat confirmé par une tendance {}", trend),
                confidence: boosted,
                target_price: up,
                stop_loss: down,
            },
            (SignalType::Sell, trend) if trend != Trend::Bullish => Recommendation {
                action: RecommendationAction::Sell,
                reason: format!("Signal de vente confirmé par une tendance {}", trend),
                confidence: boosted,
                target_price: down,
                stop_loss: up,
            },
            (signal_type, trend) => Recommendation {
                action: RecommendationAction::Hold,
                reason: format!(
                    "Signal {} et tendance {}: pas de conviction suffisante",
                    signal_type, trend
                ),
                confidence: self.config.hold_confidence,
                target_price: up,
                stop_loss: down,
            },
        }
    }
}
