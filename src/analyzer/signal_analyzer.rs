use crate::config::SignalConfig;
use crate::model::{IndicatorSet, Quote, Signal, SignalType};

/// 지표별 매수/매도 가중치 집계
///
/// RSI와 볼린저 밴드 조건은 발동했을 때만 분모(`total`)에 더해집니다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalScore {
    pub buy: f64,
    pub sell: f64,
    pub total: f64,
}

impl SignalScore {
    fn add_buy(&mut self, weight: f64) {
        self.buy += weight;
        self.total += weight;
    }

    fn add_sell(&mut self, weight: f64) {
        self.sell += weight;
        self.total += weight;
    }

    /// `max(buy, sell) / total` (분모가 0이면 0.0)
    pub fn confidence(&self) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        self.buy.max(self.sell) / self.total
    }
}

/// 지표 스냅샷과 현재 시세로 매수/매도/중립 신호를 분류하는 분석기
#[derive(Debug, Clone, Default)]
pub struct SignalAnalyzer {
    config: SignalConfig,
}

impl SignalAnalyzer {
    pub fn new(config: SignalConfig) -> Self {
        SignalAnalyzer { config }
    }

    /// 가중치 집계
    ///
    /// - RSI 과매도 +2 매수 / 과매수 +2 매도
    /// - MACD > 0 이면 +1 매수, 아니면 +1 매도
    /// - 가격 > SMA 이면 +1 매수, 아니면 +1 매도
    /// - 가격 < 하단 밴드 +1 매수 / 가격 > 상단 밴드 +1 매도 (밴드 안이면 없음)
    pub fn score(&self, last_price: f64, indicators: &IndicatorSet) -> SignalScore {
        let mut score = SignalScore::default();

        if indicators.rsi < self.config.oversold {
            score.add_buy(2.0);
        } else if indicators.rsi > self.config.overbought {
            score.add_sell(2.0);
        }

        if indicators.macd > 0.0 {
            score.add_buy(1.0);
        } else {
            score.add_sell(1.0);
        }

        if last_price > indicators.sma {
            score.add_buy(1.0);
        } else {
            score.add_sell(1.0);
        }

        if last_price < indicators.bollinger.lower {
            score.add_buy(1.0);
        } else if last_price > indicators.bollinger.upper {
            score.add_sell(1.0);
        }

        score
    }

    /// 신호 분류
    ///
    /// 한쪽 가중치가 우세하고 신뢰도가 기준(기본 0.6)을 초과할 때만 매수/매도이며,
    /// 동률이거나 기준 이하이면 항상 중립입니다.
    pub fn analyze(&self, quote: &Quote, indicators: &IndicatorSet) -> Signal {
        let score = self.score(quote.last_price, indicators);
        let confidence = score.confidence();
        let threshold = self.config.confidence_threshold;

        let signal_type = if score.buy > score.sell && confidence > threshold {
            SignalType::Buy
        } else if score.sell > score.buy && confidence > threshold {
            SignalType::Sell
        } else {
            SignalType::Neutral
        };

        log::debug!(
            "{} 신호: {} (매수 {}, 매도 {}, 합계 {})",
            quote.symbol,
            signal_type,
            score.buy,
            score.sell,
            score.total
        );

        Signal {
            signal_type,
            confidence,
            description: describe(signal_type, indicators),
        }
    }
}

fn describe(signal_type: SignalType, indicators: &IndicatorSet) -> String {
    match signal_type {
        SignalType::Buy => format!(
            "Signal d'achat: indicateurs majoritairement haussiers (RSI {:.1}, MACD {:.2})",
            indicators.rsi, indicators.macd
        ),
        SignalType::Sell => format!(
            "Signal de vente: indicateurs majoritairement baissiers (RSI {:.1}, MACD {:.2})",
            indicators.rsi, indicators.macd
        ),
        SignalType::Neutral => format!(
            "Signal neutre: indicateurs partagés (RSI {:.1}, MACD {:.2})",
            indicators.rsi, indicators.macd
        ),
    }
}
