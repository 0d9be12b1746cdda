use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 종목의 현재 거래 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// 종목 코드 (예: SNTS)
    pub symbol: String,
    /// 종목명
    #[serde(default)]
    pub name: String,
    /// 업종
    #[serde(default)]
    pub sector: String,
    /// 최종 체결가
    pub last_price: f64,
    /// 거래량
    #[serde(default)]
    pub volume: f64,
    /// 전일 대비 변동률 (%)
    #[serde(default)]
    pub variation: f64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, last_price: f64) -> Self {
        Quote {
            symbol: symbol.into(),
            name: String::new(),
            sector: String::new(),
            last_price,
            volume: 0.0,
            variation: 0.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_variation(mut self, variation: f64) -> Self {
        self.variation = variation;
        self
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quote({}: {:.2}, {:+.2}%)",
            self.symbol, self.last_price, self.variation
        )
    }
}

/// 볼린저 밴드 스냅샷
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBand {
    pub upper: f64,
    #[serde(rename = "mid")]
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBand {
    /// 모든 밴드가 한 가격으로 모인 밴드
    pub fn collapsed(price: f64) -> Self {
        BollingerBand {
            upper: price,
            middle: price,
            lower: price,
        }
    }
}

/// 최신 지표 값 스냅샷
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    /// MACD 라인 값
    pub macd: f64,
    pub sma: f64,
    pub ema: f64,
    pub bollinger: BollingerBand,
}

impl Display for IndicatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Indicators(RSI: {:.2}, MACD: {:.4}, SMA: {:.2}, EMA: {:.2}, BB: {:.2}/{:.2}/{:.2})",
            self.rsi,
            self.macd,
            self.sma,
            self.ema,
            self.bollinger.upper,
            self.bollinger.middle,
            self.bollinger.lower
        )
    }
}

/// 매매 신호 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    /// 매수 신호
    #[serde(rename = "achat")]
    Buy,
    /// 매도 신호
    #[serde(rename = "vente")]
    Sell,
    /// 중립
    #[serde(rename = "neutre")]
    Neutral,
}

impl Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalType::Buy => write!(f, "achat"),
            SignalType::Sell => write!(f, "vente"),
            SignalType::Neutral => write!(f, "neutre"),
        }
    }
}

/// 지표 기반 매매 신호
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// 신뢰도 (0.0-1.0)
    pub confidence: f64,
    pub description: String,
}

/// 추세 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// 상승 추세
    #[serde(rename = "haussière")]
    Bullish,
    /// 하락 추세
    #[serde(rename = "baissière")]
    Bearish,
    /// 횡보
    #[serde(rename = "latérale")]
    Sideways,
}

impl Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Bullish => write!(f, "haussière"),
            Trend::Bearish => write!(f, "baissière"),
            Trend::Sideways => write!(f, "latérale"),
        }
    }
}

/// 추천 행동
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationAction {
    #[serde(rename = "acheter")]
    Buy,
    #[serde(rename = "vendre")]
    Sell,
    #[serde(rename = "tenir")]
    Hold,
}

impl Display for RecommendationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationAction::Buy => write!(f, "acheter"),
            RecommendationAction::Sell => write!(f, "vendre"),
            RecommendationAction::Hold => write!(f, "tenir"),
        }
    }
}

/// 신호와 추세를 결합한 매매 추천
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub reason: String,
    pub confidence: f64,
    pub target_price: f64,
    pub stop_loss: f64,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Recommendation({}: {:.0}%, target={:.2}, stop={:.2})",
            self.action,
            self.confidence * 100.0,
            self.target_price,
            self.stop_loss
        )
    }
}
