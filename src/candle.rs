use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// OHLC 캔들 데이터에 접근하기 위한 트레이트
///
/// 엔진은 `high >= max(open, close)`, `low <= min(open, close)` 조건을 검증하지 않습니다.
pub trait Candle: Clone + Debug + PartialEq + Send + Sync {
    /// 시가
    fn open_price(&self) -> f64;
    /// 고가
    fn high_price(&self) -> f64;
    /// 저가
    fn low_price(&self) -> f64;
    /// 종가
    fn close_price(&self) -> f64;
    /// 캔들 시작 시각
    fn datetime(&self) -> DateTime<Utc>;
    /// 거래량
    fn volume(&self) -> f64;

    /// 몸통 크기 (|종가 - 시가|)
    fn body(&self) -> f64 {
        (self.close_price() - self.open_price()).abs()
    }

    /// 전체 범위 (고가 - 저가)
    fn range(&self) -> f64 {
        self.high_price() - self.low_price()
    }

    /// 윗꼬리 길이
    fn upper_shadow(&self) -> f64 {
        self.high_price() - self.open_price().max(self.close_price())
    }

    /// 아랫꼬리 길이
    fn lower_shadow(&self) -> f64 {
        self.open_price().min(self.close_price()) - self.low_price()
    }
}

/// 기본 OHLC 캔들
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcCandle {
    pub datetime: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl OhlcCandle {
    pub fn new(
        datetime: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        OhlcCandle {
            datetime,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl Display for OhlcCandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OhlcCandle({}, o={}, h={}, l={}, c={}, v={})",
            self.datetime.format("%Y-%m-%d"),
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume
        )
    }
}

impl Candle for OhlcCandle {
    fn open_price(&self) -> f64 {
        self.open
    }

    fn high_price(&self) -> f64 {
        self.high
    }

    fn low_price(&self) -> f64 {
        self.low
    }

    fn close_price(&self) -> f64 {
        self.close
    }

    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// 캔들 목록에서 종가만 추출 (입력 순서 유지)
pub fn close_prices<C: Candle>(candles: &[C]) -> Vec<f64> {
    candles.iter().map(|candle| candle.close_price()).collect()
}
