#![allow(dead_code)]

use brvm_analysis::candle::Candle;
use chrono::{DateTime, Utc};

pub const EPSILON: f64 = 1e-9;

pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "기대값 {} 과 실제값 {} 이 다름",
        expected,
        actual
    );
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCandle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl std::fmt::Display for TestCandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TestCandle(t={}, o={}, h={}, l={}, c={}, v={})",
            self.timestamp, self.open, self.high, self.low, self.close, self.volume
        )
    }
}

impl Candle for TestCandle {
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
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or_default()
    }
    fn volume(&self) -> f64 {
        self.volume
    }
}

impl TestCandle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        TestCandle {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 뚜렷한 패턴이 없는 일반 양봉
    pub fn plain(timestamp: i64, open: f64, close: f64) -> Self {
        let high = open.max(close) + 1.0;
        let low = open.min(close) - 1.0;
        TestCandle::new(timestamp, open, high, low, close, 1000.0)
    }
}

/// 종가 목록을 캔들로 변환 (시가 = 이전 종가)
pub fn candles_from_closes(closes: &[f64]) -> Vec<TestCandle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            TestCandle::new(
                i as i64,
                open,
                open.max(close) + 0.5,
                open.min(close) - 0.5,
                close,
                1000.0,
            )
        })
        .collect()
}

/// +3, -2를 번갈아 반복하는 완만한 상승 지그재그 (90에서 시작, 40개면 112로 끝남)
pub fn zigzag_uptrend(count: usize) -> Vec<f64> {
    let mut prices = Vec::with_capacity(count);
    let mut price = 90.0;
    for i in 0..count {
        prices.push(price);
        price += if i % 2 == 0 { 3.0 } else { -2.0 };
    }
    prices
}

/// -3, +2를 번갈아 반복하는 완만한 하락 지그재그
pub fn zigzag_downtrend(count: usize, start: f64) -> Vec<f64> {
    let mut prices = Vec::with_capacity(count);
    let mut price = start;
    for i in 0..count {
        prices.push(price);
        price += if i % 2 == 0 { -3.0 } else { 2.0 };
    }
    prices
}

pub fn linear_prices(count: usize, start: f64, step: f64) -> Vec<f64> {
    (0..count).map(|i| start + i as f64 * step).collect()
}
