use crate::candle::Candle;
use crate::indicator::TABuilder;
use std::fmt::Display;
use std::marker::PhantomData;

/// 데이터가 부족할 때 반환하는 중립 RSI 값
pub const NEUTRAL_RSI: f64 = 50.0;

/// 이득/손실 합계에 변화량 하나를 더함
fn accumulate((gain, loss): (f64, f64), change: f64) -> (f64, f64) {
    if change > 0.0 {
        (gain + change, loss)
    } else {
        (gain, loss - change)
    }
}

/// Wilder 평활 평균 이득/손실
#[derive(Debug, Clone, Copy)]
struct WilderAverages {
    gain: f64,
    loss: f64,
}

impl WilderAverages {
    /// 첫 period개의 변화량에 대한 단순 평균
    fn seed(prices: &[f64], period: usize) -> Self {
        let (gain, loss) = prices
            .windows(2)
            .take(period)
            .fold((0.0, 0.0), |sums, pair| accumulate(sums, pair[1] - pair[0]));

        Self::from_sums(gain, loss, period)
    }

    fn from_sums(gain: f64, loss: f64, period: usize) -> Self {
        WilderAverages {
            gain: gain / period as f64,
            loss: loss / period as f64,
        }
    }

    /// `avg = (avg * (period - 1) + delta) / period`
    fn smooth(&mut self, change: f64, period: usize) {
        let p = period as f64;
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };
        self.gain = (self.gain * (p - 1.0) + gain) / p;
        self.loss = (self.loss * (p - 1.0) + loss) / p;
    }

    fn rsi(&self) -> f64 {
        // 평균 손실이 0이면 100으로 포화
        if self.loss == 0.0 {
            return 100.0;
        }
        let rs = self.gain / self.loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// Wilder 방식 RSI 계산
///
/// `prices.len() < period + 1`이거나 `period`가 0이면 중립값 50을 반환합니다.
/// 결과는 항상 [0, 100] 범위입니다.
///
/// # Arguments
/// * `prices` - 시간 순서의 종가
/// * `period` - RSI 기간 (일반적으로 14)
pub fn calculate_rsi(prices: &[f64], period: usize) -> f64 {
    calculate_rsi_series(prices, period)
        .last()
        .copied()
        .unwrap_or(NEUTRAL_RSI)
}

/// 각 시점의 RSI 시리즈 계산 (차트용)
///
/// 첫 값은 `prices[period]` 시점이며, 결과 길이는 `prices.len() - period`입니다.
/// 데이터가 부족하면 빈 벡터를 반환합니다.
pub fn calculate_rsi_series(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period + 1 {
        log::trace!(
            "RSI 데이터 부족: {}개 (필요: {}개)",
            prices.len(),
            period + 1
        );
        return Vec::new();
    }

    let mut averages = WilderAverages::seed(prices, period);
    let mut series = Vec::with_capacity(prices.len() - period);
    series.push(averages.rsi());

    for pair in prices[period..].windows(2) {
        averages.smooth(pair[1] - pair[0], period);
        series.push(averages.rsi());
    }

    series
}

/// 상대강도지수(RSI) 스냅샷
///
/// RSI는 가격 변동의 상대적 강도를 측정하여 과매수/과매도 상태를 판단
#[derive(Clone, Debug, PartialEq)]
pub struct RSI {
    period: usize,
    /// RSI 값 (0-100)
    pub value: f64,
}

impl Display for RSI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({}: {:.2})", self.period, self.value)
    }
}

impl RSI {
    /// RSI가 과매수 상태인지 확인
    ///
    /// # Arguments
    /// * `threshold` - 과매수 기준값 (기본값 70.0)
    pub fn is_overbought(&self, threshold: Option<f64>) -> bool {
        self.value > threshold.unwrap_or(70.0)
    }

    /// RSI가 과매도 상태인지 확인
    ///
    /// # Arguments
    /// * `threshold` - 과매도 기준값 (기본값 30.0)
    pub fn is_oversold(&self, threshold: Option<f64>) -> bool {
        self.value < threshold.unwrap_or(30.0)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// 상대강도지수(RSI) 기술적 지표 빌더
///
/// 직전 종가와 Wilder 평균만 유지하며 증분 계산합니다.
/// 결과는 전체 시퀀스에 `calculate_rsi`를 적용한 값과 같습니다.
#[derive(Debug)]
pub struct RSIBuilder<C: Candle> {
    period: usize,
    previous_close: Option<f64>,
    /// 시드 구간에서 누적한 변화량 수와 이득/손실 합계
    seed_count: usize,
    seed_sums: (f64, f64),
    averages: Option<WilderAverages>,
    _phantom: PhantomData<C>,
}

impl<C> RSIBuilder<C>
where
    C: Candle,
{
    /// 새 RSI 빌더 생성
    ///
    /// # Panics
    /// * `period`가 0이면 패닉 발생
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("RSI 기간은 0보다 커야 합니다");
        }

        Self {
            period,
            previous_close: None,
            seed_count: 0,
            seed_sums: (0.0, 0.0),
            averages: None,
            _phantom: PhantomData,
        }
    }

    fn reset(&mut self) {
        self.previous_close = None;
        self.seed_count = 0;
        self.seed_sums = (0.0, 0.0);
        self.averages = None;
    }

    fn push(&mut self, price: f64) {
        let Some(previous) = self.previous_close.replace(price) else {
            return;
        };
        let change = price - previous;

        match self.averages.as_mut() {
            Some(averages) => averages.smooth(change, self.period),
            None => {
                self.seed_sums = accumulate(self.seed_sums, change);
                self.seed_count += 1;
                if self.seed_count == self.period {
                    let (gain, loss) = self.seed_sums;
                    self.averages = Some(WilderAverages::from_sums(gain, loss, self.period));
                }
            }
        }
    }

    fn current(&self) -> RSI {
        RSI {
            period: self.period,
            value: self
                .averages
                .map(|averages| averages.rsi())
                .unwrap_or(NEUTRAL_RSI),
        }
    }
}

impl<C> TABuilder<RSI, C> for RSIBuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> RSI {
        self.reset();
        for candle in data {
            self.push(candle.close_price());
        }
        self.current()
    }

    fn next(&mut self, data: &C) -> RSI {
        self.push(data.close_price());
        self.current()
    }
}
