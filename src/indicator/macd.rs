use crate::candle::Candle;
use crate::indicator::TABuilder;
use crate::indicator::ma::ema::ema;
use crate::indicator::utils::moving_average;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::marker::PhantomData;

/// 빠른 EMA 기본 기간
pub const DEFAULT_FAST_PERIOD: usize = 12;
/// 느린 EMA 기본 기간
pub const DEFAULT_SLOW_PERIOD: usize = 26;
/// 시그널 라인 기본 기간
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

/// MACD 계산 결과
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD 라인 (빠른 EMA - 느린 EMA)
    #[serde(rename = "ligneMACD")]
    pub macd_line: f64,
    /// 시그널 라인 (MACD 라인의 EMA)
    #[serde(rename = "ligneSignal")]
    pub signal_line: f64,
    /// 히스토그램 (MACD - 시그널)
    #[serde(rename = "histogramme")]
    pub histogram: f64,
}

impl MacdOutput {
    fn new(macd_line: f64, signal_line: f64) -> Self {
        MacdOutput {
            macd_line,
            signal_line,
            histogram: macd_line - signal_line,
        }
    }
}

impl Display for MacdOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MACD({:.4}, {:.4}, {:.4})",
            self.macd_line, self.signal_line, self.histogram
        )
    }
}

/// 기본 기간(12, 26, 9)으로 MACD 계산
///
/// `prices.len() < 26`이면 모든 값이 0인 결과를 반환합니다.
pub fn calculate_macd(prices: &[f64]) -> MacdOutput {
    calculate_macd_with(
        prices,
        DEFAULT_FAST_PERIOD,
        DEFAULT_SLOW_PERIOD,
        DEFAULT_SIGNAL_PERIOD,
    )
}

/// 지정한 기간으로 최신 시점의 MACD 계산
///
/// # Arguments
/// * `prices` - 시간 순서의 종가
/// * `fast_period` - 빠른 EMA 기간
/// * `slow_period` - 느린 EMA 기간 (필요 최소 데이터 길이)
/// * `signal_period` - 시그널 라인 기간
pub fn calculate_macd_with(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdOutput {
    calculate_macd_series(prices, fast_period, slow_period, signal_period)
        .last()
        .copied()
        .unwrap_or_default()
}

/// 입력 시점마다의 MACD 시리즈 계산
///
/// 시그널 라인은 전체 MACD 라인 시리즈의 EMA입니다.
/// 데이터가 `slow_period`보다 짧거나 기간이 0이면 빈 벡터를 반환합니다.
pub fn calculate_macd_series(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<MacdOutput> {
    if fast_period == 0 || slow_period == 0 || signal_period == 0 {
        return Vec::new();
    }
    if prices.len() < slow_period {
        log::trace!(
            "MACD 데이터 부족: {}개 (필요: {}개)",
            prices.len(),
            slow_period
        );
        return Vec::new();
    }

    let fast = ema(prices, fast_period);
    let slow = ema(prices, slow_period);
    let macd_lines: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_lines = ema(&macd_lines, signal_period);

    macd_lines
        .iter()
        .zip(&signal_lines)
        .map(|(&macd, &signal)| MacdOutput::new(macd, signal))
        .collect()
}

/// MACD 스냅샷
#[derive(Clone, Debug, PartialEq)]
pub struct MACD {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    pub output: MacdOutput,
}

impl MACD {
    pub fn macd_line(&self) -> f64 {
        self.output.macd_line
    }

    pub fn signal_line(&self) -> f64 {
        self.output.signal_line
    }

    pub fn histogram(&self) -> f64 {
        self.output.histogram
    }

    /// MACD 라인이 시그널 라인 위에 있는지 확인
    pub fn is_above_signal(&self) -> bool {
        self.output.macd_line > self.output.signal_line
    }
}

impl Display for MACD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MACD({},{},{}: {:.2}, {:.2}, {:.2})",
            self.fast_period,
            self.slow_period,
            self.signal_period,
            self.output.macd_line,
            self.output.signal_line,
            self.output.histogram
        )
    }
}

/// MACD 계산을 위한 빌더
///
/// 빠른/느린 EMA와 시그널 라인의 직전 값만 유지하며 증분 계산합니다.
/// 결과는 전체 시퀀스에 `calculate_macd_with`를 적용한 값과 같습니다.
#[derive(Debug)]
pub struct MACDBuilder<C: Candle> {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    /// 지금까지 입력된 캔들 수
    count: usize,
    previous_fast_ema: Option<f64>,
    previous_slow_ema: Option<f64>,
    previous_signal_line: Option<f64>,
    _phantom: PhantomData<C>,
}

impl<C> MACDBuilder<C>
where
    C: Candle,
{
    /// 새 MACD 빌더 생성
    ///
    /// # Panics
    /// * 기간이 0이거나 빠른 기간이 느린 기간 이상이면 패닉 발생
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        if fast_period == 0 || slow_period == 0 || signal_period == 0 {
            panic!("MACD 기간은 0보다 커야 합니다");
        }

        if fast_period >= slow_period {
            panic!("빠른 기간은 느린 기간보다 작아야 합니다");
        }

        Self {
            fast_period,
            slow_period,
            signal_period,
            count: 0,
            previous_fast_ema: None,
            previous_slow_ema: None,
            previous_signal_line: None,
            _phantom: PhantomData,
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.previous_fast_ema = None;
        self.previous_slow_ema = None;
        self.previous_signal_line = None;
    }

    fn step(previous: Option<f64>, value: f64, period: usize) -> f64 {
        match previous {
            Some(previous) => moving_average::calculate_ema_step(
                value,
                previous,
                moving_average::calculate_ema_alpha(period),
            ),
            None => value,
        }
    }

    fn push(&mut self, price: f64) -> MACD {
        let fast = Self::step(self.previous_fast_ema, price, self.fast_period);
        let slow = Self::step(self.previous_slow_ema, price, self.slow_period);
        let macd_line = fast - slow;
        let signal = Self::step(self.previous_signal_line, macd_line, self.signal_period);

        self.previous_fast_ema = Some(fast);
        self.previous_slow_ema = Some(slow);
        self.previous_signal_line = Some(signal);
        self.count += 1;

        self.current(MacdOutput::new(macd_line, signal))
    }

    fn current(&self, output: MacdOutput) -> MACD {
        let output = if self.count < self.slow_period {
            MacdOutput::default()
        } else {
            output
        };

        MACD {
            fast_period: self.fast_period,
            slow_period: self.slow_period,
            signal_period: self.signal_period,
            output,
        }
    }
}

impl<C> TABuilder<MACD, C> for MACDBuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> MACD {
        self.reset();

        let mut current = self.current(MacdOutput::default());
        for candle in data {
            current = self.push(candle.close_price());
        }
        current
    }

    fn next(&mut self, data: &C) -> MACD {
        self.push(data.close_price())
    }
}
