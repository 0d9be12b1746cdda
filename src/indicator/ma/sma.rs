use crate::candle::Candle;
use crate::indicator::TABuilder;
use std::fmt::Display;
use std::marker::PhantomData;
use std::slice::Windows;

/// 단순이동평균(SMA) 시리즈
///
/// 완전히 채워진 윈도우마다 하나의 값을 지연 계산합니다.
/// `Clone`으로 복제하면 처음부터 다시 순회할 수 있습니다.
#[derive(Debug, Clone)]
pub struct SmaSeries<'a> {
    windows: Windows<'a, f64>,
    period: usize,
}

impl SmaSeries<'_> {
    fn average(&self, window: &[f64]) -> f64 {
        window.iter().sum::<f64>() / self.period as f64
    }
}

impl Iterator for SmaSeries<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let window = self.windows.next()?;
        Some(self.average(window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl DoubleEndedIterator for SmaSeries<'_> {
    fn next_back(&mut self) -> Option<f64> {
        let window = self.windows.next_back()?;
        Some(self.average(window))
    }
}

impl ExactSizeIterator for SmaSeries<'_> {}

/// 단순이동평균 시리즈 생성
///
/// 결과 길이는 `max(0, prices.len() - period + 1)`이며,
/// 데이터가 부족하거나 `period`가 0이면 빈 시리즈입니다.
///
/// # Arguments
/// * `prices` - 시간 순서의 종가
/// * `period` - 윈도우 크기
pub fn sma(prices: &[f64], period: usize) -> SmaSeries<'_> {
    // period 0은 빈 입력으로 취급 (windows(0)은 패닉)
    let source = if period == 0 { &prices[..0] } else { prices };

    SmaSeries {
        windows: source.windows(period.max(1)),
        period: period.max(1),
    }
}

/// 단순이동평균(SMA) 스냅샷
#[derive(Clone, Debug, PartialEq)]
pub struct SMA {
    period: usize,
    value: f64,
}

impl SMA {
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for SMA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({}: {:.2})", self.period, self.value)
    }
}

/// 단순이동평균(SMA) 계산 빌더
///
/// 데이터가 부족하면 마지막 종가를 값으로 사용합니다.
#[derive(Debug)]
pub struct SMABuilder<C: Candle> {
    pub period: usize,
    /// 최근 period개의 종가
    values: Vec<f64>,
    _phantom: PhantomData<C>,
}

impl<C> SMABuilder<C>
where
    C: Candle,
{
    /// 새 SMA 빌더 생성
    ///
    /// # Panics
    /// * `period`가 0이면 패닉 발생
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("SMA 기간은 0보다 커야 합니다");
        }

        SMABuilder {
            period,
            values: Vec::with_capacity(period + 1),
            _phantom: PhantomData,
        }
    }

    fn current(&self) -> SMA {
        let value = if self.values.len() < self.period {
            self.values.last().copied().unwrap_or(0.0)
        } else {
            sma(&self.values, self.period).next_back().unwrap_or(0.0)
        };

        SMA {
            period: self.period,
            value,
        }
    }

    fn push(&mut self, price: f64) {
        self.values.push(price);
        if self.values.len() > self.period {
            let excess = self.values.len() - self.period;
            self.values.drain(0..excess);
        }
    }
}

impl<C> TABuilder<SMA, C> for SMABuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> SMA {
        self.values.clear();
        for candle in data {
            self.push(candle.close_price());
        }
        self.current()
    }

    fn next(&mut self, data: &C) -> SMA {
        self.push(data.close_price());
        self.current()
    }
}
