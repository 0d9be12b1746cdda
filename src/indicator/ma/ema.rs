use crate::candle::Candle;
use crate::indicator::TABuilder;
use crate::indicator::utils::moving_average;
use std::fmt::Display;
use std::marker::PhantomData;

/// 지수이동평균(EMA) 시리즈 계산
///
/// 첫 값은 첫 종가로 시드됩니다 (`ema[0] = prices[0]`, 기간 SMA 시드가 아님).
/// 이후 `ema[i] = (prices[i] - ema[i-1]) * k + ema[i-1]`, `k = 2 / (period + 1)`.
/// 결과 길이는 입력 길이와 같습니다. `period`가 0이면 빈 벡터를 반환합니다.
///
/// # Arguments
/// * `prices` - 시간 순서의 종가
/// * `period` - EMA 기간
pub fn ema(prices: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = prices.first() else {
        return Vec::new();
    };
    if period == 0 {
        return Vec::new();
    }

    let alpha = moving_average::calculate_ema_alpha(period);
    let mut result = Vec::with_capacity(prices.len());
    result.push(first);

    let mut previous = first;
    for &price in &prices[1..] {
        previous = moving_average::calculate_ema_step(price, previous, alpha);
        result.push(previous);
    }

    result
}

/// 지수이동평균(EMA) 스냅샷
#[derive(Clone, Debug, PartialEq)]
pub struct EMA {
    period: usize,
    value: f64,
}

impl EMA {
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for EMA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({}: {:.2})", self.period, self.value)
    }
}

/// 지수이동평균(EMA) 계산 빌더
///
/// 직전 EMA 값만 유지하며 증분 계산합니다.
#[derive(Debug)]
pub struct EMABuilder<C: Candle> {
    pub period: usize,
    alpha: f64,
    previous_ema: Option<f64>,
    _phantom: PhantomData<C>,
}

impl<C> EMABuilder<C>
where
    C: Candle,
{
    /// 새 EMA 빌더 생성
    ///
    /// # Panics
    /// * `period`가 0이면 패닉 발생
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("EMA 기간은 0보다 커야 합니다");
        }

        EMABuilder {
            period,
            alpha: moving_average::calculate_ema_alpha(period),
            previous_ema: None,
            _phantom: PhantomData,
        }
    }

    fn push(&mut self, price: f64) -> EMA {
        let value = match self.previous_ema {
            Some(previous) => moving_average::calculate_ema_step(price, previous, self.alpha),
            None => price,
        };
        self.previous_ema = Some(value);

        EMA {
            period: self.period,
            value,
        }
    }
}

impl<C> TABuilder<EMA, C> for EMABuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> EMA {
        self.previous_ema = None;

        let mut current = EMA {
            period: self.period,
            value: 0.0,
        };
        for candle in data {
            current = self.push(candle.close_price());
        }
        current
    }

    fn next(&mut self, data: &C) -> EMA {
        self.push(data.close_price())
    }
}
