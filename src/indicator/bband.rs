use crate::candle::Candle;
use crate::indicator::TABuilder;
use crate::indicator::ma::sma::sma;
use crate::indicator::utils::population_std_dev;
use crate::model::BollingerBand;
use std::fmt::Display;
use std::marker::PhantomData;

/// 볼린저 밴드 기본 기간
pub const DEFAULT_BBAND_PERIOD: usize = 20;
/// 볼린저 밴드 기본 표준편차 배수
pub const DEFAULT_BBAND_MULTIPLIER: f64 = 2.0;

/// 볼린저 밴드 시리즈 계산
///
/// 중간 밴드는 SMA(period), 상/하단 밴드는 같은 윈도우의 모집단 표준편차에
/// `multiplier`를 곱해 더하고 뺀 값입니다. 결과는 SMA 시리즈와 같은 길이로 정렬되며,
/// 데이터가 부족하면 빈 벡터를 반환합니다.
///
/// # Arguments
/// * `prices` - 시간 순서의 종가
/// * `period` - 윈도우 크기 (기본 20)
/// * `multiplier` - 표준편차 배수 (기본 2.0)
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: usize,
    multiplier: f64,
) -> Vec<BollingerBand> {
    let middles = sma(prices, period);
    if middles.len() == 0 {
        return Vec::new();
    }

    middles
        .zip(prices.windows(period))
        .map(|(middle, window)| {
            let width = population_std_dev(window) * multiplier;
            BollingerBand {
                upper: middle + width,
                middle,
                lower: middle - width,
            }
        })
        .collect()
}

/// 볼린저 밴드 스냅샷
#[derive(Clone, Debug, PartialEq)]
pub struct BollingerBands {
    period: usize,
    multiplier: f64,
    pub band: BollingerBand,
}

impl BollingerBands {
    pub fn upper(&self) -> f64 {
        self.band.upper
    }

    pub fn middle(&self) -> f64 {
        self.band.middle
    }

    pub fn lower(&self) -> f64 {
        self.band.lower
    }

    /// 밴드 폭 (상단 - 하단)
    pub fn width(&self) -> f64 {
        self.band.upper - self.band.lower
    }

    /// 가격이 하단 밴드 아래에 있는지 확인
    pub fn is_below_lower(&self, price: f64) -> bool {
        price < self.band.lower
    }

    /// 가격이 상단 밴드 위에 있는지 확인
    pub fn is_above_upper(&self, price: f64) -> bool {
        price > self.band.upper
    }
}

impl Display for BollingerBands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BBand({}, {}: {:.2}, {:.2}, {:.2})",
            self.period, self.multiplier, self.band.upper, self.band.middle, self.band.lower
        )
    }
}

/// 볼린저 밴드 계산 빌더
///
/// 데이터가 부족하면 세 밴드 모두 마지막 종가로 모입니다.
#[derive(Debug)]
pub struct BBandBuilder<C: Candle> {
    period: usize,
    multiplier: f64,
    /// 최근 period개의 종가
    values: Vec<f64>,
    _phantom: PhantomData<C>,
}

impl<C> BBandBuilder<C>
where
    C: Candle,
{
    /// 새 볼린저 밴드 빌더 생성
    ///
    /// # Panics
    /// * `period`가 0이면 패닉 발생
    pub fn new(period: usize, multiplier: f64) -> Self {
        if period == 0 {
            panic!("볼린저 밴드 기간은 0보다 커야 합니다");
        }

        BBandBuilder {
            period,
            multiplier,
            values: Vec::with_capacity(period + 1),
            _phantom: PhantomData,
        }
    }

    fn push(&mut self, price: f64) {
        self.values.push(price);
        if self.values.len() > self.period {
            let excess = self.values.len() - self.period;
            self.values.drain(0..excess);
        }
    }

    fn current(&self) -> BollingerBands {
        let fallback = self.values.last().copied().unwrap_or(0.0);
        let band = calculate_bollinger_bands(&self.values, self.period, self.multiplier)
            .last()
            .copied()
            .unwrap_or_else(|| BollingerBand::collapsed(fallback));

        BollingerBands {
            period: self.period,
            multiplier: self.multiplier,
            band,
        }
    }
}

impl<C> TABuilder<BollingerBands, C> for BBandBuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> BollingerBands {
        self.values.clear();
        for candle in data {
            self.push(candle.close_price());
        }
        self.current()
    }

    fn next(&mut self, data: &C) -> BollingerBands {
        self.push(data.close_price());
        self.current()
    }
}
