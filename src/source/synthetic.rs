use crate::candle::OhlcCandle;
use crate::model::Quote;
use crate::source::{PriceDataSource, SourceError, SourceResult};
use chrono::DateTime;

/// 2024-01-02 00:00:00 UTC
const START_TIMESTAMP: i64 = 1_704_153_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// 합성 데이터로 제공되는 종목 정의
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub base_price: f64,
    /// 일별 추세 비율 (0.002 = 하루 0.2%)
    pub drift: f64,
    /// 진동 폭 (base_price 대비 비율)
    pub amplitude: f64,
}

impl Listing {
    pub fn new(
        symbol: &str,
        name: &str,
        sector: &str,
        base_price: f64,
        drift: f64,
        amplitude: f64,
    ) -> Self {
        Listing {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            base_price,
            drift,
            amplitude,
        }
    }

    /// 종목 코드별로 고정된 위상 (같은 종목은 항상 같은 시리즈)
    fn phase(&self) -> f64 {
        let sum: u32 = self.symbol.bytes().map(u32::from).sum();
        f64::from(sum % 360).to_radians()
    }

    fn close_at(&self, day: usize) -> f64 {
        let t = day as f64;
        let trend = self.base_price * (1.0 + self.drift).powf(t);
        let wave = self.base_price * self.amplitude * (t * 0.7 + self.phase()).sin();
        (trend + wave).max(0.01)
    }
}

/// 결정적 합성 시세 제공자
///
/// 난수 없이 추세와 사인파로 일봉을 생성하므로 같은 입력은 항상 같은 결과를 냅니다.
#[derive(Debug, Clone)]
pub struct SyntheticDataSource {
    days: usize,
    listings: Vec<Listing>,
}

impl Default for SyntheticDataSource {
    /// BRVM 주요 종목 카탈로그, 120 거래일
    fn default() -> Self {
        SyntheticDataSource::new(120)
            .with_listing(Listing::new(
                "SNTS",
                "Sonatel",
                "Télécommunications",
                17_000.0,
                0.002,
                0.02,
            ))
            .with_listing(Listing::new(
                "ORAC",
                "Orange Côte d'Ivoire",
                "Télécommunications",
                14_500.0,
                0.001,
                0.015,
            ))
            .with_listing(Listing::new(
                "SGBC",
                "Société Générale Côte d'Ivoire",
                "Finance",
                16_000.0,
                -0.0015,
                0.02,
            ))
            .with_listing(Listing::new(
                "ETIT",
                "Ecobank Transnational",
                "Finance",
                18.0,
                0.0,
                0.03,
            ))
            .with_listing(Listing::new(
                "PALC",
                "Palm Côte d'Ivoire",
                "Agriculture",
                7_500.0,
                -0.003,
                0.025,
            ))
    }
}

impl SyntheticDataSource {
    /// 빈 카탈로그로 생성
    ///
    /// # Arguments
    /// * `days` - 종목당 생성할 일봉 수
    pub fn new(days: usize) -> Self {
        SyntheticDataSource {
            days,
            listings: Vec::new(),
        }
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listings.retain(|l| l.symbol != listing.symbol);
        self.listings.push(listing);
        self
    }

    fn listing(&self, symbol: &str) -> SourceResult<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.symbol == symbol)
            .ok_or_else(|| SourceError::NotFound(symbol.to_string()))
    }

    fn candles(&self, listing: &Listing) -> Vec<OhlcCandle> {
        (0..self.days)
            .map(|day| {
                let close = listing.close_at(day);
                let open = if day == 0 {
                    close
                } else {
                    listing.close_at(day - 1)
                };
                let high = open.max(close) * 1.005;
                let low = open.min(close) * 0.995;
                let timestamp = START_TIMESTAMP + day as i64 * SECONDS_PER_DAY;
                let volume = 1_000.0 + (day % 7) as f64 * 150.0;

                OhlcCandle::new(
                    DateTime::from_timestamp(timestamp, 0).unwrap_or_default(),
                    open,
                    high,
                    low,
                    close,
                    volume,
                )
            })
            .collect()
    }
}

impl PriceDataSource for SyntheticDataSource {
    fn symbols(&self) -> Vec<String> {
        self.listings.iter().map(|l| l.symbol.clone()).collect()
    }

    fn history(&self, symbol: &str) -> SourceResult<Vec<OhlcCandle>> {
        let listing = self.listing(symbol)?;
        log::debug!("합성 데이터 생성: {} ({}일)", symbol, self.days);
        Ok(self.candles(listing))
    }

    fn quote(&self, symbol: &str) -> SourceResult<Quote> {
        let listing = self.listing(symbol)?;
        let candles = self.candles(listing);

        let (last_price, volume) = candles
            .last()
            .map(|c| (c.close, c.volume))
            .unwrap_or((listing.base_price, 0.0));
        let variation = match candles.len() {
            n if n >= 2 => {
                let previous = candles[n - 2].close;
                (last_price - previous) / previous * 100.0
            }
            _ => 0.0,
        };

        Ok(Quote::new(&listing.symbol, last_price)
            .with_name(&listing.name)
            .with_sector(&listing.sector)
            .with_volume(volume)
            .with_variation(variation))
    }
}
