use serde::{Deserialize, Serialize};

/// 지지/저항 레벨
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// 가격 시퀀스 내 위치
    pub index: usize,
    pub price: f64,
}

/// 지지/저항 분석 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub supports: Vec<PriceLevel>,
    pub resistances: Vec<PriceLevel>,
}

impl SupportResistance {
    pub fn is_empty(&self) -> bool {
        self.supports.is_empty() && self.resistances.is_empty()
    }

    /// 주어진 가격 아래에서 가장 가까운 지지선
    pub fn nearest_support(&self, price: f64) -> Option<&PriceLevel> {
        self.supports
            .iter()
            .filter(|level| level.price <= price)
            .min_by(|a, b| (price - a.price).total_cmp(&(price - b.price)))
    }

    /// 주어진 가격 위에서 가장 가까운 저항선
    pub fn nearest_resistance(&self, price: f64) -> Option<&PriceLevel> {
        self.resistances
            .iter()
            .filter(|level| level.price >= price)
            .min_by(|a, b| (a.price - price).total_cmp(&(b.price - price)))
    }
}

/// 지지/저항 분석기
///
/// 5점 국소 극값 탐색: 내부 인덱스 `i` (2 <= i <= n-3)마다 양옆 두 개씩 네 이웃보다
/// 모두 크면 저항, 모두 작으면 지지입니다. 최소 거리나 유의성 필터는 적용하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct SupportResistanceAnalyzer;

impl SupportResistanceAnalyzer {
    pub fn new() -> Self {
        SupportResistanceAnalyzer
    }

    pub fn analyze(&self, prices: &[f64]) -> SupportResistance {
        let mut result = SupportResistance::default();

        for (offset, window) in prices.windows(5).enumerate() {
            let center = window[2];
            let neighbors = [window[0], window[1], window[3], window[4]];
            let level = PriceLevel {
                index: offset + 2,
                price: center,
            };

            if neighbors.iter().all(|&n| center > n) {
                result.resistances.push(level);
            } else if neighbors.iter().all(|&n| center < n) {
                result.supports.push(level);
            }
        }

        log::trace!(
            "지지선 {}개, 저항선 {}개 탐색",
            result.supports.len(),
            result.resistances.len()
        );
        result
    }
}
