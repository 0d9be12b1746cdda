use crate::candle::Candle;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 분석에 필요한 최소 캔들 수
pub const MIN_PATTERN_CANDLES: usize = 3;

/// 단일 캔들 패턴 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePattern {
    /// 도지 - 시장 우유부단함
    Doji,
    /// 망치 - 하단 반전 신호
    Hammer,
}

impl Display for CandlePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandlePattern::Doji => write!(f, "Doji"),
            CandlePattern::Hammer => write!(f, "Hammer"),
        }
    }
}

/// 도지: 몸통이 전체 범위의 10% 미만
pub fn is_doji<C: Candle>(candle: &C) -> bool {
    candle.body() < 0.1 * candle.range()
}

/// 망치: 아랫꼬리 > 몸통의 2배, 윗꼬리 < 몸통의 절반
pub fn is_hammer<C: Candle>(candle: &C) -> bool {
    let body = candle.body();
    candle.lower_shadow() > 2.0 * body && candle.upper_shadow() < 0.5 * body
}

/// 캔들 패턴 분석기
///
/// 윈도우 안에서 어떤 패턴 유형이 나타났는지만 보고합니다 (위치는 보고하지 않음).
#[derive(Debug, Clone, Default)]
pub struct CandlePatternAnalyzer;

impl CandlePatternAnalyzer {
    pub fn new() -> Self {
        CandlePatternAnalyzer
    }

    /// 패턴 감지
    ///
    /// 캔들이 3개 미만이면 빈 결과를 반환합니다.
    /// 결과는 처음 나타난 순서대로 중복 없이 정렬되며, 캔들마다 도지를 먼저 확인합니다.
    pub fn analyze<C: Candle>(&self, candles: &[C]) -> Vec<CandlePattern> {
        if candles.len() < MIN_PATTERN_CANDLES {
            log::trace!("캔들 패턴 분석 데이터 부족: {}개", candles.len());
            return Vec::new();
        }

        let mut found = Vec::with_capacity(2);
        for candle in candles {
            if is_doji(candle) && !found.contains(&CandlePattern::Doji) {
                found.push(CandlePattern::Doji);
            }
            if is_hammer(candle) && !found.contains(&CandlePattern::Hammer) {
                found.push(CandlePattern::Hammer);
            }
        }

        found
    }
}
