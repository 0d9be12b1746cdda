use crate::candle::OhlcCandle;
use crate::model::Quote;
use crate::source::{PriceDataSource, SourceError, SourceResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 시세 스냅샷 파일 형식
///
/// ```json
/// { "quotes": [{ "symbol": "SNTS", "lastPrice": 17500.0 }],
///   "history": { "SNTS": [{ "datetime": "2024-01-02T00:00:00Z",
///                           "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0 }] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub history: HashMap<String, Vec<OhlcCandle>>,
}

/// JSON 파일 기반 데이터 제공자
#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    snapshot: MarketSnapshot,
}

impl JsonFileDataSource {
    /// 파일을 읽어 제공자 생성
    pub fn open(path: &Path) -> SourceResult<Self> {
        log::debug!("시세 파일 로드: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            log::error!("시세 파일 읽기 실패: {} - {}", path.display(), e);
            SourceError::Io(format!("{}: {}", path.display(), e))
        })?;

        let source = Self::from_json(&content)?;
        log::info!(
            "시세 파일 로드 완료: {} ({}개 종목)",
            path.display(),
            source.snapshot.quotes.len()
        );
        Ok(source)
    }

    /// JSON 문자열에서 제공자 생성
    pub fn from_json(content: &str) -> SourceResult<Self> {
        let snapshot: MarketSnapshot = serde_json::from_str(content).map_err(|e| {
            log::warn!("시세 JSON 파싱 실패: {}", e);
            SourceError::Parse(e.to_string())
        })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// 캔들은 datetime 오름차순으로 정렬됩니다.
    pub fn from_snapshot(mut snapshot: MarketSnapshot) -> Self {
        for candles in snapshot.history.values_mut() {
            candles.sort_by(|a, b| a.datetime.cmp(&b.datetime));
        }
        JsonFileDataSource { snapshot }
    }
}

impl PriceDataSource for JsonFileDataSource {
    fn symbols(&self) -> Vec<String> {
        self.snapshot
            .quotes
            .iter()
            .map(|q| q.symbol.clone())
            .collect()
    }

    /// 시세는 있지만 과거 데이터가 없는 종목은 빈 시리즈를 반환합니다.
    fn history(&self, symbol: &str) -> SourceResult<Vec<OhlcCandle>> {
        if let Some(candles) = self.snapshot.history.get(symbol) {
            return Ok(candles.clone());
        }

        if self.snapshot.quotes.iter().any(|q| q.symbol == symbol) {
            log::debug!("{} 과거 데이터 없음, 빈 시리즈 사용", symbol);
            return Ok(Vec::new());
        }

        Err(SourceError::NotFound(symbol.to_string()))
    }

    fn quote(&self, symbol: &str) -> SourceResult<Quote> {
        self.snapshot
            .quotes
            .iter()
            .find(|q| q.symbol == symbol)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(symbol.to_string()))
    }
}
