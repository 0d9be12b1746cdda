// 시세/과거 데이터 제공자 모듈
// 엔진은 데이터를 직접 가져오지 않으며, 이 경계에서만 실패가 Result로 전파됩니다.

pub mod json_file;
pub mod synthetic;

use crate::candle::OhlcCandle;
use crate::model::Quote;

pub use json_file::{JsonFileDataSource, MarketSnapshot};
pub use synthetic::{Listing, SyntheticDataSource};

/// 데이터 제공 오류
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// 알 수 없는 종목
    NotFound(String),
    /// 입출력 오류
    Io(String),
    /// 데이터 형식 오류
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound(symbol) => write!(f, "종목을 찾을 수 없음: {}", symbol),
            SourceError::Io(msg) => write!(f, "데이터 읽기 오류: {}", msg),
            SourceError::Parse(msg) => write!(f, "데이터 파싱 오류: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

pub type SourceResult<T> = Result<T, SourceError>;

/// 가격 데이터 제공 인터페이스
pub trait PriceDataSource {
    /// 제공 가능한 종목 코드 목록
    fn symbols(&self) -> Vec<String>;

    /// 시간 순서의 과거 OHLC 캔들
    fn history(&self, symbol: &str) -> SourceResult<Vec<OhlcCandle>>;

    /// 현재 시세
    fn quote(&self, symbol: &str) -> SourceResult<Quote>;
}
