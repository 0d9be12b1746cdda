use crate::candle_store::CandleStore;
use crate::source::{PriceDataSource, SourceResult};
use crate::technical_analysis::{AnalysisResult, TechnicalAnalyzer};

/// 분석에 사용하는 기본 최대 캔들 수
pub const DEFAULT_HISTORY_LIMIT: usize = 250;

/// 데이터 제공자에서 가져온 데이터로 기술적 분석을 수행하는 서비스
///
/// 제공자와 분석기는 생성자로 주입됩니다.
#[derive(Debug)]
pub struct AnalysisService<S: PriceDataSource> {
    source: S,
    analyzer: TechnicalAnalyzer,
    history_limit: usize,
}

impl<S: PriceDataSource> AnalysisService<S> {
    pub fn new(source: S, analyzer: TechnicalAnalyzer) -> Self {
        AnalysisService {
            source,
            analyzer,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// 분석에 사용할 최근 캔들 수 제한
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 한 종목 분석
    pub fn analyze_symbol(&self, symbol: &str) -> SourceResult<AnalysisResult> {
        let quote = self.source.quote(symbol)?;
        let history = self.source.history(symbol)?;

        let store = CandleStore::new(history, self.history_limit, true);
        log::debug!("{} 분석 시작: 캔들 {}개", symbol, store.len());

        Ok(self.analyzer.analyze_store(&quote, &store))
    }

    /// 제공자의 모든 종목 분석 (첫 오류에서 중단)
    pub fn analyze_all(&self) -> SourceResult<Vec<AnalysisResult>> {
        self.source
            .symbols()
            .iter()
            .map(|symbol| self.analyze_symbol(symbol))
            .collect()
    }
}
