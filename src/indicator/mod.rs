// 기술적 지표 모듈
// 종가 시퀀스에서 RSI, 이동평균, MACD, 볼린저 밴드를 계산합니다.
// 각 지표는 순수 함수와 캔들 기반 빌더(TABuilder)로 제공됩니다.

pub mod bband;
pub mod ma;
pub mod macd;
pub mod rsi;
pub mod utils;

use crate::candle::Candle;
use crate::candle_store::CandleStore;

pub use bband::{BBandBuilder, calculate_bollinger_bands};
pub use ma::ema::{EMABuilder, ema};
pub use ma::sma::{SMABuilder, SmaSeries, sma};
pub use macd::{
    MACDBuilder, MacdOutput, calculate_macd, calculate_macd_series, calculate_macd_with,
};
pub use rsi::{RSIBuilder, calculate_rsi, calculate_rsi_series};

/// 기술적 지표 생성 인터페이스
///
/// 캔들 데이터로부터 지표 스냅샷을 생성하고 증분 업데이트하기 위한 빌더 패턴
pub trait TABuilder<T, C: Candle>: Send + std::fmt::Debug {
    /// 저장소에서 기술적 지표 생성
    ///
    /// # Arguments
    /// * `storage` - 캔들 데이터 저장소
    ///
    /// # Returns
    /// * `T` - 생성된 기술적 지표
    fn from_storage(&mut self, storage: &CandleStore<C>) -> T {
        self.build(&storage.get_time_ordered_items())
    }

    /// 시간 순서의 캔들 데이터에서 기술적 지표 생성 (기존 상태는 초기화됨)
    ///
    /// # Arguments
    /// * `data` - 캔들 데이터 슬라이스
    ///
    /// # Returns
    /// * `T` - 생성된 기술적 지표
    fn build(&mut self, data: &[C]) -> T;

    /// 새 캔들로 기술적 지표 업데이트
    ///
    /// # Arguments
    /// * `data` - 새 캔들 데이터
    ///
    /// # Returns
    /// * `T` - 업데이트된 기술적 지표
    fn next(&mut self, data: &C) -> T;
}
