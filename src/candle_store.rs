use crate::candle::Candle;

/// 제한된 크기의 캔들 저장소
///
/// 지정된 최대 크기를 유지하며 캔들을 저장합니다.
/// 최대 크기를 초과하면 가장 오래된 캔들이 자동으로 제거됩니다.
/// 캔들은 datetime 기준으로 내림차순 정렬되어 저장됩니다 (최신 캔들이 먼저 옴).
#[derive(Debug, Clone)]
pub struct CandleStore<T: Candle> {
    items: Vec<T>,
    pub max_size: usize,
    pub use_duplicated_filter: bool,
}

fn is_same_item<T: PartialEq>(items: &[T], data: &T) -> bool {
    items.first() == Some(data)
}

impl<T> CandleStore<T>
where
    T: Candle,
{
    /// 새로운 CandleStore 인스턴스를 생성합니다.
    ///
    /// # Arguments
    /// * `items` - 초기 캔들 목록 (순서 무관)
    /// * `max_size` - 저장소의 최대 크기
    /// * `use_duplicated_filter` - 중복 캔들 필터링 사용 여부
    pub fn new(mut items: Vec<T>, max_size: usize, use_duplicated_filter: bool) -> CandleStore<T> {
        items.sort_by(|a, b| b.datetime().cmp(&a.datetime()));

        if items.len() > max_size {
            items.truncate(max_size);
        }

        CandleStore {
            items,
            max_size,
            use_duplicated_filter,
        }
    }

    /// 캔들을 datetime 기준 내림차순 위치에 삽입합니다.
    ///
    /// 저장소가 최대 크기에 도달했다면 가장 오래된 캔들이 제거됩니다.
    /// 중복 필터링이 활성화된 경우 최신 캔들과 같은 캔들은 삽입하지 않습니다.
    pub fn add(&mut self, data: T) {
        if self.use_duplicated_filter && is_same_item(&self.items, &data) {
            log::trace!("중복 캔들 무시: {:?}", data.datetime());
            return;
        }

        let insert_idx = self
            .items
            .binary_search_by(|item| data.datetime().cmp(&item.datetime()))
            .unwrap_or_else(|idx| idx);

        self.items.insert(insert_idx, data);

        if self.items.len() > self.max_size {
            self.items.truncate(self.max_size);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 가장 최신 캔들
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// 최신순 캔들 슬라이스
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// 저장된 캔들을 시간 순서(오래된 것부터)로 정렬하여 반환합니다.
    pub fn get_time_ordered_items(&self) -> Vec<T> {
        let mut items = self.items.clone();
        items.reverse();
        items
    }

    /// 시간 순서의 종가 시퀀스를 반환합니다.
    pub fn close_prices(&self) -> Vec<f64> {
        self.items
            .iter()
            .rev()
            .map(|item| item.close_price())
            .collect()
    }
}
