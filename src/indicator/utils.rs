/// 공통 이동평균 계산 함수들
pub mod moving_average {
    /// 산술 평균 (빈 슬라이스는 0.0)
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// 지수이동평균(EMA) 평활화 계수 `2 / (period + 1)`
    ///
    /// # Arguments
    /// * `period` - EMA 기간
    ///
    /// # Returns
    /// * `f64` - 알파값 (평활화 계수)
    pub fn calculate_ema_alpha(period: usize) -> f64 {
        2.0 / (period + 1) as f64
    }

    /// 지수이동평균(EMA) 한 스텝 계산
    ///
    /// `(price - previous) * alpha + previous`
    pub fn calculate_ema_step(current_price: f64, previous_ema: f64, alpha: f64) -> f64 {
        (current_price - previous_ema) * alpha + previous_ema
    }
}

/// 모집단 표준편차 (빈 슬라이스는 0.0)
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = moving_average::mean(values);
    let variance = values
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}
