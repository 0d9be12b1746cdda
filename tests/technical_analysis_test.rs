mod common_test_utils;
use common_test_utils::*;

use brvm_analysis::analyzer::CandlePattern;
use brvm_analysis::candle_store::CandleStore;
use brvm_analysis::config::{AnalysisConfig, IndicatorConfig};
use brvm_analysis::model::{BollingerBand, Quote, RecommendationAction, SignalType, Trend};
use brvm_analysis::TechnicalAnalyzer;

#[test]
fn test_uptrend_end_to_end() {
    let analyzer = TechnicalAnalyzer::default();
    let prices = zigzag_uptrend(40);
    let quote = Quote::new("SNTS", 112.0);

    let result = analyzer.analyze_prices(&quote, &prices);

    let indicators = result.indicators;
    assert!(indicators.rsi > 50.0 && indicators.rsi < 70.0);
    assert!(indicators.macd > 0.0);
    assert_approx(indicators.sma, 106.0);
    assert_approx(indicators.bollinger.middle, 106.0);
    assert!(indicators.bollinger.lower < 112.0 && 112.0 < indicators.bollinger.upper);

    assert_eq!(result.trend, Trend::Bullish);
    assert_eq!(result.signal.signal_type, SignalType::Buy);
    assert_eq!(result.signal.confidence, 1.0);

    let rec = &result.recommendation;
    assert_eq!(rec.action, RecommendationAction::Buy);
    assert_eq!(rec.confidence, 0.9);
    assert_eq!(rec.target_price, 112.0 * 1.05);
    assert_approx(rec.target_price, 117.6);
    assert_approx(rec.stop_loss, 106.4);
    assert!(result.patterns.is_empty());
}

#[test]
fn test_downtrend_end_to_end() {
    let analyzer = TechnicalAnalyzer::default();
    let prices = zigzag_downtrend(40, 130.0);
    let last = *prices.last().unwrap();
    let quote = Quote::new("SGBC", last);

    let result = analyzer.analyze_prices(&quote, &prices);

    assert_eq!(last, 108.0);
    assert!(result.indicators.macd < 0.0);
    assert_approx(result.indicators.sma, 114.0);
    assert_eq!(result.trend, Trend::Bearish);
    assert_eq!(result.signal.signal_type, SignalType::Sell);
    assert_eq!(result.recommendation.action, RecommendationAction::Sell);
    assert_eq!(result.recommendation.target_price, 108.0 * 0.95);
    assert_eq!(result.recommendation.stop_loss, 108.0 * 1.05);
}

#[test]
fn test_candles_and_store_match_prices() {
    let analyzer = TechnicalAnalyzer::default();
    let prices = zigzag_uptrend(40);
    let candles = candles_from_closes(&prices);
    let quote = Quote::new("SNTS", 112.0);

    let from_prices = analyzer.analyze_prices(&quote, &prices);
    let from_candles = analyzer.analyze(&quote, &candles);
    let from_store = analyzer.analyze_store(&quote, &CandleStore::new(candles, 250, true));

    assert_eq!(from_candles.indicators, from_prices.indicators);
    assert_eq!(from_store.indicators, from_prices.indicators);
    assert_eq!(from_store.recommendation, from_prices.recommendation);
    // 첫 캔들은 시가 == 종가
    assert_eq!(from_candles.patterns, vec![CandlePattern::Doji]);
    assert_eq!(from_store.patterns, from_candles.patterns);
}

#[test]
fn test_empty_prices_fall_back_to_quote() {
    let analyzer = TechnicalAnalyzer::default();
    let quote = Quote::new("PALC", 100.0);

    let result = analyzer.analyze_prices(&quote, &[]);

    assert_eq!(result.indicators.rsi, 50.0);
    assert_eq!(result.indicators.macd, 0.0);
    assert_eq!(result.indicators.sma, 100.0);
    assert_eq!(result.indicators.ema, 100.0);
    assert_eq!(result.indicators.bollinger, BollingerBand::collapsed(100.0));
    assert_eq!(result.trend, Trend::Sideways);
    assert!(result.patterns.is_empty());
    assert!(result.support_resistance.is_empty());
    assert!(result.chart.sma.is_empty());
    assert!(result.chart.macd.is_empty());
}

#[test]
fn test_short_history_leans_to_sell() {
    let analyzer = TechnicalAnalyzer::default();
    let prices = zigzag_uptrend(18);
    let last = *prices.last().unwrap();
    let quote = Quote::new("SNTS", last);

    let result = analyzer.analyze_prices(&quote, &prices);

    // MACD 0과 SMA 대체값(= 최종가)이 모두 매도로 집계되고 RSI는 중립 구간
    assert_eq!(last, 101.0);
    assert!(result.indicators.rsi > 30.0 && result.indicators.rsi < 70.0);
    assert_eq!(result.indicators.macd, 0.0);
    assert_eq!(result.indicators.sma, last);
    assert_eq!(result.indicators.bollinger, BollingerBand::collapsed(last));
    assert_eq!(result.trend, Trend::Sideways);
    assert_eq!(result.signal.signal_type, SignalType::Sell);
    assert_eq!(result.signal.confidence, 1.0);
    assert_eq!(result.recommendation.action, RecommendationAction::Sell);
    assert_eq!(result.recommendation.confidence, 0.9);
}

#[test]
fn test_chart_series_lengths() {
    let analyzer = TechnicalAnalyzer::default();
    let prices = zigzag_uptrend(40);

    let chart = analyzer.chart_series(&prices);

    assert_eq!(chart.closes.len(), 40);
    assert_eq!(chart.sma.len(), 21);
    assert_eq!(chart.ema.len(), 40);
    assert_eq!(chart.bollinger.len(), 21);
    assert_eq!(chart.rsi.len(), 26);
    assert_eq!(chart.macd.len(), 40);
}

#[test]
fn test_custom_indicator_config() {
    let config = AnalysisConfig {
        indicators: IndicatorConfig {
            sma_period: 5,
            ..IndicatorConfig::default()
        },
        ..AnalysisConfig::default()
    };
    let analyzer = TechnicalAnalyzer::new(config);
    let prices = linear_prices(10, 1.0, 1.0);

    let indicators = analyzer.indicators(&prices, 0.0);

    assert_eq!(indicators.sma, 8.0);
}

#[test]
fn test_result_serializes_with_french_names() {
    let analyzer = TechnicalAnalyzer::default();
    let result = analyzer.analyze_prices(&Quote::new("SNTS", 112.0), &zigzag_uptrend(40));

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["quote"]["lastPrice"], 112.0);
    assert_eq!(json["signal"]["type"], "achat");
    assert_eq!(json["trend"], "haussière");
    assert_eq!(json["recommendation"]["action"], "acheter");
    assert!(json["recommendation"]["targetPrice"].is_number());
    assert!(json["recommendation"]["stopLoss"].is_number());
    assert!(json["indicators"]["bollinger"]["mid"].is_number());
    assert!(json["chart"]["macd"][39]["ligneMACD"].is_number());
    assert!(json["chart"]["macd"][39]["histogramme"].is_number());
    assert!(json["supportResistance"]["supports"].is_array());
}

#[test]
fn test_result_display() {
    let analyzer = TechnicalAnalyzer::default();
    let result = analyzer.analyze_prices(&Quote::new("SNTS", 112.0), &zigzag_uptrend(40));

    let text = result.to_string();

    assert!(text.contains("SNTS"));
    assert!(text.contains("achat"));
    assert!(text.contains("haussière"));
}
