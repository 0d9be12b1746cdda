mod common_test_utils;
use common_test_utils::*;

use brvm_analysis::analyzer::signal_analyzer::{SignalAnalyzer, SignalScore};
use brvm_analysis::config::SignalConfig;
use brvm_analysis::model::{BollingerBand, IndicatorSet, Quote, SignalType};

fn indicators(rsi: f64, macd: f64, sma: f64, upper: f64, lower: f64) -> IndicatorSet {
    IndicatorSet {
        rsi,
        macd,
        sma,
        ema: sma,
        bollinger: BollingerBand {
            upper,
            middle: sma,
            lower,
        },
    }
}

#[test]
fn test_all_indicators_bullish() {
    let analyzer = SignalAnalyzer::new(SignalConfig::default());
    let quote = Quote::new("SNTS", 110.0);
    // 과매도 RSI, 양의 MACD, SMA 위, 하단 밴드 아래
    let set = indicators(25.0, 0.5, 100.0, 130.0, 115.0);

    let score = analyzer.score(quote.last_price, &set);
    assert_eq!(
        score,
        SignalScore {
            buy: 5.0,
            sell: 0.0,
            total: 5.0
        }
    );

    let signal = analyzer.analyze(&quote, &set);
    assert_eq!(signal.signal_type, SignalType::Buy);
    assert_eq!(signal.confidence, 1.0);
    assert!(signal.description.starts_with("Signal d'achat"));
}

#[test]
fn test_balanced_indicators_are_neutral() {
    let analyzer = SignalAnalyzer::new(SignalConfig::default());
    let quote = Quote::new("ORAC", 100.0);
    let set = indicators(50.0, 0.5, 100.0, 105.0, 95.0);

    let signal = analyzer.analyze(&quote, &set);

    assert_eq!(signal.signal_type, SignalType::Neutral);
    assert_eq!(signal.confidence, 0.5);
}

#[test]
fn test_all_indicators_bearish() {
    let analyzer = SignalAnalyzer::new(SignalConfig::default());
    let quote = Quote::new("SGBC", 90.0);
    let set = indicators(80.0, -1.0, 100.0, 110.0, 85.0);

    let signal = analyzer.analyze(&quote, &set);

    assert_eq!(signal.signal_type, SignalType::Sell);
    assert_eq!(signal.confidence, 1.0);
    assert!(signal.description.starts_with("Signal de vente"));
}

#[test]
fn test_rsi_and_bands_only_count_when_triggered() {
    let analyzer = SignalAnalyzer::new(SignalConfig::default());
    let set = indicators(50.0, 0.5, 100.0, 120.0, 90.0);

    let score = analyzer.score(110.0, &set);

    assert_eq!(score.total, 2.0);
    assert_eq!(score.buy, 2.0);
    assert_eq!(score.confidence(), 1.0);
}

#[test]
fn test_confidence_at_threshold_is_neutral() {
    let analyzer = SignalAnalyzer::new(SignalConfig::default());
    let quote = Quote::new("ETIT", 130.0);
    // 매도 3 (RSI 2 + 상단 밴드 1), 매수 2 (MACD + SMA) -> 3/5 = 0.6
    let set = indicators(80.0, 0.5, 100.0, 120.0, 90.0);

    let signal = analyzer.analyze(&quote, &set);

    assert_approx(signal.confidence, 0.6);
    assert_eq!(signal.signal_type, SignalType::Neutral);
}

#[test]
fn test_custom_threshold() {
    let config = SignalConfig {
        confidence_threshold: 0.5,
        ..SignalConfig::default()
    };
    let analyzer = SignalAnalyzer::new(config);
    let quote = Quote::new("ETIT", 130.0);
    let set = indicators(80.0, 0.5, 100.0, 120.0, 90.0);

    assert_eq!(analyzer.analyze(&quote, &set).signal_type, SignalType::Sell);
}

#[test]
fn test_empty_score_confidence_is_zero() {
    assert_eq!(SignalScore::default().confidence(), 0.0);
}
