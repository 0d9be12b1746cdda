mod common_test_utils;
use common_test_utils::*;

use brvm_analysis::analyzer::candle_pattern_analyzer::{
    CandlePattern, CandlePatternAnalyzer, is_doji, is_hammer,
};

fn doji_candle(timestamp: i64) -> TestCandle {
    // 몸통 0.05, 범위 2.0
    TestCandle::new(timestamp, 10.0, 11.0, 9.0, 10.05, 1000.0)
}

fn hammer_candle(timestamp: i64) -> TestCandle {
    // 몸통 0.5, 아래꼬리 2.0, 위꼬리 0.1
    TestCandle::new(timestamp, 10.0, 10.6, 8.0, 10.5, 1000.0)
}

#[test]
fn test_is_doji() {
    assert!(is_doji(&doji_candle(0)));
    assert!(!is_doji(&hammer_candle(0)));
    assert!(!is_doji(&TestCandle::plain(0, 10.0, 12.0)));
}

#[test]
fn test_is_hammer() {
    assert!(is_hammer(&hammer_candle(0)));
    assert!(!is_hammer(&doji_candle(0)));
    assert!(!is_hammer(&TestCandle::plain(0, 10.0, 12.0)));
}

#[test]
fn test_flat_candle_is_not_doji() {
    // 범위 0이면 몸통도 0이라 0 < 0 이 거짓
    let flat = TestCandle::new(0, 10.0, 10.0, 10.0, 10.0, 1000.0);
    assert!(!is_doji(&flat));
}

#[test]
fn test_insufficient_candles_returns_empty() {
    let analyzer = CandlePatternAnalyzer::new();

    assert!(analyzer.analyze::<TestCandle>(&[]).is_empty());
    assert!(analyzer.analyze(&[doji_candle(0)]).is_empty());
    assert!(analyzer.analyze(&[doji_candle(0), hammer_candle(1)]).is_empty());
}

#[test]
fn test_plain_candles_have_no_pattern() {
    let analyzer = CandlePatternAnalyzer::new();
    let candles: Vec<TestCandle> = (0..10)
        .map(|i| TestCandle::plain(i, 100.0 + i as f64, 102.0 + i as f64))
        .collect();

    assert!(analyzer.analyze(&candles).is_empty());
}

#[test]
fn test_detects_doji() {
    let analyzer = CandlePatternAnalyzer::new();
    let candles = vec![
        TestCandle::plain(0, 10.0, 12.0),
        doji_candle(1),
        TestCandle::plain(2, 12.0, 14.0),
    ];

    assert_eq!(analyzer.analyze(&candles), vec![CandlePattern::Doji]);
}

#[test]
fn test_patterns_deduplicated_in_first_occurrence_order() {
    let analyzer = CandlePatternAnalyzer::new();
    let candles = vec![
        hammer_candle(0),
        doji_candle(1),
        hammer_candle(2),
        doji_candle(3),
        TestCandle::plain(4, 10.0, 12.0),
    ];

    assert_eq!(
        analyzer.analyze(&candles),
        vec![CandlePattern::Hammer, CandlePattern::Doji]
    );
}

#[test]
fn test_pattern_display() {
    assert_eq!(CandlePattern::Doji.to_string(), "Doji");
    assert_eq!(CandlePattern::Hammer.to_string(), "Hammer");
}
