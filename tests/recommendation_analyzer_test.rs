mod common_test_utils;
use common_test_utils::*;

use brvm_analysis::analyzer::recommendation_analyzer::RecommendationAnalyzer;
use brvm_analysis::config::RecommendationConfig;
use brvm_analysis::model::{RecommendationAction, Signal, SignalType, Trend};

fn signal(signal_type: SignalType, confidence: f64) -> Signal {
    Signal {
        signal_type,
        confidence,
        description: String::new(),
    }
}

#[test]
fn test_buy_signal_with_bullish_trend() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    let rec = analyzer.analyze(112.0, &signal(SignalType::Buy, 1.0), Trend::Bullish);

    assert_eq!(rec.action, RecommendationAction::Buy);
    assert_eq!(rec.confidence, 0.9);
    assert_eq!(rec.target_price, 112.0 * 1.05);
    assert_eq!(rec.stop_loss, 112.0 * 0.95);
    assert_approx(rec.target_price, 117.6);
    assert_approx(rec.stop_loss, 106.4);
}

#[test]
fn test_buy_signal_with_sideways_trend_boosts_confidence() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    let rec = analyzer.analyze(100.0, &signal(SignalType::Buy, 0.7), Trend::Sideways);

    assert_eq!(rec.action, RecommendationAction::Buy);
    assert_approx(rec.confidence, 0.8);
}

#[test]
fn test_buy_signal_against_bearish_trend_holds() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    let rec = analyzer.analyze(100.0, &signal(SignalType::Buy, 1.0), Trend::Bearish);

    assert_eq!(rec.action, RecommendationAction::Hold);
    assert_eq!(rec.confidence, 0.5);
    assert_eq!(rec.target_price, 100.0 * 1.05);
    assert_eq!(rec.stop_loss, 100.0 * 0.95);
}

#[test]
fn test_sell_signal_mirrors_prices() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    let rec = analyzer.analyze(108.0, &signal(SignalType::Sell, 1.0), Trend::Bearish);

    assert_eq!(rec.action, RecommendationAction::Sell);
    assert_eq!(rec.confidence, 0.9);
    assert_eq!(rec.target_price, 108.0 * 0.95);
    assert_eq!(rec.stop_loss, 108.0 * 1.05);
}

#[test]
fn test_sell_signal_against_bullish_trend_holds() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    let rec = analyzer.analyze(100.0, &signal(SignalType::Sell, 0.8), Trend::Bullish);

    assert_eq!(rec.action, RecommendationAction::Hold);
    assert_eq!(rec.confidence, 0.5);
}

#[test]
fn test_neutral_signal_holds() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig::default());

    for trend in [Trend::Bullish, Trend::Bearish, Trend::Sideways] {
        let rec = analyzer.analyze(100.0, &signal(SignalType::Neutral, 0.5), trend);
        assert_eq!(rec.action, RecommendationAction::Hold);
        assert_eq!(rec.confidence, 0.5);
    }
}

#[test]
fn test_custom_target_rate() {
    let analyzer = RecommendationAnalyzer::new(RecommendationConfig {
        target_rate: 0.1,
        ..RecommendationConfig::default()
    });

    let rec = analyzer.analyze(200.0, &signal(SignalType::Buy, 0.9), Trend::Bullish);

    assert_approx(rec.target_price, 220.0);
    assert_approx(rec.stop_loss, 180.0);
}
