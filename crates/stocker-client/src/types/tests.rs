//! Unit tests for types module.

use super::*;

// ============================================================================
// Candlestick Tests
// ============================================================================

#[test]
fn test_candlestick_deserialization() {
    let json = r#"{
        "id": 1,
        "open": 100.0,
        "close": 102.0,
        "high": 113.0,
        "low": 97.0,
        "volume": 5000,
        "timestamp": 1753038000,
        "symbol": "BOL.ST"
    }"#;

    let candle: Candlestick = serde_json::from_str(json).unwrap();
    assert_eq!(candle.id, 1);
    assert_eq!(candle.open, 100.0);
    assert_eq!(candle.low, 97.0);
    assert_eq!(candle.timestamp, 1753038000);
    assert_eq!(candle.symbol, "BOL.ST");
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_candlestick_page_deserialization() {
    let json = r#"{
        "candlesticks": [],
        "page": {"size": 20, "total_elements": 0, "total_pages": 0, "number": 0}
    }"#;

    let page: CandlestickPage = serde_json::from_str(json).unwrap();
    assert!(page.candlesticks.is_empty());
    assert_eq!(
        page.page,
        PageMetadata {
            size: 20,
            total_elements: 0,
            total_pages: 0,
            number: 0,
        }
    );
}

#[test]
fn test_candlestick_list_deserialization() {
    let json = r#"{"candlesticks": [{
        "id": 2, "open": 102.0, "close": 104.0, "high": 115.0, "low": 99.0,
        "volume": 6000, "timestamp": 1753124400, "symbol": "BOL.ST"
    }]}"#;

    let list: CandlestickList = serde_json::from_str(json).unwrap();
    assert_eq!(list.candlesticks.len(), 1);
    assert_eq!(list.candlesticks[0].close, 104.0);
}

// ============================================================================
// ErrorBody Tests
// ============================================================================

#[test]
fn test_error_body_deserialization() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error": "Unauthorized", "code": "UNAUTHORIZED"}"#).unwrap();
    assert_eq!(body.code, "UNAUTHORIZED");
}
