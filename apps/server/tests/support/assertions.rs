use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

/// Assert that a response body is a valid API envelope with the given code
pub fn assert_envelope(value: &Value, code: u16) -> anyhow::Result<&Value> {
    assert_eq!(
        value.get("code").and_then(|v| v.as_u64()),
        Some(u64::from(code)),
        "expected envelope code = {code}, body: {value}"
    );
    assert!(
        value.get("message").and_then(|v| v.as_str()).is_some(),
        "expected envelope message, body: {value}"
    );
    Ok(value)
}

/// Get the envelope data field as an array
pub fn data_array(value: &Value) -> anyhow::Result<&Vec<Value>> {
    value
        .get("data")
        .and_then(|v| v.as_array())
        .context("envelope data is array")
}

/// Extract product names from the envelope data array, in response order
pub fn product_names(value: &Value) -> anyhow::Result<Vec<String>> {
    let items = data_array(value)?;
    let names = items
        .iter()
        .filter_map(|p| p.get("name").and_then(|v| v.as_str()).map(|s| s.to_string()))
        .collect();
    Ok(names)
}

/// Assert the pagination block of a search envelope
pub fn assert_pagination(
    value: &Value,
    page: u64,
    page_size: u64,
    total: u64,
    total_pages: u64,
) -> anyhow::Result<()> {
    let pagination = value.get("pagination").context("envelope has pagination")?;
    let expected = [
        ("page", page),
        ("pageSize", page_size),
        ("total", total),
        ("totalPages", total_pages),
    ];
    for (key, want) in expected {
        assert_eq!(
            pagination.get(key).and_then(|v| v.as_u64()),
            Some(want),
            "pagination.{key} mismatch in {pagination}"
        );
    }
    Ok(())
}

/// Fails with `context` when the status is not the expected one.
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected status");
}
