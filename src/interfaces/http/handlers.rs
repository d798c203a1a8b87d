use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::config::MAX_SCHEDULE_YEARS;
use crate::domain::loan::LoanInputs;
use crate::interfaces::presentation::FormattedRepayment;
use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultRateResponse {
    pub interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// POST /api/calculate-mortgage
///
/// Body fields are `loanAmount` (the property price), `deposit`,
/// `interestRate` and `loanTerm`. They are coerced to numbers without
/// validation, so missing or non-numeric fields surface as `NaN` figures.
/// The one exception is `loanTerm`: a term whose schedule would run past
/// [`MAX_SCHEDULE_YEARS`] is rejected with `400`.
pub async fn calculate_mortgage(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<FormattedRepayment>> {
    let body: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };

    let loan = LoanInputs::new(
        coerce_number(body.get("loanAmount")),
        coerce_number(body.get("deposit")),
        coerce_number(body.get("interestRate")),
        coerce_number(body.get("loanTerm")),
    );

    let years = loan.schedule_years();
    if years > MAX_SCHEDULE_YEARS {
        return Err(ApiError::TermTooLong {
            years,
            max: MAX_SCHEDULE_YEARS,
        });
    }

    let calculator = Arc::clone(&state.calculator);
    let formatted =
        tokio::task::spawn_blocking(move || FormattedRepayment::from(&calculator.calculate(&loan)))
            .await?;

    Ok(Json(formatted))
}

/// Any method other than POST on the calculation route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /api/default-rate
pub async fn default_rate(State(state): State<AppState>) -> Json<DefaultRateResponse> {
    Json(DefaultRateResponse {
        interest_rate: state.calculator.default_interest_rate().await,
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Numeric coercion following JavaScript's `Number()`.
///
/// Numbers pass through; `null`, `false` and blank strings are zero and
/// `true` is one. Strings are trimmed and accept decimal literals,
/// `Infinity`, and `0x`/`0o`/`0b` prefixed integers. An empty array is zero
/// and a single-element array coerces its element. A missing field and
/// anything else is `NaN`.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_numeric_string(s),
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            // `[true]` stringifies to "true", which is not numeric.
            [Value::Bool(_)] | [Value::Object(_)] => f64::NAN,
            [item] => coerce_number(Some(item)),
            _ => f64::NAN,
        },
        Some(Value::Object(_)) | None => f64::NAN,
    }
}

fn parse_numeric_string(s: &str) -> f64 {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];

    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some((digits, radix)) = PREFIXES
        .iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, *radix)))
    {
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Rust's float parser also accepts "inf" and "nan"; restrict to the
    // characters of a decimal literal first.
    if s.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        let body = json!({
            "number": 5,
            "float": 4.25,
            "string": " 100000 ",
            "blank": "",
            "text": "lots",
            "null": null,
            "yes": true,
            "no": false,
            "list": [1],
        });

        assert_eq!(coerce_number(body.get("number")), 5.0);
        assert_eq!(coerce_number(body.get("float")), 4.25);
        assert_eq!(coerce_number(body.get("string")), 100_000.0);
        assert_eq!(coerce_number(body.get("blank")), 0.0);
        assert!(coerce_number(body.get("text")).is_nan());
        assert_eq!(coerce_number(body.get("null")), 0.0);
        assert_eq!(coerce_number(body.get("yes")), 1.0);
        assert_eq!(coerce_number(body.get("no")), 0.0);
        assert_eq!(coerce_number(body.get("list")), 1.0);
        assert!(coerce_number(body.get("absent")).is_nan());
    }

    #[test]
    fn test_coerce_number_arrays() {
        assert_eq!(coerce_number(Some(&json!([]))), 0.0);
        assert_eq!(coerce_number(Some(&json!([5]))), 5.0);
        assert_eq!(coerce_number(Some(&json!([" 7 "]))), 7.0);
        assert_eq!(coerce_number(Some(&json!([[2.5]]))), 2.5);
        assert_eq!(coerce_number(Some(&json!([null]))), 0.0);
        assert!(coerce_number(Some(&json!([1, 2]))).is_nan());
        assert!(coerce_number(Some(&json!([true]))).is_nan());
        assert!(coerce_number(Some(&json!({ "a": 1 }))).is_nan());
    }

    #[test]
    fn test_coerce_number_strings() {
        let parse = |s: &str| coerce_number(Some(&json!(s)));

        assert_eq!(parse("1e3"), 1000.0);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("-12.5"), -12.5);
        assert_eq!(parse("Infinity"), f64::INFINITY);
        assert_eq!(parse("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse("0x1A"), 26.0);
        assert_eq!(parse("0o17"), 15.0);
        assert_eq!(parse("0b101"), 5.0);

        for text in ["inf", "nan", "NaN", "infinity", "0x", "0x1G", "-0x1A", "1_000", "1e", "£5"] {
            assert!(parse(text).is_nan(), "{text:?} should not coerce");
        }
    }
}
