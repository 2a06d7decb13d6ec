//! Query-string building for list endpoints
//!
//! `serialize` turns an ordered list of `(key, value)` pairs into the pairs
//! that are actually sent: absent values, blank strings and NaN are dropped,
//! everything else keeps its position.

/// A single query parameter value before elision
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Absent,
    Text(String),
    Number(f64),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Number(value as f64)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryValue::Absent)
    }
}

pub type QueryParams = Vec<(&'static str, QueryValue)>;

/// Drop empty values and render the rest, preserving input order
pub fn serialize(params: &[(&'static str, QueryValue)]) -> Vec<(&'static str, String)> {
    params
        .iter()
        .filter_map(|(key, value)| render(value).map(|v| (*key, v)))
        .collect()
}

/// Percent-encode pairs into `a=1&b=2` (no leading `?`)
pub fn to_query_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string to a path, omitting `?` when there is nothing to send
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let qs = to_query_string(pairs);
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, qs)
    }
}

fn render(value: &QueryValue) -> Option<String> {
    match value {
        QueryValue::Absent => None,
        QueryValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        QueryValue::Number(n) if n.is_nan() => None,
        QueryValue::Number(n) => Some(format_number(*n)),
    }
}

// Whole numbers go out without a fractional part ("2", not "2.0")
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_drops_empty_values() {
        let params: QueryParams = vec![
            ("search_name", "  ".into()),
            ("gender", "".into()),
            ("age_min", QueryValue::Absent),
            ("age_max", QueryValue::Number(f64::NAN)),
            ("customer_region", "North".into()),
            ("page", 1u32.into()),
        ];

        let pairs = serialize(&params);

        assert_eq!(
            pairs,
            vec![
                ("customer_region", "North".to_string()),
                ("page", "1".to_string()),
            ]
        );
        assert!(pairs.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_serialize_keeps_input_order() {
        let params: QueryParams = vec![
            ("sort_order", "desc".into()),
            ("sort_by", "date".into()),
            ("page_size", 10u32.into()),
            ("page", 3u32.into()),
        ];

        let keys: Vec<_> = serialize(&params).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sort_order", "sort_by", "page_size", "page"]);
    }

    #[test]
    fn test_serialize_trims_text() {
        let params: QueryParams = vec![("search_name", "  Asha ".into())];
        assert_eq!(serialize(&params), vec![("search_name", "Asha".to_string())]);
    }

    #[test]
    fn test_numbers_render_without_fraction() {
        let params: QueryParams = vec![
            ("age_min", Some(18u32).into()),
            ("ratio", 0.5_f64.into()),
            ("age_max", None::<u32>.into()),
        ];
        assert_eq!(
            serialize(&params),
            vec![("age_min", "18".to_string()), ("ratio", "0.5".to_string())]
        );
    }

    #[test]
    fn test_to_query_string_encodes() {
        let pairs = vec![
            ("customer_region", "North,South".to_string()),
            ("search_name", "Ravi Kumar".to_string()),
        ];
        assert_eq!(
            to_query_string(&pairs),
            "customer_region=North%2CSouth&search_name=Ravi%20Kumar"
        );
    }

    #[test]
    fn test_with_query_omits_question_mark_when_empty() {
        assert_eq!(with_query("/api/sales", &[]), "/api/sales");
        assert_eq!(
            with_query("/api/sales", &[("page", "2".to_string())]),
            "/api/sales?page=2"
        );
    }
}
