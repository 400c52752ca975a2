use serde::Deserialize;
use serde_json::Value;

/// Error JSON produced by the backend; either field may be missing.
///
/// `detail` is usually a string, but request-validation failures (HTTP 422)
/// carry a list of `{ "loc": [...], "msg": "..." }` objects instead.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// `detail` if present and non-empty, else `error`.
    pub fn into_message(self) -> Option<String> {
        self.detail
            .and_then(detail_text)
            .or_else(|| self.error.filter(|s| !s.trim().is_empty()))
    }
}

fn detail_text(detail: Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(json: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(json).unwrap().into_message()
    }

    #[test]
    fn string_detail() {
        assert_eq!(message(r#"{"detail":"No hay documentos"}"#).as_deref(), Some("No hay documentos"));
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let json = r#"{"detail":[
            {"loc":["query","q"],"msg":"field required","type":"missing"},
            {"loc":["query","q"],"msg":"too long","type":"string_too_long"}
        ]}"#;
        assert_eq!(message(json).as_deref(), Some("field required; too long"));
    }

    #[test]
    fn blank_detail_falls_back_to_error() {
        assert_eq!(message(r#"{"detail":"  ","error":"boom"}"#).as_deref(), Some("boom"));
        assert_eq!(message(r#"{}"#), None);
    }
}
