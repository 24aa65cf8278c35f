use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_message() {
        let err = CoreError::UnknownValue {
            kind: "editor",
            value: "emacs".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown editor: emacs");
    }
}
