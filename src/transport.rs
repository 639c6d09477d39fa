//! Message shell around the codec: a request carries an operation tag and a
//! byte payload, a response carries either the result bytes or the error text.
use crate::codec::Translator;
use crate::error::GugaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Operation requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encode,
    Decode,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
        }
    }
}

impl FromStr for Operation {
    type Err = GugaError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Operation::Encode),
            "decode" => Ok(Operation::Decode),
            invalid => Err(GugaError::UnknownOperation(invalid.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub operation: Operation,
    pub input: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Success {
        #[serde(rename = "type")]
        operation: Operation,
        result: Vec<u8>,
    },
    Error {
        #[serde(rename = "type")]
        operation: Operation,
        message: String,
    },
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }
}

/// Run one request to completion. Failures are reported in the response,
/// with the error message passed through unchanged.
pub fn handle(translator: &Translator, request: Request) -> Response {
    let Request { operation, input } = request;
    let outcome = match operation {
        Operation::Encode => translator.encode(&input),
        Operation::Decode => translator.decode(&input),
    };

    match outcome {
        Ok(result) => Response::Success { operation, result },
        Err(e) => {
            warn!(%operation, stage = ?e.stage(), "request failed: {}", e);
            Response::Error {
                operation,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_str() {
        assert_eq!("encode".parse::<Operation>().unwrap(), Operation::Encode);
        assert_eq!("decode".parse::<Operation>().unwrap(), Operation::Decode);
        assert!(matches!("swap".parse::<Operation>(), Err(GugaError::UnknownOperation(_))));
    }

    #[test]
    fn test_handle_roundtrip() {
        let translator = Translator::default();
        let encoded = handle(
            &translator,
            Request { operation: Operation::Encode, input: "你好".as_bytes().to_vec() },
        );
        let result = match encoded {
            Response::Success { result, .. } => result,
            other => panic!("encode failed: {:?}", other),
        };

        let decoded = handle(&translator, Request { operation: Operation::Decode, input: result });
        assert_eq!(
            decoded,
            Response::Success { operation: Operation::Decode, result: "你好".as_bytes().to_vec() }
        );
    }

    #[test]
    fn test_handle_error_message_verbatim() {
        let translator = Translator::default();
        let response = handle(
            &translator,
            Request { operation: Operation::Decode, input: "咕咕咕咕".as_bytes().to_vec() },
        );
        assert!(!response.is_success());
        let expected = GugaError::InvalidLength { tokens: 4 }.to_string();
        assert_eq!(
            response,
            Response::Error { operation: Operation::Decode, message: expected }
        );
    }

    #[test]
    fn test_response_shape() {
        let response = Response::Error { operation: Operation::Decode, message: "bad".into() };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "error", "type": "decode", "message": "bad" }));

        let request: Request = serde_json::from_str(r#"{"type":"encode","input":[65]}"#).unwrap();
        assert_eq!(request, Request { operation: Operation::Encode, input: vec![65] });
    }
}
