use wasm_bindgen::prelude::*;
use crate::codec::default_translator;
use crate::transport::{self, Operation, Request};

/// Encode UTF-8 text bytes into emoji text bytes
#[wasm_bindgen]
pub fn encode(input: &[u8]) -> Result<Vec<u8>, JsError> {
    default_translator()
        .encode(input)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Decode emoji text bytes back into UTF-8 text bytes
#[wasm_bindgen]
pub fn decode(input: &[u8]) -> Result<Vec<u8>, JsError> {
    default_translator()
        .decode(input)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Worker-style entry point: returns `{ status, type, result | message }`
#[wasm_bindgen]
pub fn handle_message(kind: &str, input: Vec<u8>) -> Result<JsValue, JsError> {
    let operation: Operation = kind.parse().map_err(|e: crate::GugaError| JsError::new(&e.to_string()))?;
    let response = transport::handle(default_translator(), Request { operation, input });
    Ok(serde_wasm_bindgen::to_value(&response)?)
}

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
