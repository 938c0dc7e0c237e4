//! JavaScript bindings for OTKit core types

use crate::error::OtError;
use crate::operation::Operation;
use crate::ot;
use crate::protocol;
use wasm_bindgen::prelude::*;

fn to_js_error(err: OtError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-friendly wrapper for Operation
#[wasm_bindgen]
pub struct WasmOperation {
    inner: Operation,
}

#[wasm_bindgen]
impl WasmOperation {
    /// Create an empty operation against `base_revision`
    ///
    /// A random id is assigned when `id` is omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(base_revision: u64, id: Option<String>) -> Result<WasmOperation, JsValue> {
        let inner = match id {
            Some(id) => Operation::with_id(id, base_revision).map_err(to_js_error)?,
            None => Operation::new(base_revision),
        };
        Ok(Self { inner })
    }

    /// Decode and validate an operation record (JSON string)
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(json: &str) -> Result<WasmOperation, JsValue> {
        let inner = protocol::from_json(json).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = retain)]
    pub fn retain(&mut self, n: usize) -> Result<(), JsValue> {
        self.inner.retain(n).map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = insert)]
    pub fn insert(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.insert(text).map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = delete)]
    pub fn delete(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.delete(text).map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getId)]
    pub fn get_id(&self) -> String {
        self.inner.id().to_string()
    }

    #[wasm_bindgen(js_name = getBaseRevision)]
    pub fn get_base_revision(&self) -> u64 {
        self.inner.base_revision()
    }

    #[wasm_bindgen(js_name = baseLength)]
    pub fn base_length(&self) -> usize {
        self.inner.base_length()
    }

    #[wasm_bindgen(js_name = targetLength)]
    pub fn target_length(&self) -> usize {
        self.inner.target_length()
    }

    #[wasm_bindgen(js_name = isNoop)]
    pub fn is_noop(&self) -> bool {
        self.inner.is_noop()
    }

    /// Apply this operation to a document
    #[wasm_bindgen(js_name = apply)]
    pub fn apply(&self, input: &str) -> Result<String, JsValue> {
        ot::apply(input, &self.inner).map_err(to_js_error)
    }

    /// Compose this operation with one that follows it
    #[wasm_bindgen(js_name = compose)]
    pub fn compose(&self, next: &WasmOperation) -> Result<WasmOperation, JsValue> {
        let inner = ot::compose(&self.inner, &next.inner).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Transform against a concurrent operation
    ///
    /// Returns `[thisPrime, otherPrime]`.
    #[wasm_bindgen(js_name = transform)]
    pub fn transform(&self, other: &WasmOperation) -> Result<js_sys::Array, JsValue> {
        let (a_prime, b_prime) = ot::transform(&self.inner, &other.inner).map_err(to_js_error)?;
        let pair = js_sys::Array::new();
        pair.push(&JsValue::from(WasmOperation { inner: a_prime }));
        pair.push(&JsValue::from(WasmOperation { inner: b_prime }));
        Ok(pair)
    }

    /// Export operation record as JSON string
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        protocol::to_json(&self.inner).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}
