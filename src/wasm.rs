use wasm_bindgen::prelude::*;

use crate::i18n::{self, MessageCatalog};
use crate::memo::translate::{decode_hash, translate};
use crate::memo::{CanonicalMemo, memo_type_name_from_code, memo_type_tag_to_string};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn memo_to_json(memo: &CanonicalMemo) -> serde_json::Value {
    serde_json::json!({
        "type": memo_type_tag_to_string(memo.tag()),
        "value": memo.value_string(),
    })
}

/// Translate request memo fields into `{ok, memo}` or `{ok, error}`.
#[wasm_bindgen(js_name = translateMemo)]
pub fn translate_memo(memo: &str, memo_type: &str) -> JsValue {
    let result = match translate(memo, memo_type) {
        Ok(memo) => serde_json::json!({
            "ok": true,
            "memo": memo.as_ref().map(memo_to_json),
        }),
        Err(err) => match serde_json::to_value(err.failure()) {
            Ok(failure) => serde_json::json!({ "ok": false, "error": failure }),
            Err(_) => return JsValue::NULL,
        },
    };
    to_js(&result)
}

/// Localized message for a failed translation, or an empty string on success.
#[wasm_bindgen(js_name = translateMemoMessage)]
pub fn translate_memo_message(memo: &str, memo_type: &str, locale: &str) -> String {
    match translate(memo, memo_type) {
        Ok(_) => String::new(),
        Err(err) => {
            i18n::localize_failure(&MessageCatalog::with_defaults(), &err.failure(), locale)
        }
    }
}

/// Whether a hash memo would be accepted and which decoding produced it.
#[wasm_bindgen(js_name = hashMemoSource)]
pub fn hash_memo_source(memo: &str) -> Option<String> {
    decode_hash(memo).map(|(_, source)| source.as_ref().to_string())
}

#[wasm_bindgen(js_name = memoTypeName)]
pub fn memo_type_name(code: i32) -> String {
    memo_type_name_from_code(code).to_string()
}
