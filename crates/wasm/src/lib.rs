use wasm_bindgen::prelude::*;

use classwind_core::{combine_tokens, merge, Token};

// ── JS 边界 ──────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 反序列化 JS 侧的 token 数组
///
/// undefined / null 元素映射为 `Token::Absent`，布尔映射为
/// `Token::Flag`，字符串映射为 `Token::Text`。数字、对象等
/// 契约外的元素直接报错，不做隐式转换。
fn parse_tokens(tokens: JsValue) -> Result<Vec<Token>, JsError> {
    if tokens.is_undefined() || tokens.is_null() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(tokens)
        .map_err(|e| JsError::new(&format!("Invalid tokens: {}", e)))
}

/// 组合 class token 数组
///
/// @param tokens - `(string | null | undefined | false)[]`
/// @returns 过滤 falsy 后以单空格连接的 class 字符串
#[wasm_bindgen(js_name = "cn")]
pub fn cn(tokens: JsValue) -> Result<String, JsError> {
    let tokens = parse_tokens(tokens)?;
    Ok(combine_tokens(&tokens))
}

/// 组合并按单个类名去重
///
/// @param tokens - `(string | null | undefined | false)[]`
/// @returns 去重后的 class 字符串（保留首次出现顺序）
#[wasm_bindgen(js_name = "cnMerge")]
pub fn cn_merge(tokens: JsValue) -> Result<String, JsError> {
    let tokens = parse_tokens(tokens)?;
    Ok(merge(&tokens))
}
