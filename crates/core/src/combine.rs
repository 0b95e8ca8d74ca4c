use crate::token::{ClassToken, Token};

/// 组合 class token 列表
///
/// 功能：
/// - 丢弃 falsy token（缺失值、false、空字符串）
/// - 保留 truthy token 的相对顺序
/// - 用单个空格连接，首尾不带分隔符
///
/// 纯函数，不会失败；空输入或全 falsy 输入返回空字符串。
///
/// # 示例
///
/// ```
/// use classwind_core::combine;
///
/// let class = combine(["btn", "", "btn-primary"]);
/// assert_eq!(class, "btn btn-primary");
///
/// let class = combine([Some("btn"), None, Some("active")]);
/// assert_eq!(class, "btn active");
/// ```
pub fn combine<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ClassToken,
{
    let mut out = String::new();

    for token in tokens {
        if let Some(text) = token.class_text() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
    }

    out
}

/// `combine` 的 Token 形态入口，供 wasm 边界使用
pub fn combine_tokens(tokens: &[Token]) -> String {
    combine(tokens)
}
