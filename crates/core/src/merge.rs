use indexmap::IndexSet;

use crate::token::ClassToken;

/// 组合并按单个类名去重
///
/// 功能：
/// - 先执行与 `combine` 相同的 truthiness 过滤
/// - 将保留的 token 按空白拆分为单个类名
/// - 去重时保留首次出现的顺序（使用 IndexSet）
///
/// 注意：`combine` 本身从不去重，需要精确拼接语义时用 `combine`。
///
/// # 示例
///
/// ```
/// use classwind_core::merge;
///
/// let class = merge(["btn btn-primary", "btn", "active"]);
/// assert_eq!(class, "btn btn-primary active");
/// ```
pub fn merge<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ClassToken,
{
    let mut seen: IndexSet<String> = IndexSet::new();

    for token in tokens {
        if let Some(text) = token.class_text() {
            for class in text.split_whitespace() {
                seen.insert(class.to_string());
            }
        }
    }

    seen.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}
