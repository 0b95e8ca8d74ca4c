pub mod combine;
pub mod merge;
pub mod token;

// Re-export commonly used types
pub use combine::{combine, combine_tokens};
pub use merge::merge;
pub use token::{ClassToken, Token};

/// 变参组合宏，对齐 JS 侧的调用形态
///
/// 接受任意数量、类型互异的 token（`&str`、`String`、`Option<_>`、
/// `bool`、[`Token`]），语义与 [`combine`] 完全一致。
///
/// # 示例
///
/// ```
/// use classwind_core::cn;
///
/// let active = true;
/// let class = cn!("btn", active.then_some("btn-active"), None::<&str>);
/// assert_eq!(class, "btn btn-active");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($token:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $(
            if let ::std::option::Option::Some(text) =
                $crate::ClassToken::class_text(&$token)
            {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
        )+
        out
    }};
}
