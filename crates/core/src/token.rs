use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// 输入：单个 class token
///
/// 镜像 JS 侧的约束类型 `string | undefined | null | false`。
/// untagged 表示下，`null` ↔ `Absent`，布尔 ↔ `Flag`，字符串 ↔ `Text`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// 缺失值（JS 的 undefined / null）
    Absent,
    /// 布尔标记：false 丢弃，true 按宿主语言语义渲染为 "true"
    Flag(bool),
    /// 文本类名（空字符串视为 falsy）
    Text(String),
}

impl Token {
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    /// truthiness 判定：保留返回 true，丢弃返回 false
    pub fn is_truthy(&self) -> bool {
        self.class_text().is_some()
    }
}

/// 单个位置参数的抽象
///
/// `class_text` 返回 `Some` 表示 truthy（保留该文本），
/// 返回 `None` 表示 falsy（丢弃）。
pub trait ClassToken {
    fn class_text(&self) -> Option<&str>;
}

impl ClassToken for Token {
    fn class_text(&self) -> Option<&str> {
        match self {
            Token::Absent | Token::Flag(false) => None,
            Token::Flag(true) => Some("true"),
            Token::Text(s) if s.is_empty() => None,
            Token::Text(s) => Some(s),
        }
    }
}

impl ClassToken for str {
    fn class_text(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl ClassToken for String {
    fn class_text(&self) -> Option<&str> {
        self.as_str().class_text()
    }
}

impl ClassToken for Cow<'_, str> {
    fn class_text(&self) -> Option<&str> {
        self.as_ref().class_text()
    }
}

impl ClassToken for bool {
    fn class_text(&self) -> Option<&str> {
        if *self {
            Some("true")
        } else {
            None
        }
    }
}

/// `None` 对应缺失值，`Some` 委托给内部 token
impl<T: ClassToken> ClassToken for Option<T> {
    fn class_text(&self) -> Option<&str> {
        self.as_ref().and_then(ClassToken::class_text)
    }
}

impl<T: ClassToken + ?Sized> ClassToken for &T {
    fn class_text(&self) -> Option<&str> {
        (**self).class_text()
    }
}
