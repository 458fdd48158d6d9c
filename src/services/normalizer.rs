//! 题干规范化
//!
//! 小写、去掉星号、合并空白，得到比较用的键

use regex::Regex;
use std::sync::LazyLock;

static ASTERISKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 规范化题干文本
///
/// 对已规范化的文本再次调用结果不变
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = ASTERISKS_RE.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// 把连续空白合并为单个空格，不改变大小写
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}
