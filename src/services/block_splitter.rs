//! 题目块切分
//!
//! 在每个 `### N. ` 标题行之前切开，标题行留在它引出的块里

use regex::Regex;
use std::sync::LazyLock;

/// 换行符后紧跟题目标题；切分点是换行符本身
static HEADER_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n### \d+\. ").unwrap());

/// 惰性的块迭代器
///
/// 切分点处的换行符被丢弃，其余文本按原样分配到各块
pub struct Blocks<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.text[self.pos..];
        match HEADER_BOUNDARY_RE.find(rest) {
            Some(m) => {
                let block = &rest[..m.start()];
                // 跳过换行符，下一块从 `###` 开始
                self.pos += m.start() + 1;
                Some(block)
            }
            None => {
                self.done = true;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

/// 把文档切成题目块
///
/// 第一个块可能是前言，由抽取阶段的标题匹配过滤掉
pub fn split_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        text,
        pos: 0,
        done: false,
    }
}
