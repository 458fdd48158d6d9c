//! 题目抽取
//!
//! 从单个题目块里取出题号、标题和题干。
//! 先按"粗体段落 + 空行 + **Answer:**"匹配，失败时逐行扫描兜底。

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::Config;
use crate::models::QuestionRecord;
use crate::services::normalizer::{collapse_whitespace, normalize};
use crate::utils::logging::truncate_text;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### (\d+)\. (.+?)\n\n").unwrap());
static BOLD_QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\n\*\*([^*]+(?:\*\*[^*]*)*)\*\*\s*\n\n\*\*Answer:").unwrap()
});
static EDGE_ASTERISKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*+|\*+$").unwrap());

/// 兜底扫描的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 尚未遇到粗体题干行
    Outside,
    /// 正在累积题干行
    InQuestion,
}

/// 单行对扫描的影响
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `**Answer:` 开头，结束扫描
    AnswerMarker,
    /// 粗体开头，但不是 `**Answer`
    BoldStart,
    /// 其他 `**` 开头的行（如 `**Answer**:`），既不累积也不结束扫描
    OtherBold,
    Plain,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with("**Answer:") {
            LineKind::AnswerMarker
        } else if line.starts_with("**Answer") {
            LineKind::OtherBold
        } else if line.starts_with("**") {
            LineKind::BoldStart
        } else {
            LineKind::Plain
        }
    }
}

impl ScanState {
    /// 返回新状态，以及该行是否计入题干
    fn step(self, kind: LineKind) -> (Self, bool) {
        match (self, kind) {
            (_, LineKind::BoldStart) => (ScanState::InQuestion, true),
            (ScanState::InQuestion, LineKind::Plain) => (ScanState::InQuestion, true),
            (state, _) => (state, false),
        }
    }
}

/// 解析标题行，返回 (题号, 标题)
fn parse_header(block: &str) -> Option<(u32, &str)> {
    let caps = HEADER_RE.captures(block)?;
    let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let title = caps.get(2)?.as_str();
    Some((number, title))
}

/// 主匹配：粗体段落之后隔一个空行是 `**Answer:`
fn bold_paragraph_body(block: &str) -> Option<String> {
    let caps = BOLD_QUESTION_RE.captures(block)?;
    let inner = caps.get(1)?.as_str().replace("**", " ");
    Some(collapse_whitespace(inner.trim()))
}

/// 兜底：从第一个粗体行开始累积，直到 `**Answer:` 行
fn scan_lines_body(block: &str) -> String {
    let mut state = ScanState::Outside;
    let mut lines = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        let kind = LineKind::classify(line);
        if kind == LineKind::AnswerMarker {
            break;
        }
        let (next, keep) = state.step(kind);
        if keep {
            lines.push(line);
        }
        state = next;
    }

    let joined = lines.join(" ");
    EDGE_ASTERISKS_RE
        .replace_all(joined.trim(), "")
        .into_owned()
}

/// 从题目块中抽取一道题
///
/// # 参数
/// - `block`: 单个题目块
/// - `config`: 配置（预览长度）
///
/// # 返回
/// 不是题目块或取不到题干时返回 `None`
pub fn extract_question(block: &str, config: &Config) -> Option<QuestionRecord> {
    let (number, title) = parse_header(block)?;

    let body = match bold_paragraph_body(block) {
        Some(body) => body,
        None => {
            debug!("Q{} 未匹配粗体段落，使用逐行扫描", number);
            scan_lines_body(block)
        }
    };

    if body.trim().is_empty() {
        debug!("Q{} 没有找到题干，跳过", number);
        return None;
    }

    let record = QuestionRecord {
        number,
        title: title.to_string(),
        normalized_text: normalize(&body),
        preview_text: truncate_text(&body, config.preview_chars),
    };
    debug!("✓ {}", record);
    Some(record)
}

/// 抽取所有题目，保持文档顺序
pub fn extract_questions<'a, I>(blocks: I, config: &Config) -> Vec<QuestionRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    blocks
        .into_iter()
        .filter_map(|block| extract_question(block, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(block: &str) -> Option<QuestionRecord> {
        extract_question(block, &Config::default())
    }

    #[test]
    fn well_formed_block() {
        let block = "### 12. Lakehouse – Shortcuts\n\n**Which item creates a shortcut?**\n\n**Answer:** B\n";
        let q = extract(block).unwrap();
        assert_eq!(q.number, 12);
        assert_eq!(q.title, "Lakehouse – Shortcuts");
        assert_eq!(q.normalized_text, "which item creates a shortcut?");
        assert_eq!(q.preview_text, "Which item creates a shortcut?");
    }

    #[test]
    fn embedded_bold_becomes_space() {
        let block = "### 3. T\n\nIntro\n\n**Pick the**DAX** function that\nsums values.**\n\n**Answer:** A";
        let q = extract(block).unwrap();
        assert_eq!(q.preview_text, "Pick the DAX function that sums values.");
    }

    #[test]
    fn header_requires_blank_line() {
        assert!(extract("### 1. Title\n**Q?**\n\n**Answer:** A").is_none());
        assert!(extract("intro text\n### 1. Title\n\n**Q?**").is_none());
    }

    #[test]
    fn title_is_kept_raw() {
        let q = extract("### 4. **Bold** title \n\n**Q?**\n\n**Answer:** A").unwrap();
        assert_eq!(q.title, "**Bold** title ");
    }

    #[test]
    fn fallback_accumulates_continuation_lines() {
        // 题干后没有空行，主匹配失败
        let block = "### 7. Pipelines\n\n**You need to copy data\nfrom an on-premises SQL server.\nWhat should you use?**\n**Answer:** Gateway";
        let q = extract(block).unwrap();
        assert_eq!(
            q.preview_text,
            "You need to copy data from an on-premises SQL server. What should you use?"
        );
    }

    #[test]
    fn fallback_single_line() {
        let block = "### 8. T\n\n**Single line question?**\n**Answer:** x\nmore text";
        let q = extract(block).unwrap();
        assert_eq!(q.normalized_text, "single line question?");
    }

    #[test]
    fn fallback_ignores_text_before_first_bold_line() {
        let block = "### 9. T\n\nSome context first.\n**The question?**\n**Answer:** x";
        let q = extract(block).unwrap();
        assert_eq!(q.preview_text, "The question?");
    }

    #[test]
    fn fallback_without_answer_marker_runs_to_end() {
        let block = "### 10. T\n\n**Start of question**\ntrailing prose";
        let q = extract(block).unwrap();
        assert_eq!(q.preview_text, "Start of question** trailing prose");
        assert_eq!(q.normalized_text, "start of question trailing prose");
    }

    #[test]
    fn block_without_bold_text_is_skipped() {
        assert!(extract("### 11. T\n\nplain text only\nno markers").is_none());
    }

    #[test]
    fn long_body_preview_is_truncated() {
        let body = "word ".repeat(30);
        let block = format!("### 1. T\n\n**{}**\n\n**Answer:** A", body.trim());
        let q = extract(&block).unwrap();
        assert_eq!(q.preview_text.chars().count(), 83);
        assert!(q.preview_text.ends_with("..."));
        assert_eq!(q.normalized_text, body.trim());
    }

    #[test]
    fn scan_state_transitions() {
        use LineKind::*;
        use ScanState::*;
        assert_eq!(Outside.step(Plain), (Outside, false));
        assert_eq!(Outside.step(BoldStart), (InQuestion, true));
        assert_eq!(InQuestion.step(Plain), (InQuestion, true));
        assert_eq!(InQuestion.step(BoldStart), (InQuestion, true));
        assert_eq!(InQuestion.step(OtherBold), (InQuestion, false));
        assert_eq!(LineKind::classify("**Answer:** B"), AnswerMarker);
        assert_eq!(LineKind::classify("**Answer**: B"), OtherBold);
    }
}
