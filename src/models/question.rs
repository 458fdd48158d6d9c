/// 解析出的一道题
///
/// 每条记录对应文档中的一个题目块，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// 题号（取自 `### N.` 标题）
    pub number: u32,
    /// 标题原文
    pub title: String,
    /// 用于比较的规范化题干
    pub normalized_text: String,
    /// 截断后的原始题干，仅用于报告
    pub preview_text: String,
}

impl QuestionRecord {
    /// 规范化题干的字符数
    pub fn text_len(&self) -> usize {
        self.normalized_text.chars().count()
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{} {} | {}", self.number, self.title, self.preview_text)
    }
}
