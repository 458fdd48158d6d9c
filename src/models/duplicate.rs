//! 重复检查结果
//!
//! 只借用题目记录，不复制也不修改

use super::question::QuestionRecord;

/// 前缀相同的一组题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactGroup<'a> {
    /// 共同的比较键（规范化题干前缀）
    pub key: String,
    /// 组内题目，按文档顺序
    pub members: Vec<&'a QuestionRecord>,
}

impl ExactGroup<'_> {
    pub fn numbers(&self) -> Vec<u32> {
        self.members.iter().map(|q| q.number).collect()
    }
}

/// 一方题干是另一方子串的题目对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetPair<'a> {
    pub first: &'a QuestionRecord,
    pub second: &'a QuestionRecord,
}

impl SubsetPair<'_> {
    pub fn numbers(&self) -> (u32, u32) {
        (self.first.number, self.second.number)
    }
}

/// 标题相近的题目对
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicPair<'a> {
    pub first: &'a QuestionRecord,
    pub second: &'a QuestionRecord,
    /// 标题词集重合率，范围 [0, 1]
    pub overlap: f64,
}

impl TopicPair<'_> {
    pub fn numbers(&self) -> (u32, u32) {
        (self.first.number, self.second.number)
    }
}

/// 三类重复检查的汇总
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuplicateReport<'a> {
    pub exact: Vec<ExactGroup<'a>>,
    pub subset: Vec<SubsetPair<'a>>,
    pub same_topic: Vec<TopicPair<'a>>,
}

impl DuplicateReport<'_> {
    pub fn is_clean(&self) -> bool {
        self.exact.is_empty() && self.subset.is_empty() && self.same_topic.is_empty()
    }
}
