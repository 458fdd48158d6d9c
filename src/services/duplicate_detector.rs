//! 重复检测
//!
//! 三种互相独立的检测，都只读题目列表：
//! - 规范化题干前缀相同（精确/近似重复）
//! - 一方题干是另一方的子串（子集重复）
//! - 标题词集重合率高（同一主题，需人工复核）

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::Config;
use crate::models::{DuplicateReport, ExactGroup, QuestionRecord, SubsetPair, TopicPair};

/// 运行全部三种检测
pub fn detect_duplicates<'a>(questions: &'a [QuestionRecord], config: &Config) -> DuplicateReport<'a> {
    DuplicateReport {
        exact: find_exact_groups(questions, config.exact_key_chars),
        subset: find_subset_pairs(questions, config.subset_min_chars),
        same_topic: find_same_topic_pairs(questions, config.title_overlap_threshold),
    }
}

/// 按规范化题干前 `key_chars` 个字符分组，只保留多于一题的组
///
/// 组按首个题号排序，组内保持文档顺序
pub fn find_exact_groups(questions: &[QuestionRecord], key_chars: usize) -> Vec<ExactGroup<'_>> {
    let mut groups: Vec<ExactGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for q in questions {
        let key: String = q.normalized_text.chars().take(key_chars).collect();
        match index_by_key.get(&key) {
            Some(&idx) => groups[idx].members.push(q),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(ExactGroup {
                    key,
                    members: vec![q],
                });
            }
        }
    }

    let mut dupes: Vec<ExactGroup> = groups.into_iter().filter(|g| g.members.len() > 1).collect();
    dupes.sort_by_key(|g| g.members[0].number);
    dupes
}

/// 找出一方题干包含另一方的题目对
///
/// 双方规范化题干都必须长于 `min_chars`；完全相同的题干归精确重复，这里不再报告。
/// 每对只报告一次。
pub fn find_subset_pairs(questions: &[QuestionRecord], min_chars: usize) -> Vec<SubsetPair<'_>> {
    let mut pairs = Vec::new();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();

    let candidates: Vec<&QuestionRecord> = questions
        .iter()
        .filter(|q| q.text_len() > min_chars)
        .collect();

    for (i, &a) in candidates.iter().enumerate() {
        for &b in &candidates[i + 1..] {
            if a.number == b.number || a.normalized_text == b.normalized_text {
                continue;
            }
            let (t1, t2) = (&a.normalized_text, &b.normalized_text);
            if !(t1.contains(t2.as_str()) || t2.contains(t1.as_str())) {
                continue;
            }
            let key = (a.number.min(b.number), a.number.max(b.number));
            if seen.insert(key) {
                debug!("子集重复: Q{} & Q{}", a.number, b.number);
                pairs.push(SubsetPair { first: a, second: b });
            }
        }
    }

    pairs
}

/// 标题切词：小写，连字符和短破折号视为空格
pub fn title_words(title: &str) -> HashSet<String> {
    title
        .to_lowercase()
        .replace(['–', '-'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// 词集重合率 `|交集| / max(|A|, |B|, 1)`
pub fn word_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let shared = a.intersection(b).count();
    let denom = a.len().max(b.len()).max(1);
    shared as f64 / denom as f64
}

/// 找出标题词集重合率不低于 `threshold` 的题目对
pub fn find_same_topic_pairs(questions: &[QuestionRecord], threshold: f64) -> Vec<TopicPair<'_>> {
    let words: Vec<HashSet<String>> = questions.iter().map(|q| title_words(&q.title)).collect();
    let mut pairs = Vec::new();

    for i in 0..questions.len() {
        for j in (i + 1)..questions.len() {
            let (a, b) = (&questions[i], &questions[j]);
            if a.number == b.number {
                continue;
            }
            let overlap = word_overlap(&words[i], &words[j]);
            if overlap >= threshold {
                pairs.push(TopicPair {
                    first: a,
                    second: b,
                    overlap,
                });
            }
        }
    }

    pairs
}
