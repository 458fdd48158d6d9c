//! 重复检查流程 - 流程层
//!
//! 流程顺序：
//! 1. 读取文档
//! 2. 切分题目块
//! 3. 抽取题目
//! 4. 三种重复检测
//! 5. 渲染报告

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::load_document;
use crate::services::{detect_duplicates, extract_questions, split_blocks, ReportWriter};
use crate::utils::logging::{log_detect_summary, log_parse_summary};

/// 一次检查的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// 解析到的题目数
    pub total: usize,
    pub exact_groups: usize,
    pub subset_pairs: usize,
    pub topic_pairs: usize,
    /// 渲染好的报告文本
    pub report: String,
}

/// 重复检查流程
///
/// 不持有任何跨次运行的状态
pub struct CheckFlow {
    config: Config,
    report_writer: ReportWriter,
}

impl CheckFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            report_writer: ReportWriter::new(config),
        }
    }

    /// 读取配置中的文档并检查
    pub fn run(&self) -> AppResult<CheckOutcome> {
        let path = &self.config.document_path;
        let text = load_document(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.check_text(&name, &text))
    }

    /// 检查已读入内存的文档
    pub fn check_text(&self, document_name: &str, text: &str) -> CheckOutcome {
        let mut block_count = 0usize;
        let blocks = split_blocks(text).inspect(|_| block_count += 1);
        let questions = extract_questions(blocks, &self.config);
        log_parse_summary(block_count, questions.len());

        info!("🔍 正在检测重复题目...");
        let report = detect_duplicates(&questions, &self.config);
        log_detect_summary(&report);

        CheckOutcome {
            total: questions.len(),
            exact_groups: report.exact.len(),
            subset_pairs: report.subset.len(),
            topic_pairs: report.same_topic.len(),
            report: self.report_writer.render(document_name, questions.len(), &report),
        }
    }
}
