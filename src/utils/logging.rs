//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use std::path::Path;
use tracing::{info, warn};

use crate::models::DuplicateReport;

/// 记录程序启动信息
///
/// # 参数
/// - `document`: 待检查的文档路径
pub fn log_startup(document: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始检查重复题目");
    info!("📄 文档: {}", document.display());
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录解析结果
///
/// # 参数
/// - `blocks`: 切分出的块数
/// - `questions`: 成功解析的题目数
pub fn log_parse_summary(blocks: usize, questions: usize) {
    if questions == 0 {
        warn!("⚠️ 没有解析到任何题目 (共 {} 个块)", blocks);
        return;
    }
    info!(
        "✓ 解析到 {} 道题目，跳过 {} 个块",
        questions,
        blocks.saturating_sub(questions)
    );
}

/// 记录检测结果统计
pub fn log_detect_summary(report: &DuplicateReport) {
    info!("{}", "─".repeat(60));
    if report.is_clean() {
        info!("✅ 未发现疑似重复");
    }
    info!("📊 精确/近似重复: {} 组", report.exact.len());
    info!("📊 子集重复: {} 对", report.subset.len());
    info!("📊 标题相近: {} 对", report.same_topic.len());
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本，超长时追加 `...`
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
