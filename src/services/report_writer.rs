//! 报告输出
//!
//! 把检测结果渲染为给人看的纯文本

use crate::config::Config;
use crate::models::{DuplicateReport, ExactGroup, SubsetPair, TopicPair};
use crate::utils::logging::truncate_text;

/// 报告渲染器
///
/// 只持有截断宽度，不关心检测流程
pub struct ReportWriter {
    exact_key_chars: usize,
    title_preview_chars: usize,
    key_preview_chars: usize,
    subset_preview_chars: usize,
    topic_title_preview_chars: usize,
}

impl ReportWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            exact_key_chars: config.exact_key_chars,
            title_preview_chars: config.title_preview_chars,
            key_preview_chars: config.key_preview_chars,
            subset_preview_chars: config.subset_preview_chars,
            topic_title_preview_chars: config.topic_title_preview_chars,
        }
    }

    /// 渲染完整报告
    ///
    /// # 参数
    /// - `document_name`: 报告标题中显示的文档名
    /// - `total`: 解析到的题目总数
    /// - `report`: 检测结果
    pub fn render(&self, document_name: &str, total: usize, report: &DuplicateReport) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        out.push_str(&format!("{}\nDUPLICATE CHECK: {}\n{}\n", rule, document_name, rule));
        out.push_str(&format!("Total questions parsed: {}\n\n", total));

        self.render_exact(&mut out, &report.exact);
        self.render_subset(&mut out, &report.subset);
        self.render_same_topic(&mut out, &report.same_topic);

        out
    }

    fn render_exact(&self, out: &mut String, groups: &[ExactGroup]) {
        if groups.is_empty() {
            out.push_str(&format!(
                "No exact duplicates found (by first {} normalized chars).\n\n",
                self.exact_key_chars
            ));
            return;
        }

        out.push_str(&format!(
            "--- EXACT / NEAR-EXACT DUPLICATES (same first {} chars normalized) ---\n",
            self.exact_key_chars
        ));
        for group in groups {
            let titles: Vec<String> = group
                .members
                .iter()
                .map(|q| truncate_text(&q.title, self.title_preview_chars))
                .collect();
            out.push_str(&format!(
                "  Questions: {:?}  ({})\n",
                group.numbers(),
                titles.join(", ")
            ));
            out.push_str(&format!(
                "  Preview: {}\n\n",
                truncate_text(&group.key, self.key_preview_chars)
            ));
        }
    }

    fn render_subset(&self, out: &mut String, pairs: &[SubsetPair]) {
        if pairs.is_empty() {
            out.push_str("No subset duplicates found.\n\n");
            return;
        }

        out.push_str("--- SUBSET DUPLICATES (one question text contained in another) ---\n");
        for pair in pairs {
            out.push_str(&format!("  Q{} & Q{}:\n", pair.first.number, pair.second.number));
            out.push_str(&format!(
                "    {}\n",
                truncate_text(&pair.first.preview_text, self.subset_preview_chars)
            ));
            out.push_str(&format!(
                "    {}\n\n",
                truncate_text(&pair.second.preview_text, self.subset_preview_chars)
            ));
        }
    }

    fn render_same_topic(&self, out: &mut String, pairs: &[TopicPair]) {
        out.push_str("--- POSSIBLE SAME-TOPIC (similar titles) - review manually ---\n");
        if pairs.is_empty() {
            out.push_str("  No same-topic titles found.\n");
            return;
        }

        for pair in pairs {
            out.push_str(&format!(
                "  Q{} / Q{} (title overlap {:.0}%): {} | {}\n",
                pair.first.number,
                pair.second.number,
                pair.overlap * 100.0,
                truncate_text(&pair.first.title.to_lowercase(), self.topic_title_preview_chars),
                truncate_text(&pair.second.title.to_lowercase(), self.topic_title_preview_chars),
            ));
        }
    }
}

/// 用默认宽度渲染报告
pub fn format_report(document_name: &str, total: usize, report: &DuplicateReport) -> String {
    ReportWriter::new(&Config::default()).render(document_name, total, report)
}
