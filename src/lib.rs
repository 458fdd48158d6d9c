//! # Question Dupcheck
//!
//! 检查 markdown 题库文档中的重复题目，输出供人工复核的报告
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目记录、重复检查结果
//! - `models/loaders` - 读取文档
//!
//! ### ② 能力层（Services）
//! - `block_splitter` - 按 `### N.` 标题切分题目块
//! - `question_extractor` - 抽取题号、标题、题干
//! - `normalizer` - 题干规范化
//! - `duplicate_detector` - 精确 / 子集 / 同主题三种检测
//! - `report_writer` - 渲染文本报告
//!
//! ### ③ 流程层（Workflow）
//! - `CheckFlow` - load → split → extract → detect → report
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{load_document, DuplicateReport, QuestionRecord};
pub use services::{
    detect_duplicates, extract_question, extract_questions, format_report, normalize, split_blocks,
};
pub use workflow::{CheckFlow, CheckOutcome};
