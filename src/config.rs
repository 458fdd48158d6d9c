use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// 默认检查的文档，与工具放在同一目录
pub const DEFAULT_DOCUMENT: &str = "microsoft-learn-dp600-assessment.md";
/// 可选配置文件名
pub const CONFIG_FILE: &str = "dupcheck.toml";

/// 精确重复比较键取规范化文本的前多少个字符
pub const EXACT_KEY_CHARS: usize = 200;
/// 子集比较要求双方规范化文本的最小长度（严格大于）
pub const SUBSET_MIN_CHARS: usize = 50;
/// 标题词集重合率阈值
pub const TITLE_OVERLAP_THRESHOLD: f64 = 0.6;
/// 题干预览长度
pub const PREVIEW_CHARS: usize = 80;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待检查的 markdown 文档
    pub document_path: PathBuf,
    pub exact_key_chars: usize,
    pub subset_min_chars: usize,
    pub title_overlap_threshold: f64,
    pub preview_chars: usize,
    // --- 报告截断宽度 ---
    pub title_preview_chars: usize,
    pub key_preview_chars: usize,
    pub subset_preview_chars: usize,
    pub topic_title_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: crate_dir().join(DEFAULT_DOCUMENT),
            exact_key_chars: EXACT_KEY_CHARS,
            subset_min_chars: SUBSET_MIN_CHARS,
            title_overlap_threshold: TITLE_OVERLAP_THRESHOLD,
            preview_chars: PREVIEW_CHARS,
            title_preview_chars: 50,
            key_preview_chars: 120,
            subset_preview_chars: 60,
            topic_title_preview_chars: 55,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，未出现的字段取默认值
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        // 相对路径按配置文件所在目录解析
        if config.document_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.document_path = dir.join(&config.document_path);
            }
        }

        Ok(config)
    }

    /// 配置文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if path.exists() {
            tracing::info!("📄 使用配置文件: {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// 工具目录下的配置文件路径
    pub fn default_config_path() -> PathBuf {
        crate_dir().join(CONFIG_FILE)
    }
}

fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
