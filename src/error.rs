use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档不存在或无法读取
    #[error("无法读取文档 ({}): {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文档不是合法的 UTF-8
    #[error("文档不是有效的 UTF-8 编码: {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// 配置文件存在但读取失败
    #[error("无法读取配置文件 ({}): {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("TOML解析失败 ({}): {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档读取错误
    ///
    /// 非 UTF-8 内容单独归为 `InvalidUtf8`
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            AppError::InvalidUtf8 { path }
        } else {
            AppError::FileAccess { path, source }
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
