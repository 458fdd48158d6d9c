use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// 读取 markdown 文档全文
///
/// # 参数
/// - `path`: 文档路径
///
/// # 返回
/// 返回 UTF-8 文本，`\r\n` 统一为 `\n`
pub fn load_document(path: &Path) -> AppResult<String> {
    let content =
        fs::read_to_string(path).map_err(|source| AppError::file_access(path, source))?;

    tracing::info!(
        "正在加载: {} ({} 字节)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        content.len()
    );

    if content.contains('\r') {
        return Ok(content.replace("\r\n", "\n"));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.md");
        fs::write(&path, "### 1. Überblick\n\n**Was ist das?**\n").unwrap();

        let content = load_document(&path).unwrap();
        assert!(content.starts_with("### 1. Überblick"));
    }

    #[test]
    fn crlf_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.md");
        fs::write(&path, "### 1. A\r\n\r\n**Q?**\r\n").unwrap();

        assert_eq!(load_document(&path).unwrap(), "### 1. A\n\n**Q?**\n");
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, AppError::FileAccess { .. }));
    }

    #[test]
    fn non_utf8_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, [0x23u8, 0x20, 0xff, 0xfe]).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, AppError::InvalidUtf8 { .. }));
    }
}
