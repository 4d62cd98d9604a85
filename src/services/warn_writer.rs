//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将没有解析出题目或处理失败的文档写入 warn.txt
/// - 只处理单个文档的警告
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 使用默认路径 warn.txt
    pub fn new() -> Self {
        Self::with_path("warn.txt")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 追加一条警告
    ///
    /// # 参数
    /// - `document`: 文档名
    /// - `reason`: 原因
    pub fn write(&self, document: &str, reason: &str) -> AppResult<()> {
        debug!("写入警告: 文档 {} | 原因: {}", document, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        let warn_msg = format!("文档 {} | 原因: {}\n", document, reason);

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
