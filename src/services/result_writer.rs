//! 结果写出服务 - 业务能力层
//!
//! 只负责把一份 `ParseResult` 序列化并写入输出目录

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult};
use crate::models::question::ParseResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 结果写出服务
pub struct ResultWriter {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl ResultWriter {
    pub fn new(output_folder: impl AsRef<Path>, format: OutputFormat) -> Self {
        Self {
            output_folder: output_folder.as_ref().to_path_buf(),
            format,
        }
    }

    /// 序列化为字符串
    pub fn render(&self, result: &ParseResult) -> AppResult<String> {
        let rendered = match self.format {
            OutputFormat::Toml => toml::to_string_pretty(result)?,
            OutputFormat::Json => serde_json::to_string_pretty(result)?,
        };
        Ok(rendered)
    }

    /// 写入 `<输出目录>/<文档名>.<扩展名>`，返回文件路径
    pub async fn write(&self, document_name: &str, result: &ParseResult) -> AppResult<PathBuf> {
        let rendered = self.render(result)?;

        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_folder.display().to_string(), e))?;

        let path = self
            .output_folder
            .join(format!("{}.{}", document_name, self.format.extension()));

        debug!("写入结果: {} ({} 字节)", path.display(), rendered.len());

        fs::write(&path, rendered)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::ParsedQuestion;

    fn sample() -> ParseResult {
        ParseResult::new(
            vec![ParsedQuestion::new("什么是互斥锁？", "", "一种同步原语")],
            2,
        )
    }

    #[test]
    fn test_render_toml() {
        let writer = ResultWriter::new("unused", OutputFormat::Toml);
        let rendered = writer.render(&sample()).unwrap();
        assert!(rendered.contains("totalCount = 1"));
        assert!(rendered.contains("[[questions]]"));
        assert!(rendered.contains("什么是互斥锁？"));
    }

    #[test]
    fn test_render_json() {
        let writer = ResultWriter::new("unused", OutputFormat::Json);
        let rendered = writer.render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["questions"][0]["answer"], "一种同步原语");
    }

    #[tokio::test]
    async fn test_write_creates_folder() {
        let dir = std::env::temp_dir().join(format!("question_import_writer_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let writer = ResultWriter::new(&dir, OutputFormat::Json);
        let path = writer.write("paper", &sample()).await.unwrap();

        assert_eq!(path, dir.join("paper.json"));
        assert!(path.exists());
    }
}
