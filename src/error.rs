use thiserror::Error;

/// 应用程序错误类型
///
/// 解析核心（`services` 中的题号扫描、切分、解析）对任意文本都不会失败，
/// 这里的错误只来自文件读写、配置和结果序列化。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 结果输出错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
    /// 并发任务执行失败
    #[error("任务执行失败: {0}")]
    Task(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    #[error("文件不存在: {path}")]
    NotFound { path: String },

    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },

    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 文件为空或只包含空白字符
    #[error("文件内容为空: {path}")]
    Empty { path: String },

    #[error("文件大小 {size} 字节超过上限 {limit} 字节: {path}")]
    TooLarge { path: String, size: u64, limit: u64 },

    /// 只接受已提取好的纯文本（.txt）
    #[error("不支持的文件类型: {path}")]
    UnsupportedType { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置值不合法
    #[error("配置项 {name} 不合法: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// 结果输出错误
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("TOML序列化失败: {0}")]
    TomlSerializeFailed(#[from] toml::ser::Error),

    #[error("JSON序列化失败: {0}")]
    JsonSerializeFailed(#[from] serde_json::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Output(OutputError::TomlSerializeFailed(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(OutputError::JsonSerializeFailed(err))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = AppError::from(FileError::TooLarge {
            path: "a.txt".to_string(),
            size: 200,
            limit: 100,
        });
        let msg = err.to_string();
        assert!(msg.contains("a.txt"));
        assert!(msg.contains("200"));
    }

    #[test]
    fn test_io_source_is_exposed() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FileError::ReadFailed {
            path: "x.txt".to_string(),
            source: io,
        };
        assert!(err.source().is_some());
    }
}
