use crate::error::{AppResult, ConfigError};
use std::str::FromStr;

/// 标题截断的默认字符上限
pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;

/// 默认输入文件大小上限：100MB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// 解析核心的可调参数
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// 标题最多保留的字符数（按 Unicode 码点计）
    pub title_max_chars: usize,
}

impl ParserConfig {
    /// 回溯寻找标点时不会越过的位置（上限的一半）
    pub fn min_cut_index(&self) -> usize {
        self.title_max_chars / 2
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// 结果文件格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 已提取文本（.txt）所在目录
    pub input_folder: String,
    /// 解析结果输出目录
    pub output_folder: String,
    /// 解析结果格式
    pub output_format: OutputFormat,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件
    pub output_log_file: String,
    /// 未解析出题目的文档记录文件
    pub warn_file: String,
    /// 单个输入文件大小上限（字节）
    pub max_file_size_bytes: u64,
    pub parser: ParserConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_text".to_string(),
            output_folder: "output_toml".to_string(),
            output_format: OutputFormat::Toml,
            max_concurrent_documents: 8,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            parser: ParserConfig::default(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    ///
    /// 已设置但无法解析的变量会返回错误，而不是静默回退到默认值。
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let config = Self {
            input_folder: env_string("INPUT_FOLDER", default.input_folder),
            output_folder: env_string("OUTPUT_FOLDER", default.output_folder),
            output_format: env_parse("OUTPUT_FORMAT", "toml | json", default.output_format)?,
            max_concurrent_documents: env_parse(
                "MAX_CONCURRENT_DOCUMENTS",
                "usize",
                default.max_concurrent_documents,
            )?,
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool", default.verbose_logging)?,
            output_log_file: env_string("OUTPUT_LOG_FILE", default.output_log_file),
            warn_file: env_string("WARN_FILE", default.warn_file),
            max_file_size_bytes: env_parse(
                "MAX_FILE_SIZE_BYTES",
                "u64",
                default.max_file_size_bytes,
            )?,
            parser: ParserConfig {
                title_max_chars: env_parse(
                    "TITLE_MAX_CHARS",
                    "usize",
                    default.parser.title_max_chars,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_documents == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_concurrent_documents".to_string(),
                reason: "并发数必须大于 0".to_string(),
            });
        }
        if self.parser.title_max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                name: "title_max_chars".to_string(),
                reason: "标题长度上限必须大于 0".to_string(),
            });
        }
        Ok(())
    }
}

fn env_string(var_name: &str, default: String) -> String {
    std::env::var(var_name).unwrap_or(default)
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value, expected_type),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        })
}
