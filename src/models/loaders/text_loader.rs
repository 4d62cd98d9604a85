use crate::error::{AppError, AppResult, FileError};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 已从 PDF 中提取好的纯文本文档
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// 文件名（不含扩展名），用作输出文件名
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// 读取单个文本文件
///
/// 只接受 `.txt`，拒绝超过 `max_size_bytes` 的文件、空文件和非 UTF-8 内容。
pub async fn load_text_document(path: &Path, max_size_bytes: u64) -> AppResult<TextDocument> {
    let display = path.display().to_string();

    if !is_text_file(path) {
        return Err(FileError::UnsupportedType { path: display }.into());
    }

    let metadata = fs::metadata(path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::from(FileError::NotFound {
                path: display.clone(),
            })
        } else {
            AppError::file_read_failed(&display, e)
        }
    })?;

    if metadata.len() > max_size_bytes {
        return Err(FileError::TooLarge {
            path: display,
            size: metadata.len(),
            limit: max_size_bytes,
        }
        .into());
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::file_read_failed(&display, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    if text.trim().is_empty() {
        return Err(FileError::Empty { path: display }.into());
    }

    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(TextDocument {
        name,
        path: path.to_path_buf(),
        text,
    })
}

/// 从文件夹中加载所有文本文档
///
/// 不合格的文件会记录警告并跳过，结果按文件名排序。
pub async fn load_all_text_documents(
    folder_path: &str,
    max_size_bytes: u64,
) -> AppResult<Vec<TextDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if is_text_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_document(&path, max_size_bytes).await {
            Ok(doc) => {
                tracing::debug!("成功加载 {} 个字符", doc.text.chars().count());
                documents.push(doc);
            }
            Err(e) => {
                tracing::warn!("跳过文件 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
