//! # 统一错误处理模块
//!
//! 定义 autocas-tool 的所有错误类型，使用 `thiserror` 派生。
//!
//! 计算本身的终止状态（缺少输出文件、计算失败、解析失败）由
//! `job::ExitStatus` 表示，这里只负责把它包装进统一错误类型。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `job::ExitStatus`

use crate::job::ExitStatus;
use thiserror::Error;

/// autocas-tool 统一错误类型
#[derive(Error, Debug)]
pub enum AutocasError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 计算终止状态
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Calculation(#[from] ExitStatus),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AutocasError>;
