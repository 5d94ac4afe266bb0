//! # collect 子命令 CLI 定义
//!
//! 汇总多个 AutoCAS 作业目录的结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Root directory whose sub-directories are AutoCAS job directories
    pub root: PathBuf,

    /// CSV file for the successfully parsed results
    #[arg(long, default_value = "autocas_results.csv")]
    pub output: PathBuf,
}
