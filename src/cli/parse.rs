//! # parse 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::Args;
use std::path::PathBuf;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Job directory containing the retrieved AutoCAS output
    #[arg(long, default_value = ".")]
    pub job_dir: PathBuf,

    /// File with the captured standard error (defaults to autocas.err in the job directory)
    #[arg(long)]
    pub stderr: Option<PathBuf>,
}
