//! # run 子命令 CLI 定义
//!
//! 本地运行一次 AutoCAS 作业
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::prepare::ParamArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Molecular structure in XYZ format
    #[arg(long)]
    pub xyz: PathBuf,

    /// Job directory to prepare and run in
    #[arg(long)]
    pub job_dir: PathBuf,

    /// AutoCAS executable
    #[arg(long, env = "AUTOCAS_EXEC", default_value = "autocas")]
    pub exec: String,

    #[command(flatten)]
    pub params: ParamArgs,
}
