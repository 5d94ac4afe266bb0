//! # parse 命令实现
//!
//! 把作业目录当作"取回的文件"交给 `job::parse_output`，并展示结果。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `job/parse.rs`, `utils/output.rs`
//! - 被 `commands/run.rs`, `commands/collect.rs` 复用

use crate::cli::parse::ParseArgs;
use crate::error::{AutocasError, Result};
use crate::job::{self, ExitStatus};
use crate::models::{ParsedOutput, ParsedResult};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单个作业目录的解析结果
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// 已提交的输出（失败时可能只有一部分）
    pub outputs: Vec<ParsedOutput>,

    /// 终止状态，`Ok` 表示全部字段提取成功
    pub status: std::result::Result<(), ExitStatus>,
}

impl JobOutcome {
    /// 完整结果（仅在成功时存在）
    pub fn result(&self) -> Option<ParsedResult> {
        match self.status {
            Ok(()) => ParsedResult::from_outputs(&self.outputs),
            Err(_) => None,
        }
    }
}

/// 输出表格行
#[derive(Debug, Clone, Tabled)]
struct OutputRow {
    #[tabled(rename = "Output")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("Parsing AutoCAS Output");

    let outcome = parse_job_dir(&args.job_dir, args.stderr.as_deref())?;
    report(&outcome)
}

/// 解析作业目录
///
/// 目录下的文件名即取回列表；标准错误默认取 `autocas.err`（不存在时视为空）。
pub fn parse_job_dir(job_dir: &Path, stderr_path: Option<&Path>) -> Result<JobOutcome> {
    if !job_dir.is_dir() {
        return Err(AutocasError::DirectoryNotFound {
            path: job_dir.display().to_string(),
        });
    }

    let retrieved = list_retrieved(job_dir)?;

    let default_stderr = job_dir.join(job::STDERR_FILE);
    let stderr_path = stderr_path.unwrap_or(default_stderr.as_path());
    let stderr = if stderr_path.exists() {
        Some(
            fs::read_to_string(stderr_path).map_err(|e| AutocasError::FileReadError {
                path: stderr_path.display().to_string(),
                source: e,
            })?,
        )
    } else {
        None
    };

    let output_path = job_dir.join(job::OUTPUT_FILE);
    let mut outputs = Vec::new();
    let status = job::parse_output(
        &retrieved,
        stderr.as_deref(),
        || {
            fs::read_to_string(&output_path).map_err(|e| AutocasError::FileReadError {
                path: output_path.display().to_string(),
                source: e,
            })
        },
        &mut outputs,
    );

    Ok(JobOutcome { outputs, status })
}

/// 列出作业目录中的文件名
fn list_retrieved(job_dir: &Path) -> Result<Vec<String>> {
    let names = fs::read_dir(job_dir)
        .map_err(|e| AutocasError::FileReadError {
            path: job_dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    Ok(names)
}

/// 打印已提交的输出和终止状态
pub fn report(outcome: &JobOutcome) -> Result<()> {
    if !outcome.outputs.is_empty() {
        let rows: Vec<OutputRow> = outcome
            .outputs
            .iter()
            .map(|o| OutputRow {
                name: o.name().to_string(),
                value: o.to_string(),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    match outcome.status {
        Ok(()) => {
            if let Some(result) = outcome.result() {
                output::print_done(&format!(
                    "Final active space {} with energy {:.10}",
                    result.cas_label(),
                    result.energy
                ));
            }
            Ok(())
        }
        Err(status) => Err(status.into()),
    }
}
