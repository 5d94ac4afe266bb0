//! # collect 命令实现
//!
//! 汇总一个根目录下所有 AutoCAS 作业的结果。
//!
//! ## 功能
//! - 扫描根目录的直接子目录（每个子目录一个作业）
//! - 逐个解析输出，记录终止状态
//! - 打印汇总表格，成功的结果写入 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `commands/parse.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::collect::CollectArgs;
use crate::commands::parse::{parse_job_dir, JobOutcome};
use crate::error::{AutocasError, Result};
use crate::models::result::format_indices;
use crate::utils::{output, progress};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};
use walkdir::WalkDir;

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Job")]
    job: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "CAS(e, o)")]
    cas: String,
    #[tabled(rename = "Energy (Eh)")]
    energy: String,
}

/// CSV 输出行
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    job: &'a str,
    n_active_electrons: u64,
    n_active_orbitals: u64,
    energy: f64,
    active_orbitals: String,
}

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Collecting AutoCAS Results");

    if !args.root.is_dir() {
        return Err(AutocasError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let job_dirs = find_job_dirs(&args.root);
    output::print_info(&format!("Scanning {} job directories...", job_dirs.len()));

    let pb = progress::create_progress_bar(job_dirs.len() as u64, "Parsing");
    let mut outcomes: Vec<(String, JobOutcome)> = Vec::new();

    for dir in &job_dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| dir.display().to_string());

        // 解析器的日志直接打印，先挂起进度条
        match pb.suspend(|| parse_job_dir(dir, None)) {
            Ok(outcome) => outcomes.push((name, outcome)),
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!("Failed to parse {}: {}", name, e));
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if outcomes.is_empty() {
        output::print_warning("No AutoCAS job directories found.");
        return Ok(());
    }

    let rows: Vec<SummaryRow> = outcomes
        .iter()
        .map(|(name, outcome)| summary_row(name, outcome))
        .collect();
    println!("{}", Table::new(&rows));

    let success = save_results_csv(&outcomes, &args.output)?;
    output::print_done(&format!(
        "Parsed {} jobs, {} succeeded; results saved to '{}'",
        outcomes.len(),
        success,
        args.output.display()
    ));

    Ok(())
}

/// 根目录下的作业子目录（按名称排序）
fn find_job_dirs(root: &Path) -> Vec<std::path::PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect()
}

fn summary_row(name: &str, outcome: &JobOutcome) -> SummaryRow {
    match (outcome.status, outcome.result()) {
        (Ok(()), Some(result)) => SummaryRow {
            job: name.to_string(),
            status: "OK".to_string(),
            cas: result.cas_label(),
            energy: format!("{:.8}", result.energy),
        },
        (Err(status), _) => SummaryRow {
            job: name.to_string(),
            status: format!("{} ({})", status.name(), status.code()),
            cas: "-".to_string(),
            energy: "-".to_string(),
        },
        (Ok(()), None) => SummaryRow {
            job: name.to_string(),
            status: "INCOMPLETE".to_string(),
            cas: "-".to_string(),
            energy: "-".to_string(),
        },
    }
}

/// 保存成功的结果到 CSV，返回写入的行数
fn save_results_csv(outcomes: &[(String, JobOutcome)], output_path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut written = 0;
    for (name, outcome) in outcomes {
        if let Some(result) = outcome.result() {
            wtr.serialize(CsvRow {
                job: name,
                n_active_electrons: result.n_active_electrons,
                n_active_orbitals: result.n_active_orbitals,
                energy: result.energy,
                active_orbitals: format_indices(&result.active_orbitals),
            })?;
            written += 1;
        }
    }

    wtr.flush().map_err(|e| AutocasError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(written)
}
