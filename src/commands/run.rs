//! # run 命令实现
//!
//! 在本地执行一次 AutoCAS：生成输入 → 运行 `<exec> -y autocas.yaml` →
//! 解析输出。只运行一次，不重试，也不排队。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `commands/prepare.rs`, `commands/parse.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::run::RunArgs;
use crate::commands::{parse, prepare};
use crate::error::{AutocasError, Result};
use crate::job::{self, JobInputs};
use crate::utils::{output, progress};

use std::fs::File;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Running AutoCAS");

    let params = prepare::resolve_params(&args.params)?;
    let molecule = prepare::read_molecule(&args.xyz)?;
    let inputs = prepare::prepare_job_dir(&params, &molecule, &args.job_dir)?;

    let status = run_code(&args.exec, &inputs, &args.job_dir)?;
    if status.success() {
        output::print_success(&format!("{} finished", args.exec));
    } else {
        output::print_warning(&format!("{} exited with {}", args.exec, status));
    }

    output::print_separator();
    let outcome = parse::parse_job_dir(&args.job_dir, None)?;
    parse::report(&outcome)
}

/// 在作业目录中运行程序，标准输出写入 `stdout_name`，标准错误写入 `autocas.err`
pub fn run_code(exec: &str, inputs: &JobInputs, job_dir: &Path) -> Result<ExitStatus> {
    let stdout_path = job_dir.join(&inputs.stdout_name);
    let stderr_path = job_dir.join(job::STDERR_FILE);

    let stdout = File::create(&stdout_path).map_err(|e| AutocasError::FileWriteError {
        path: stdout_path.display().to_string(),
        source: e,
    })?;
    let stderr = File::create(&stderr_path).map_err(|e| AutocasError::FileWriteError {
        path: stderr_path.display().to_string(),
        source: e,
    })?;

    let spinner = progress::create_spinner(&format!(
        "{} {}",
        exec,
        inputs.cmdline_params.join(" ")
    ));

    let result = Command::new(exec)
        .args(&inputs.cmdline_params)
        .current_dir(job_dir)
        .stdout(stdout)
        .stderr(stderr)
        .status();

    spinner.finish_and_clear();

    result.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AutocasError::CommandNotFound {
            command: exec.to_string(),
        },
        _ => AutocasError::CommandFailed {
            command: exec.to_string(),
            stderr: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, CalculationParams, Molecule};

    fn inputs() -> JobInputs {
        job::build_inputs(
            &CalculationParams::default(),
            &Molecule::new(vec![Atom::new("H", [0.0, 0.0, 0.0])]),
        )
    }

    #[test]
    fn test_missing_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_code("autocas-definitely-not-installed", &inputs(), tmp.path()).unwrap_err();
        assert!(matches!(err, AutocasError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout_and_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let inputs = inputs();
        job::write_inputs(&inputs, tmp.path()).unwrap();

        // `echo -y autocas.yaml` 的输出落在 autocas.out
        let status = run_code("echo", &inputs, tmp.path()).unwrap();
        assert!(status.success());

        let stdout = std::fs::read_to_string(tmp.path().join("autocas.out")).unwrap();
        assert_eq!(stdout.trim(), "-y autocas.yaml");
        assert!(tmp.path().join("autocas.err").exists());

        let outcome = parse::parse_job_dir(tmp.path(), None).unwrap();
        assert_eq!(outcome.status, Err(job::ExitStatus::ParserFailed));
    }
}
