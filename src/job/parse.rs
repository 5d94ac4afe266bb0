//! # AutoCAS 结果解释
//!
//! 依次检查：输出文件是否取回 → 标准错误是否报错 → 活性空间 → 能量 → 轨道编号。
//! 任何一步失败立即返回对应的终止状态。
//!
//! 每一步成功后立刻把输出交给 `OutputSink`，所以后面的步骤失败时，
//! 前面已经提交的输出不会撤回。
//!
//! ## 依赖关系
//! - 被 `commands/parse.rs`, `commands/run.rs`, `commands/collect.rs` 使用
//! - 使用 `parsers/autocas_out.rs`, `utils/output.rs`

use super::{ExitStatus, OUTPUT_FILE};
use crate::error::Result;
use crate::models::{ParsedOutput, ParsedResult};
use crate::parsers::autocas_out::{extract_active_space, extract_energy, extract_orbital_indices};
use crate::utils::output;

/// 接收已提交输出的一方（宿主的结果存储）
pub trait OutputSink {
    fn emit(&mut self, output: ParsedOutput);
}

impl OutputSink for Vec<ParsedOutput> {
    fn emit(&mut self, output: ParsedOutput) {
        self.push(output);
    }
}

/// 解释一次计算的输出
///
/// - `retrieved`: 取回的文件名列表
/// - `stderr`: 调度器/进程的标准错误内容
/// - `read_output`: 读取输出报告，只在前两项检查通过后调用
pub fn parse_output<S, F>(
    retrieved: &[S],
    stderr: Option<&str>,
    read_output: F,
    sink: &mut impl OutputSink,
) -> std::result::Result<(), ExitStatus>
where
    S: AsRef<str>,
    F: FnOnce() -> Result<String>,
{
    if !retrieved.iter().any(|name| name.as_ref() == OUTPUT_FILE) {
        let found: Vec<&str> = retrieved.iter().map(|n| n.as_ref()).collect();
        output::print_error(&format!(
            "Found files {:?}, expected to find ['{}']",
            found, OUTPUT_FILE
        ));
        return Err(ExitStatus::MissingOutputFile);
    }

    if let Some(stderr) = stderr {
        if !stderr.is_empty() && stderr.to_lowercase().contains("error") {
            output::print_error(&format!(
                "Error(s) occurred during execution:\n{}",
                stderr
            ));
            return Err(ExitStatus::CalculationFailed);
        }
    }

    let text = match read_output() {
        Ok(text) => text,
        Err(e) => {
            output::print_error(&format!("Could not read {}: {}", OUTPUT_FILE, e));
            return Err(ExitStatus::MissingOutputFile);
        }
    };

    match extract_active_space(&text) {
        Ok((electrons, orbitals)) => {
            sink.emit(ParsedOutput::NActiveElectrons(electrons));
            sink.emit(ParsedOutput::NActiveOrbitals(orbitals));
        }
        Err(e) => {
            output::print_error(&format!(
                "Could not find active space in autocas output file ({})",
                e
            ));
            return Err(ExitStatus::ParserFailed);
        }
    }

    match extract_energy(&text) {
        Ok(energy) => sink.emit(ParsedOutput::Energy(energy)),
        Err(e) => {
            output::print_error(&format!(
                "Could not find energy in autocas output file ({})",
                e
            ));
            return Err(ExitStatus::ParserFailed);
        }
    }

    match extract_orbital_indices(&text) {
        Ok(indices) => sink.emit(ParsedOutput::ActiveOrbitals(indices)),
        Err(e) => {
            output::print_error(&format!(
                "Could not find orbital indices in autocas output file ({})",
                e
            ));
            return Err(ExitStatus::ParserFailed);
        }
    }

    Ok(())
}

/// 解释输出并汇总为完整结果
pub fn extract_result<S: AsRef<str>>(
    retrieved: &[S],
    stderr: Option<&str>,
    output_text: &str,
) -> std::result::Result<ParsedResult, ExitStatus> {
    let mut outputs: Vec<ParsedOutput> = Vec::new();
    parse_output(
        retrieved,
        stderr,
        || Ok(output_text.to_string()),
        &mut outputs,
    )?;

    ParsedResult::from_outputs(&outputs).ok_or(ExitStatus::ParserFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocasError;

    const GOOD_OUTPUT: &str = r#"
Final active space CAS (e, o): (4, 6)
Final energy: -123.456789
Final orbital indices: [1, 2, 3, 4, 5, 6]
"#;

    fn retrieved() -> Vec<String> {
        vec!["autocas.out".to_string(), "_scheduler-stdout.txt".to_string()]
    }

    #[test]
    fn test_extract_full_result() {
        let result = extract_result(&retrieved(), None, GOOD_OUTPUT).unwrap();
        assert_eq!(result.n_active_electrons, 4);
        assert_eq!(result.n_active_orbitals, 6);
        assert!((result.energy - (-123.456789)).abs() < 1e-12);
        assert_eq!(result.active_orbitals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_outputs_emitted_in_order() {
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        parse_output(&retrieved(), Some(""), || Ok(GOOD_OUTPUT.to_string()), &mut outputs)
            .unwrap();
        let names: Vec<&str> = outputs.iter().map(|o| o.name()).collect();
        assert_eq!(
            names,
            vec!["n_active_electrons", "n_active_orbitals", "energy", "active_orbitals"]
        );
    }

    #[test]
    fn test_missing_energy_keeps_earlier_outputs() {
        let text = "Final active space CAS (e, o): (4, 6)\nFinal orbital indices: [1, 2]\n";
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        let status = parse_output(&retrieved(), None, || Ok(text.to_string()), &mut outputs);

        assert_eq!(status, Err(ExitStatus::ParserFailed));
        assert_eq!(
            outputs,
            vec![
                ParsedOutput::NActiveElectrons(4),
                ParsedOutput::NActiveOrbitals(6)
            ]
        );
        assert!(!outputs.iter().any(|o| o.name() == "energy"));
    }

    #[test]
    fn test_empty_listing_is_missing_output_before_reading() {
        let empty: Vec<String> = Vec::new();
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        let status = parse_output(
            &empty,
            Some("Error: segmentation fault"),
            || -> Result<String> { panic!("output must not be read") },
            &mut outputs,
        );
        assert_eq!(status, Err(ExitStatus::MissingOutputFile));
        assert!(outputs.is_empty());
    }

    #[test]
    fn test_stderr_error_fails_regardless_of_body() {
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        let status = parse_output(
            &retrieved(),
            Some("Error: segmentation fault"),
            || -> Result<String> { panic!("output must not be read") },
            &mut outputs,
        );
        assert_eq!(status, Err(ExitStatus::CalculationFailed));
        assert!(outputs.is_empty());
    }

    #[test]
    fn test_stderr_without_error_is_ignored() {
        let stderr = "WARNING: OMP_NUM_THREADS not set\n";
        assert!(extract_result(&retrieved(), Some(stderr), GOOD_OUTPUT).is_ok());
    }

    #[test]
    fn test_stderr_match_is_case_insensitive() {
        assert_eq!(
            extract_result(&retrieved(), Some("FATAL ERROR in SCF"), GOOD_OUTPUT),
            Err(ExitStatus::CalculationFailed)
        );
    }

    #[test]
    fn test_missing_active_space() {
        let text = "Final energy: -1.0\nFinal orbital indices: [1]\n";
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        let status = parse_output(&retrieved(), None, || Ok(text.to_string()), &mut outputs);
        assert_eq!(status, Err(ExitStatus::ParserFailed));
        assert!(outputs.is_empty());
    }

    #[test]
    fn test_bad_orbital_token_is_parser_failure() {
        let text = GOOD_OUTPUT.replace("[1, 2, 3, 4, 5, 6]", "[1, 2 3]");
        assert_eq!(
            extract_result(&retrieved(), None, &text),
            Err(ExitStatus::ParserFailed)
        );
    }

    #[test]
    fn test_unreadable_output() {
        let mut outputs: Vec<ParsedOutput> = Vec::new();
        let status = parse_output(
            &retrieved(),
            None,
            || Err(AutocasError::FileNotFound { path: "autocas.out".to_string() }),
            &mut outputs,
        );
        assert_eq!(status, Err(ExitStatus::MissingOutputFile));
    }
}
