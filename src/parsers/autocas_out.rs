//! # AutoCAS 输出报告解析器
//!
//! 从 AutoCAS 标准输出中提取最终活性空间、能量和活性轨道编号。
//! 三个字段互相独立，各自用一个正则在全文中搜索第一处匹配。
//!
//! ```text
//! Final active space CAS (e, o): (4, 6)
//! Final energy: -123.456789
//! Final orbital indices: [1, 2, 3, 4, 5, 6]
//! ```
//!
//! ## 依赖关系
//! - 被 `job/parse.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static ACTIVE_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Final\s*active\s*space\s*CAS\s*\(\s*e,\s*o\s*\)\s*:\s*\(\s*(\d+),\s*(\d+)\s*\)")
        .unwrap()
});

// 小数点没有转义，数字也不做结尾锚定；AutoCAS 的输出一直按这个模式匹配
static ENERGY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Final\s*energy:\s*(-*[\d]+.[\d]+)").unwrap());

static ORBITAL_INDICES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Final\s*orbital\s*indices:\s*\[([\d,\s]+)\]").unwrap());

/// 单个字段的提取失败原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// 报告中没有该字段
    #[error("not found")]
    NotFound,
    /// 找到了字段，但捕获的文本无法转换为数值
    #[error("invalid value '{0}'")]
    Invalid(String),
}

/// 提取最终活性空间 (电子数, 轨道数)
pub fn extract_active_space(output: &str) -> Result<(u64, u64), FieldError> {
    let caps = ACTIVE_SPACE_RE
        .captures(output)
        .ok_or(FieldError::NotFound)?;

    let electrons = parse_int(&caps[1])?;
    let orbitals = parse_int(&caps[2])?;
    Ok((electrons, orbitals))
}

/// 提取最终能量
pub fn extract_energy(output: &str) -> Result<f64, FieldError> {
    let caps = ENERGY_RE.captures(output).ok_or(FieldError::NotFound)?;
    let text = &caps[1];
    text.parse()
        .map_err(|_| FieldError::Invalid(text.to_string()))
}

/// 提取活性轨道编号，保持原顺序
pub fn extract_orbital_indices(output: &str) -> Result<Vec<u64>, FieldError> {
    let caps = ORBITAL_INDICES_RE
        .captures(output)
        .ok_or(FieldError::NotFound)?;

    caps[1].split(',').map(|token| parse_int(token.trim())).collect()
}

fn parse_int(text: &str) -> Result<u64, FieldError> {
    text.parse()
        .map_err(|_| FieldError::Invalid(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
*******************************************************************************
                                   autoCAS
*******************************************************************************
Initial active space CAS(e, o): (10, 8)
Large CAS protocol: off
...
Final active space CAS (e, o): (4, 6)
Final energy: -123.456789
Final orbital indices: [1, 2, 3, 4, 5, 6]
"#;

    #[test]
    fn test_extract_all_fields() {
        assert_eq!(extract_active_space(SAMPLE), Ok((4, 6)));
        assert_eq!(extract_energy(SAMPLE), Ok(-123.456789));
        assert_eq!(extract_orbital_indices(SAMPLE), Ok(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_active_space_whitespace_and_case() {
        let text = "final   ACTIVE space cas(e,o) :(  12,14 )";
        assert_eq!(extract_active_space(text), Ok((12, 14)));
    }

    #[test]
    fn test_initial_active_space_is_not_final() {
        let text = "Initial active space CAS(e, o): (10, 8)\n";
        assert_eq!(extract_active_space(text), Err(FieldError::NotFound));
    }

    #[test]
    fn test_energy_positive_and_compact() {
        assert_eq!(extract_energy("Final energy:0.5"), Ok(0.5));
        assert_eq!(extract_energy("Final energy: 42.000 Hartree"), Ok(42.0));
    }

    #[test]
    fn test_energy_stops_at_non_digit() {
        // 指数部分不在捕获范围内
        assert_eq!(extract_energy("Final energy: -1.5e-3"), Ok(-1.5));
    }

    #[test]
    fn test_energy_unescaped_dot() {
        // `.` 可以匹配任意字符，这样的捕获无法转换为数值
        assert_eq!(
            extract_energy("Final energy: 12x34"),
            Err(FieldError::Invalid("12x34".to_string()))
        );
    }

    #[test]
    fn test_energy_requires_fraction() {
        assert_eq!(extract_energy("Final energy: -7"), Err(FieldError::NotFound));
    }

    #[test]
    fn test_orbital_indices_spacing() {
        let text = "Final orbital indices: [ 7,8 ,  9 ]";
        assert_eq!(extract_orbital_indices(text), Ok(vec![7, 8, 9]));
    }

    #[test]
    fn test_orbital_indices_trailing_comma() {
        let text = "Final orbital indices: [1, 2, ]";
        assert_eq!(
            extract_orbital_indices(text),
            Err(FieldError::Invalid(String::new()))
        );
    }

    #[test]
    fn test_counts_beyond_32_bits() {
        let text = "Final active space CAS (e, o): (4294967296, 6)";
        assert_eq!(extract_active_space(text), Ok((4_294_967_296, 6)));

        let text = "Final orbital indices: [4294967296, 4294967297]";
        assert_eq!(
            extract_orbital_indices(text),
            Ok(vec![4_294_967_296, 4_294_967_297])
        );
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::NotFound.to_string(), "not found");
        assert_eq!(
            FieldError::Invalid("12x34".to_string()).to_string(),
            "invalid value '12x34'"
        );
    }

    #[test]
    fn test_missing_fields() {
        let text = "AutoCAS terminated early\n";
        assert_eq!(extract_active_space(text), Err(FieldError::NotFound));
        assert_eq!(extract_energy(text), Err(FieldError::NotFound));
        assert_eq!(extract_orbital_indices(text), Err(FieldError::NotFound));
    }
}
