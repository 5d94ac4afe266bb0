//! # XYZ 坐标文件读写
//!
//! 读取标准 XYZ 分子结构文件，并生成 AutoCAS 使用的坐标文件。
//!
//! ## XYZ 格式说明
//! ```text
//! 2                      # 原子数
//! AutoCAS Structure      # 标题行
//! N 0.0 0.0 0.0          # 标签 x y z
//! N 3.0 0.0 0.0
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs`, `job/inputs.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{AutocasError, Result};
use crate::models::{Atom, Molecule};
use std::fs;
use std::path::Path;

/// 解析 XYZ 文件
pub fn parse_xyz_file(path: &Path) -> Result<Molecule> {
    let content = fs::read_to_string(path).map_err(|e| AutocasError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xyz_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 XYZ 格式
///
/// 坐标行只取前四列，多余的列（如电荷、速度）被忽略。
pub fn parse_xyz_content(content: &str, source_name: &str) -> Result<Molecule> {
    let parse_error = |reason: String| AutocasError::ParseError {
        format: "xyz".to_string(),
        path: source_name.to_string(),
        reason,
    };

    let mut lines = content.lines();

    let count_line = lines
        .next()
        .ok_or_else(|| parse_error("Empty file".to_string()))?;
    let n_atoms: usize = count_line
        .trim()
        .parse()
        .map_err(|_| parse_error(format!("Invalid atom count: '{}'", count_line.trim())))?;

    // 标题行可以为空，但必须存在
    if lines.next().is_none() && n_atoms > 0 {
        return Err(parse_error("Missing title line".to_string()));
    }

    let mut atoms = Vec::with_capacity(n_atoms);
    for (i, line) in lines.filter(|l| !l.trim().is_empty()).take(n_atoms).enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_error(format!(
                "Atom line {} has {} columns, expected at least 4",
                i + 1,
                parts.len()
            )));
        }

        let mut position = [0.0; 3];
        for (k, value) in parts[1..4].iter().enumerate() {
            position[k] = value.parse().map_err(|_| {
                parse_error(format!("Invalid coordinate '{}' on atom line {}", value, i + 1))
            })?;
        }

        atoms.push(Atom::new(parts[0], position));
    }

    if atoms.len() != n_atoms {
        return Err(parse_error(format!(
            "Expected {} atoms, found {}",
            n_atoms,
            atoms.len()
        )));
    }

    Ok(Molecule::new(atoms))
}

/// 生成坐标文件内容
///
/// 第一行原子数，第二行固定标题，随后每个原子一行 `标签 x y z`，
/// 单空格分隔，不对齐也不截断精度。
pub fn to_xyz_string(molecule: &Molecule, title: &str) -> String {
    let mut result = format!("{}\n{}\n", molecule.len(), title);

    for atom in &molecule.atoms {
        let [x, y, z] = atom.position;
        result.push_str(&format!(
            "{} {} {} {}\n",
            atom.label,
            format_float(x),
            format_float(y),
            format_float(z)
        ));
    }

    result
}

/// 浮点数的默认文本形式
///
/// 最短往返表示；整数值保留 `.0`；科学计数法的指数带符号且至少两位
/// （`1e-05`, `1.5e+16`）。
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    // Debug 输出已是最短往返表示，且在 [1e-4, 1e16) 之外使用科学计数法
    let repr = format!("{:?}", value);

    match repr.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => repr,
        },
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xyz() {
        let content = r#"3
water
O 0.000000 0.000000 0.117300
H 0.000000 0.757200 -0.469200
H 0.000000 -0.757200 -0.469200
"#;
        let mol = parse_xyz_content(content, "water.xyz").unwrap();
        assert_eq!(mol.len(), 3);
        assert_eq!(mol.atoms[0].label, "O");
        assert!((mol.atoms[1].position[1] - 0.7572).abs() < 1e-10);
        assert!((mol.atoms[2].position[2] + 0.4692).abs() < 1e-10);
    }

    #[test]
    fn test_parse_xyz_extra_columns() {
        let content = "1\n\nFe 1.0 2.0 3.0 0.5\n";
        let mol = parse_xyz_content(content, "fe.xyz").unwrap();
        assert_eq!(mol.atoms[0].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_xyz_count_mismatch() {
        let content = "3\ncomment\nN 0.0 0.0 0.0\nN 1.1 0.0 0.0\n";
        let err = parse_xyz_content(content, "n2.xyz").unwrap_err();
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_parse_xyz_bad_coordinate() {
        let content = "1\ncomment\nN 0.0 abc 0.0\n";
        assert!(parse_xyz_content(content, "bad.xyz").is_err());
    }

    #[test]
    fn test_to_xyz_string() {
        let mol = Molecule::new(vec![
            Atom::new("N", [0.0, 0.0, 0.0]),
            Atom::new("N", [3.0, 0.0, 0.0]),
        ]);
        let xyz = to_xyz_string(&mol, "AutoCAS Structure");
        assert_eq!(
            xyz,
            "2\nAutoCAS Structure\nN 0.0 0.0 0.0\nN 3.0 0.0 0.0\n"
        );
    }

    #[test]
    fn test_xyz_line_count() {
        let mol = Molecule::new(vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [1.128, 0.0, 0.0]),
            Atom::new("H", [-0.5, 0.9, 0.0]),
            Atom::new("H", [-0.5, -0.9, 0.0]),
        ]);
        let xyz = to_xyz_string(&mol, "AutoCAS Structure");
        let lines: Vec<&str> = xyz.lines().collect();
        assert_eq!(lines.len(), mol.len() + 2);
        assert_eq!(lines[0], "4");
        assert_eq!(lines[2], "C 0.0 0.0 0.0");
        assert_eq!(lines[3], "O 1.128 0.0 0.0");
    }

    #[test]
    fn test_written_xyz_reads_back() {
        let mol = Molecule::new(vec![
            Atom::new("Cu", [0.1, -2.25, 1e-7]),
            Atom::new("Cl", [2.05, 0.0, 0.0]),
        ]);
        let xyz = to_xyz_string(&mol, "AutoCAS Structure");
        let back = parse_xyz_content(&xyz, "roundtrip").unwrap();
        assert_eq!(back, mol);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-1.25), "-1.25");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }
}
