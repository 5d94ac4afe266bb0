//! # 分子结构数据模型
//!
//! 有序的原子列表（标签 + 笛卡尔坐标），原样写入坐标文件。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs` 和 `job/inputs.rs` 使用
//! - 无外部模块依赖

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 原子标签（通常是元素符号）
    pub label: String,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(label: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            label: label.into(),
            position,
        }
    }
}

/// 分子结构
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// 原子列表，顺序即输出顺序
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Molecule { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 计算化学式（按元素字母序）
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.label.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
