//! # AutoCAS 解析结果数据模型
//!
//! 从 AutoCAS 输出报告中提取的活性空间与能量。
//!
//! ## 依赖关系
//! - 被 `job/parse.rs` 产生
//! - 被 `commands/parse.rs`, `commands/collect.rs` 使用

/// 单个命名输出，解析器每完成一步就提交一个
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedOutput {
    NActiveElectrons(u64),
    NActiveOrbitals(u64),
    Energy(f64),
    ActiveOrbitals(Vec<u64>),
}

impl ParsedOutput {
    /// 输出名称
    pub fn name(&self) -> &'static str {
        match self {
            ParsedOutput::NActiveElectrons(_) => "n_active_electrons",
            ParsedOutput::NActiveOrbitals(_) => "n_active_orbitals",
            ParsedOutput::Energy(_) => "energy",
            ParsedOutput::ActiveOrbitals(_) => "active_orbitals",
        }
    }
}

impl std::fmt::Display for ParsedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedOutput::NActiveElectrons(n) | ParsedOutput::NActiveOrbitals(n) => {
                write!(f, "{}", n)
            }
            ParsedOutput::Energy(e) => write!(f, "{:.10}", e),
            ParsedOutput::ActiveOrbitals(indices) => {
                write!(f, "{}", format_indices(indices))
            }
        }
    }
}

/// 完整解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResult {
    /// 活性空间电子数
    pub n_active_electrons: u64,

    /// 活性空间轨道数
    pub n_active_orbitals: u64,

    /// 活性轨道编号（保持输出中的顺序）
    pub active_orbitals: Vec<u64>,

    /// 最终能量 (Hartree)
    pub energy: f64,
}

impl ParsedResult {
    /// 由已提交的输出组装完整结果，任一字段缺失则返回 None
    pub fn from_outputs(outputs: &[ParsedOutput]) -> Option<Self> {
        let mut electrons = None;
        let mut orbitals = None;
        let mut energy = None;
        let mut indices = None;

        for output in outputs {
            match output {
                ParsedOutput::NActiveElectrons(n) => electrons = Some(*n),
                ParsedOutput::NActiveOrbitals(n) => orbitals = Some(*n),
                ParsedOutput::Energy(e) => energy = Some(*e),
                ParsedOutput::ActiveOrbitals(v) => indices = Some(v.clone()),
            }
        }

        Some(ParsedResult {
            n_active_electrons: electrons?,
            n_active_orbitals: orbitals?,
            active_orbitals: indices?,
            energy: energy?,
        })
    }

    /// CAS(e, o) 记号
    pub fn cas_label(&self) -> String {
        format!("CAS({}, {})", self.n_active_electrons, self.n_active_orbitals)
    }
}

/// 轨道编号格式化为 `[1, 2, 3]`
pub fn format_indices(indices: &[u64]) -> String {
    let items: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}
