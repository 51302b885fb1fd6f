//! Job files for the `matrix` binary: which operation to run and on what.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use matrix_engine::Matrix;

/// Operations a job can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Equals,
    Add,
    Subtract,
    Scale,
    Multiply,
    Transpose,
    Complements,
    #[default]
    Determinant,
    Inverse,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Equals,
        Operation::Add,
        Operation::Subtract,
        Operation::Scale,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Complements,
        Operation::Determinant,
        Operation::Inverse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Equals => "equals",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Scale => "scale",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
            Operation::Complements => "complements",
            Operation::Determinant => "determinant",
            Operation::Inverse => "inverse",
        }
    }

    /// Whether the operation reads the second operand `b`.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Equals | Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
                format!(
                    "Invalid operation: {}. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A single matrix job as read from JSON. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub operation: Operation,
    pub a: Vec<Vec<f64>>,
    pub b: Option<Vec<Vec<f64>>>,
    pub scalar: f64,
    pub precision: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            a: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            b: None,
            scalar: 1.0,
            precision: 6,
        }
    }
}

/// Load a job from a JSON file.
pub fn load_job_config<P: AsRef<Path>>(path: P) -> Result<JobConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read job: {}", path.as_ref().display()))?;
    let config: JobConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job: {}", path.as_ref().display()))?;
    Ok(config)
}

/// What a job produced.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutput {
    Matrix(Matrix),
    Scalar(f64),
    Bool(bool),
}

impl JobOutput {
    /// Text printed by the binary; matrices are followed by a `kind:` line.
    pub fn render(&self, precision: usize) -> String {
        match self {
            JobOutput::Matrix(m) => format!("{:.*}\nkind: {}", precision, m, m.kind()),
            JobOutput::Scalar(v) => format!("{:.*}", precision, v),
            JobOutput::Bool(b) => b.to_string(),
        }
    }
}

/// Run the operation described by `config`.
pub fn run_job(config: &JobConfig) -> Result<JobOutput> {
    let a = Matrix::from_rows(config.a.clone()).context("Operand `a` is not a matrix")?;
    let b = if config.operation.is_binary() {
        Some(second_operand(config)?)
    } else {
        if config.b.is_some() {
            log::warn!("Operand `b` is ignored by `{}`", config.operation);
        }
        None
    };
    log::debug!(
        "Running `{}` on a {}x{} operand",
        config.operation,
        a.nrows(),
        a.ncols()
    );

    let output = match (config.operation, b.as_ref()) {
        (Operation::Equals, Some(b)) => JobOutput::Bool(a.equals(b)),
        (Operation::Add, Some(b)) => JobOutput::Matrix(a.add(b)?),
        (Operation::Subtract, Some(b)) => JobOutput::Matrix(a.subtract(b)?),
        (Operation::Multiply, Some(b)) => JobOutput::Matrix(a.multiply(b)?),
        (Operation::Scale, _) => JobOutput::Matrix(a.scale_by(config.scalar)?),
        (Operation::Transpose, _) => JobOutput::Matrix(a.transpose()?),
        (Operation::Complements, _) => JobOutput::Matrix(a.complements()?),
        (Operation::Determinant, _) => JobOutput::Scalar(a.try_determinant()?),
        (Operation::Inverse, _) => JobOutput::Matrix(a.inverse()?),
        (op, None) => bail!("Operation `{}` needs a second operand `b`", op),
    };
    Ok(output)
}

fn second_operand(config: &JobConfig) -> Result<Matrix> {
    match &config.b {
        Some(rows) => Matrix::from_rows(rows.clone()).context("Operand `b` is not a matrix"),
        None => bail!(
            "Operation `{}` needs a second operand `b`",
            config.operation
        ),
    }
}
