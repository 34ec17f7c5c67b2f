use std::fmt;

use pyreq_version::Operator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerExpr {
    And(Box<MarkerExpr>, Box<MarkerExpr>),
    Or(Box<MarkerExpr>, Box<MarkerExpr>),
    Compare {
        lhs: Operand,
        op: MarkerOp,
        rhs: Operand,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Variable(MarkerVariable),
    /// A quoted string (e.g. `'3.5'`, `"linux"`).
    Literal(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerOp {
    Compare(Operator),
    In,
    NotIn,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerVariable {
    PythonVersion,
    PythonFullVersion,
    SysPlatform,
    PlatformSystem,
    OsName,
    ImplementationName,
    /// Any other name (e.g. `extra`, `platform_machine`); always satisfied.
    Other(String),
}

impl MarkerVariable {
    pub fn from_name(name: &str) -> Self {
        match name {
            "python_version" => MarkerVariable::PythonVersion,
            "python_full_version" => MarkerVariable::PythonFullVersion,
            "sys_platform" | "sys.platform" => MarkerVariable::SysPlatform,
            "platform_system" | "platform.system" => MarkerVariable::PlatformSystem,
            "os_name" | "os.name" => MarkerVariable::OsName,
            "implementation_name" => MarkerVariable::ImplementationName,
            other => MarkerVariable::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MarkerVariable::PythonVersion => "python_version",
            MarkerVariable::PythonFullVersion => "python_full_version",
            MarkerVariable::SysPlatform => "sys_platform",
            MarkerVariable::PlatformSystem => "platform_system",
            MarkerVariable::OsName => "os_name",
            MarkerVariable::ImplementationName => "implementation_name",
            MarkerVariable::Other(name) => name,
        }
    }

    pub fn is_version(&self) -> bool {
        matches!(
            self,
            MarkerVariable::PythonVersion | MarkerVariable::PythonFullVersion
        )
    }
}

impl fmt::Display for MarkerExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerExpr::Or(lhs, rhs) => write!(f, "{} or {}", lhs, rhs),
            MarkerExpr::And(lhs, rhs) => {
                write_and_operand(f, lhs)?;
                f.write_str(" and ")?;
                write_and_operand(f, rhs)
            }
            MarkerExpr::Compare { lhs, op, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

fn write_and_operand(f: &mut fmt::Formatter<'_>, expr: &MarkerExpr) -> fmt::Result {
    match expr {
        MarkerExpr::Or(..) => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Variable(var) => f.write_str(var.name()),
            Operand::Literal(value) if value.contains('"') => write!(f, "'{}'", value),
            Operand::Literal(value) => write!(f, "\"{}\"", value),
        }
    }
}

impl fmt::Display for MarkerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerOp::Compare(op) => write!(f, "{}", op),
            MarkerOp::In => f.write_str("in"),
            MarkerOp::NotIn => f.write_str("not in"),
        }
    }
}
