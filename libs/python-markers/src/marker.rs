//! Parsed markers and their evaluation

use std::fmt;
use std::str::FromStr;

use pyreq_version::{Operator, RuntimeVersion, VersionSpec};

use crate::ast::{MarkerExpr, MarkerOp, MarkerVariable, Operand};
use crate::environment::MarkerEnvironment;
use crate::error::{Error, Result};
use crate::parser::parse_marker;

/// An environment marker such as `python_version >= "3.5" and os_name == "posix"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    expr: MarkerExpr,
}

impl Marker {
    pub fn expr(&self) -> &MarkerExpr {
        &self.expr
    }

    /// Evaluate the marker. `and` / `or` short-circuit left to right, so an
    /// error in a branch that is never reached is not reported.
    pub fn evaluate(&self, env: &MarkerEnvironment) -> Result<bool> {
        evaluate_expr(&self.expr, env)
    }
}

impl FromStr for Marker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            expr: parse_marker(s)?,
        })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

fn evaluate_expr(expr: &MarkerExpr, env: &MarkerEnvironment) -> Result<bool> {
    match expr {
        MarkerExpr::And(lhs, rhs) => Ok(evaluate_expr(lhs, env)? && evaluate_expr(rhs, env)?),
        MarkerExpr::Or(lhs, rhs) => Ok(evaluate_expr(lhs, env)? || evaluate_expr(rhs, env)?),
        MarkerExpr::Compare { lhs, op, rhs } => evaluate_compare(lhs, op, rhs, env),
    }
}

fn evaluate_compare(
    lhs: &Operand,
    op: &MarkerOp,
    rhs: &Operand,
    env: &MarkerEnvironment,
) -> Result<bool> {
    for operand in [lhs, rhs] {
        if let Operand::Variable(MarkerVariable::Other(name)) = operand {
            tracing::trace!(variable = %name, "Unsupported marker variable, treating as satisfied");
            return Ok(true);
        }
    }

    match (lhs, op, rhs) {
        (Operand::Variable(var), MarkerOp::Compare(op), Operand::Literal(value))
            if var.is_version() =>
        {
            compare_version(version_of(var, env), *op, value)
        }
        (Operand::Literal(value), MarkerOp::Compare(op), Operand::Variable(var))
            if var.is_version() =>
        {
            compare_version(version_of(var, env), op.swapped(), value)
        }
        (Operand::Variable(var), MarkerOp::In | MarkerOp::NotIn, Operand::Literal(list))
            if var.is_version() =>
        {
            let version = version_of(var, env).to_string();
            let found = list
                .split(|c: char| c.is_whitespace() || c == ',')
                .any(|item| item == version);
            Ok(found == matches!(op, MarkerOp::In))
        }
        _ => {
            let lhs = string_of(lhs, env);
            let rhs = string_of(rhs, env);
            Ok(match op {
                MarkerOp::Compare(op) => op.matches(lhs.as_str().cmp(rhs.as_str())),
                MarkerOp::In => rhs.contains(lhs.as_str()),
                MarkerOp::NotIn => !rhs.contains(lhs.as_str()),
            })
        }
    }
}

fn compare_version(runtime: &RuntimeVersion, op: Operator, spec: &str) -> Result<bool> {
    let spec: VersionSpec = spec.parse()?;
    Ok(spec.compare(runtime, op)?)
}

fn version_of<'a>(var: &MarkerVariable, env: &'a MarkerEnvironment) -> &'a RuntimeVersion {
    match var {
        MarkerVariable::PythonVersion => &env.python_version,
        _ => &env.python_full_version,
    }
}

fn string_of(operand: &Operand, env: &MarkerEnvironment) -> String {
    match operand {
        Operand::Literal(value) => value.clone(),
        Operand::Variable(var) => match var {
            MarkerVariable::PythonVersion => env.python_version.to_string(),
            MarkerVariable::PythonFullVersion => env.python_full_version.to_string(),
            MarkerVariable::SysPlatform => env.sys_platform.clone(),
            MarkerVariable::PlatformSystem => env.platform_system.clone(),
            MarkerVariable::OsName => env.os_name.clone(),
            MarkerVariable::ImplementationName => env.implementation_name.clone(),
            MarkerVariable::Other(_) => String::new(),
        },
    }
}
