//! Crate root: wires together the expression pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `parser` owns all syntactic knowledge and returns an expression tree
//!   with destination temporaries already assigned.
//! - `eval` computes the numeric result and emits the three-address trace
//!   in one postorder walk.
//! - `error` centralises the caret-style diagnostics shared by the other
//!   modules.

use log::debug;

pub mod error;
pub mod eval;
pub mod parser;
pub mod temp;
pub mod tokenizer;

pub use error::{CompileError, CompileResult};

/// Outcome of running one expression through the pipeline.
#[derive(Debug)]
pub struct Evaluation {
  /// Final numeric value of the expression.
  pub value: i64,
  /// Three-address trace, one instruction per line, in emission order.
  pub ir: String,
}

/// Evaluate a source expression, collecting its three-address trace.
///
/// Each call is independent: temporary numbering restarts at `t0` and no
/// state survives between calls.
pub fn evaluate_expression(expr: &str) -> CompileResult<Evaluation> {
  let tokens = tokenizer::tokenize(expr)?;
  debug!("tokenized {} tokens", tokens.len());
  let ast = parser::parse(tokens, expr)?;
  let mut ir = String::new();
  let value = eval::evaluate(&ast, expr, &mut ir)?;
  Ok(Evaluation { value, ir })
}
