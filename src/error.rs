//! Shared diagnostics used across the pipeline.
//!
//! Errors are rendered in a caret style: the offending expression is echoed
//! back with a marker pointing at the byte where the problem was detected.
//! The two variants mirror the failure taxonomy of the pipeline: malformed
//! input rejected up front, and arithmetic faults found while evaluating a
//! well-formed tree.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
pub enum CompileError {
  /// The input never produced a usable tree: bad byte, unexpected token,
  /// unbalanced parentheses.
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  Syntax {
    expr_line: String,
    marker: String,
    message: String,
  },

  /// The tree was fine but evaluating it was not (division by zero).
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  Arithmetic {
    expr_line: String,
    marker: String,
    message: String,
  },
}

impl CompileError {
  /// Syntax diagnostic anchored at a byte offset in the source.
  pub fn syntax(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let (expr_line, marker) = render_location(expr, loc);
    Self::Syntax {
      expr_line,
      marker,
      message: message.into(),
    }
  }

  /// Arithmetic diagnostic anchored at the operator that faulted.
  pub fn arithmetic(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let (expr_line, marker) = render_location(expr, loc);
    Self::Arithmetic {
      expr_line,
      marker,
      message: message.into(),
    }
  }
}

fn render_location(expr: &str, loc: usize) -> (String, String) {
  let expr_line = format!("'{expr}'");
  let safe_loc = loc.min(expr.len());
  let char_offset = expr[..safe_loc].chars().count() + 1; // account for opening quote
  let marker = format!("{}^", " ".repeat(char_offset));
  (expr_line, marker)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caret_points_at_offending_byte() {
    let err = CompileError::syntax("1 + @", 4, "invalid token: '@'");
    assert_eq!(err.to_string(), "'1 + @'\n     ^ invalid token: '@'");
  }

  #[test]
  fn location_is_clamped_to_input_length() {
    let err = CompileError::syntax("12", 99, "unexpected end of input");
    assert!(err.to_string().ends_with("^ unexpected end of input"));
  }
}
