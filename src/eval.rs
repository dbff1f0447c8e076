//! Evaluation and IR emission in a single postorder walk.
//!
//! Operands are computed before the operation that uses them: a child
//! operation emits its own instruction inside the recursive call, then
//! contributes its destination temporary as an operand name. Literal
//! children contribute their decimal text instead, so every line reads
//! `dest = operand op operand` with both operands already bound.

use log::trace;

use crate::error::{CompileError, CompileResult};
use crate::parser::{AstNode, BinaryOp};

/// Evaluate the tree, appending one instruction per operation to `ir`.
///
/// `source` is the expression text, used only for diagnostics. Addition,
/// subtraction and multiplication wrap on `i64` overflow; division
/// truncates toward zero, and a zero divisor (or `i64::MIN / -1`) is
/// reported as an arithmetic error rather than left to panic.
pub fn evaluate(node: &AstNode, source: &str, ir: &mut String) -> CompileResult<i64> {
  match node {
    AstNode::Num { value } => Ok(*value),
    AstNode::Binary {
      op,
      dest,
      loc,
      lhs,
      rhs,
    } => {
      let left = evaluate(lhs, source, ir)?;
      let right = evaluate(rhs, source, ir)?;

      let result = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => {
          if right == 0 {
            return Err(CompileError::arithmetic(source, *loc, "division by zero"));
          }
          left
            .checked_div(right)
            .ok_or_else(|| CompileError::arithmetic(source, *loc, "division overflow"))?
        }
      };

      trace!("{dest} <- {left} {} {right}", op.symbol());
      ir.push_str(&format!(
        "{dest} = {} {} {}\n",
        lhs.operand_name(),
        op.symbol(),
        rhs.operand_name()
      ));
      Ok(result)
    }
  }
}
