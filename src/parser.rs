//! Recursive-descent parser producing the expression AST.
//!
//! One function per precedence layer, lowest at the top: the additive layer
//! asks the multiplicative layer for its operands, which in turn asks the
//! primary layer. Each layer folds its operators left, so chains like
//! `a - b - c` come out left-leaning without any associativity bookkeeping.
//! Every operator recognised is assigned a destination temporary on the
//! spot, which fixes the numbering to left-to-right source order.

use crate::error::{CompileError, CompileResult};
use crate::temp::{Temp, TempAllocator};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

/// Binary operators recognised by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {
  /// Source symbol, also used when rendering instructions.
  pub fn symbol(self) -> &'static str {
    match self {
      Self::Add => "+",
      Self::Sub => "-",
      Self::Mul => "*",
      Self::Div => "/",
    }
  }
}

/// Expression tree produced by the parser.
///
/// A node is either a literal leaf or an operation with exactly two owned
/// children; no other shape is representable. Dropping the root releases
/// the whole tree.
#[derive(Debug, Clone)]
pub enum AstNode {
  Num {
    value: i64,
  },
  Binary {
    op: BinaryOp,
    /// Temporary the operation's result is bound to, assigned when the
    /// operator token is recognised.
    dest: Temp,
    /// Byte offset of the operator token, kept for evaluation diagnostics.
    loc: usize,
    lhs: Box<AstNode>,
    rhs: Box<AstNode>,
  },
}

impl AstNode {
  pub fn number(value: i64) -> Self {
    Self::Num { value }
  }

  pub fn binary(op: BinaryOp, dest: Temp, loc: usize, lhs: AstNode, rhs: AstNode) -> Self {
    Self::Binary {
      op,
      dest,
      loc,
      lhs: Box::new(lhs),
      rhs: Box::new(rhs),
    }
  }

  /// Name this node contributes when it appears as an operand in its
  /// parent's instruction: the destination temporary for operations, the
  /// decimal text of the value for literals.
  pub fn operand_name(&self) -> String {
    match self {
      Self::Num { value } => value.to_string(),
      Self::Binary { dest, .. } => dest.to_string(),
    }
  }
}

/// Parse a complete expression from the token stream.
///
/// The token cursor and the temporary allocator both live in the parser
/// context, so repeated parses are independent: each starts reading at the
/// first token and numbering at `t0`.
pub fn parse(tokens: Vec<Token>, source: &str) -> CompileResult<AstNode> {
  let mut parser = Parser {
    stream: TokenStream::new(tokens, source),
    temps: TempAllocator::new(),
  };

  if parser.stream.is_eof() {
    return Err(CompileError::syntax(source, 0, "expression is empty"));
  }

  let node = parse_expr(&mut parser)?;

  if !parser.stream.is_eof() {
    let (loc, got) = parser.stream.current_description();
    return Err(CompileError::syntax(
      source,
      loc,
      format!("unexpected token \"{got}\""),
    ));
  }

  Ok(node)
}

fn parse_expr(parser: &mut Parser) -> CompileResult<AstNode> {
  parse_add(parser)
}

/// Additive layer: `Multiplicative ( ('+' | '-') Multiplicative )*`.
fn parse_add(parser: &mut Parser) -> CompileResult<AstNode> {
  let mut node = parse_mul(parser)?;

  loop {
    let op = match parser.stream.peek_punctuator() {
      Some("+") => BinaryOp::Add,
      Some("-") => BinaryOp::Sub,
      _ => break,
    };

    // The destination is numbered the moment the operator is recognised,
    // before the right operand is parsed.
    let loc = parser.stream.current_loc();
    let dest = parser.temps.allocate();
    parser.stream.skip(op.symbol())?;
    let rhs = parse_mul(parser)?;
    node = AstNode::binary(op, dest, loc, node, rhs);
  }

  Ok(node)
}

/// Multiplicative layer: `Primary ( ('*' | '/') Primary )*`.
fn parse_mul(parser: &mut Parser) -> CompileResult<AstNode> {
  let mut node = parse_primary(parser)?;

  loop {
    let op = match parser.stream.peek_punctuator() {
      Some("*") => BinaryOp::Mul,
      Some("/") => BinaryOp::Div,
      _ => break,
    };

    let loc = parser.stream.current_loc();
    let dest = parser.temps.allocate();
    parser.stream.skip(op.symbol())?;
    let rhs = parse_primary(parser)?;
    node = AstNode::binary(op, dest, loc, node, rhs);
  }

  Ok(node)
}

/// Primary layer: `NUM | '(' Expression ')'`.
fn parse_primary(parser: &mut Parser) -> CompileResult<AstNode> {
  if parser.stream.equal("(") {
    let node = parse_expr(parser)?;
    parser.stream.skip(")")?;
    return Ok(node);
  }

  if matches!(
    parser.stream.peek().map(|token| token.kind),
    Some(TokenKind::Num)
  ) {
    let value = parser.stream.get_number()?;
    return Ok(AstNode::number(value));
  }

  let (loc, got) = parser.stream.current_description();
  Err(CompileError::syntax(
    parser.stream.source,
    loc,
    format!("number or '(' expected, but got \"{got}\""),
  ))
}

/// Parsing context: the token cursor plus the temporary allocator.
struct Parser<'a> {
  stream: TokenStream<'a>,
  temps: TempAllocator,
}

/// Lightweight cursor over the token vector.
struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the token stream; the parser will advance `pos` as it consumes input.
  fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Text of the current token if it is a punctuator.
  fn peek_punctuator(&self) -> Option<&'a str> {
    self
      .peek()
      .filter(|token| token.kind == TokenKind::Punctuator)
      .map(|token| token_text(token, self.source))
  }

  fn current_loc(&self) -> usize {
    self
      .peek()
      .map(|token| token.loc)
      .unwrap_or(self.source.len())
  }

  /// Location and description of the current token, for diagnostics.
  fn current_description(&self) -> (usize, String) {
    match self.tokens.get(self.pos) {
      Some(token) => (token.loc, describe_token(Some(token), self.source)),
      None => (self.source.len(), "EOF".to_string()),
    }
  }

  /// Consume the current token if it matches the provided punctuator.
  fn equal(&mut self, op: &str) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Punctuator
      && token.len == op.len()
      && token_text(token, self.source) == op
    {
      self.pos += 1;
      return true;
    }
    false
  }

  fn skip(&mut self, s: &str) -> CompileResult<()> {
    if self.equal(s) {
      Ok(())
    } else {
      let (loc, got) = self.current_description();
      Err(CompileError::syntax(
        self.source,
        loc,
        format!("expected \"{s}\", but got \"{got}\""),
      ))
    }
  }

  /// Parse the current token as an integer literal returning its value.
  fn get_number(&mut self) -> CompileResult<i64> {
    if let Some(token) = self.tokens.get(self.pos)
      && token.kind == TokenKind::Num
    {
      let value = token.value.ok_or_else(|| {
        CompileError::syntax(
          self.source,
          token.loc,
          "internal error: numeric token missing value",
        )
      })?;
      self.pos += 1;
      return Ok(value);
    }

    let (loc, got) = self.current_description();
    Err(CompileError::syntax(
      self.source,
      loc,
      format!("expected a number, but got \"{got}\""),
    ))
  }

  fn is_eof(&self) -> bool {
    matches!(self.peek().map(|token| token.kind), Some(TokenKind::Eof))
  }
}
