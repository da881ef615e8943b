//! Typed views over the syntax tree.
//!
//! Each wrapper holds a [`SyntaxNode`] of one kind and exposes the parts of
//! that node by role. Accessors return `None` when the parser had to recover
//! and the part is missing.

use smol_str::SmolStr;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// A typed wrapper around a syntax node of a particular kind.
pub trait AstNode: Sized {
    /// Returns `true` if a node of `kind` can be wrapped.
    fn can_cast(kind: SyntaxKind) -> bool;

    /// Wraps `node` if its kind matches.
    fn cast(node: SyntaxNode) -> Option<Self>;

    /// The underlying node.
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$name
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self { syntax: node })
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(
    /// The root of a parsed file.
    SourceFile
);
ast_node!(
    /// `BeginProg ... EndProg`
    Program
);
ast_node!(
    /// A block body.
    StmtList
);
ast_node!(
    /// `If ... EndIf`, block or single-line form.
    IfStmt
);
ast_node!(
    /// `ElseIf cond Then` / `Else If cond Then`
    ElseIfClause
);
ast_node!(
    /// `Else`
    ElseClause
);
ast_node!(
    /// `For v = a To b [Step c] ... Next [v]`
    ForLoop
);
ast_node!(
    /// A call, an array element, or a bare instruction statement.
    FunctionCall
);
ast_node!(
    /// `lhs op rhs`
    BinaryExpr
);
ast_node!(
    /// `op operand`
    UnaryExpr
);
ast_node!(
    /// `(expr)`
    ParenExpr
);
ast_node!(
    /// A possibly dotted name.
    Identifier
);
ast_node!(
    /// A numeric literal.
    NumberLiteral
);
ast_node!(
    /// A double-quoted string literal.
    StringLiteral
);
ast_node!(
    /// `True` or `False`.
    BooleanLiteral
);

fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn children<N: AstNode>(parent: &SyntaxNode) -> impl Iterator<Item = N> {
    parent.children().filter_map(N::cast)
}

fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| !token.kind().is_trivia())
}

/// Any expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// `a + b`
    Binary(BinaryExpr),
    /// `-a`
    Unary(UnaryExpr),
    /// `(a)`
    Paren(ParenExpr),
    /// `a`, `Status.Battery`
    Name(Identifier),
    /// `f(a)`, `arr(1)`
    Call(FunctionCall),
    /// `42`
    Number(NumberLiteral),
    /// `"text"`
    String(StringLiteral),
    /// `True`
    Boolean(BooleanLiteral),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::BinaryExpr
                | SyntaxKind::UnaryExpr
                | SyntaxKind::ParenExpr
                | SyntaxKind::Identifier
                | SyntaxKind::FunctionCall
                | SyntaxKind::NumberLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::BooleanLiteral
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::BinaryExpr => Self::Binary(BinaryExpr { syntax: node }),
            SyntaxKind::UnaryExpr => Self::Unary(UnaryExpr { syntax: node }),
            SyntaxKind::ParenExpr => Self::Paren(ParenExpr { syntax: node }),
            SyntaxKind::Identifier => Self::Name(Identifier { syntax: node }),
            SyntaxKind::FunctionCall => Self::Call(FunctionCall { syntax: node }),
            SyntaxKind::NumberLiteral => Self::Number(NumberLiteral { syntax: node }),
            SyntaxKind::StringLiteral => Self::String(StringLiteral { syntax: node }),
            SyntaxKind::BooleanLiteral => Self::Boolean(BooleanLiteral { syntax: node }),
            _ => return None,
        };
        Some(expr)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Binary(it) => it.syntax(),
            Self::Unary(it) => it.syntax(),
            Self::Paren(it) => it.syntax(),
            Self::Name(it) => it.syntax(),
            Self::Call(it) => it.syntax(),
            Self::Number(it) => it.syntax(),
            Self::String(it) => it.syntax(),
            Self::Boolean(it) => it.syntax(),
        }
    }
}

impl SourceFile {
    /// Top-level statements and blocks.
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax.children()
    }

    /// The `BeginProg` block, if present.
    #[must_use]
    pub fn program(&self) -> Option<Program> {
        child(&self.syntax)
    }
}

impl Program {
    /// Statements between `BeginProg` and `EndProg`.
    #[must_use]
    pub fn body(&self) -> Option<StmtList> {
        child(&self.syntax)
    }
}

impl StmtList {
    /// The statements of the block, in order.
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax.children()
    }
}

impl IfStmt {
    /// The condition after `If`.
    #[must_use]
    pub fn condition(&self) -> Option<Expr> {
        child(&self.syntax)
    }

    /// Statements run when the condition holds.
    #[must_use]
    pub fn then_branch(&self) -> Option<StmtList> {
        child(&self.syntax)
    }

    /// `ElseIf` clauses in source order.
    pub fn else_if_clauses(&self) -> impl Iterator<Item = ElseIfClause> {
        children(&self.syntax)
    }

    /// The final `Else` clause.
    #[must_use]
    pub fn else_clause(&self) -> Option<ElseClause> {
        child(&self.syntax)
    }

    /// Returns `true` for `If cond Then stmt` written on one line.
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        let after_then = self
            .syntax
            .children_with_tokens()
            .skip_while(|element| element.kind() != SyntaxKind::KwThen);
        for element in after_then {
            match element {
                rowan::NodeOrToken::Token(token) if token.kind() == SyntaxKind::Newline => {
                    return false;
                }
                rowan::NodeOrToken::Node(node) if node.kind() == SyntaxKind::StmtList => {
                    return node.first_child().is_some();
                }
                _ => {}
            }
        }
        false
    }
}

impl ElseIfClause {
    /// The clause condition.
    #[must_use]
    pub fn condition(&self) -> Option<Expr> {
        child(&self.syntax)
    }

    /// The clause body.
    #[must_use]
    pub fn body(&self) -> Option<StmtList> {
        child(&self.syntax)
    }
}

impl ElseClause {
    /// The clause body.
    #[must_use]
    pub fn body(&self) -> Option<StmtList> {
        child(&self.syntax)
    }
}

impl ForLoop {
    /// The loop variable named after `For`.
    #[must_use]
    pub fn variable(&self) -> Option<Identifier> {
        self.syntax
            .children_with_tokens()
            .take_while(|element| element.kind() != SyntaxKind::Eq)
            .filter_map(rowan::NodeOrToken::into_node)
            .find_map(Identifier::cast)
    }

    /// The name repeated after `Next`, if any.
    #[must_use]
    pub fn closing_variable(&self) -> Option<Identifier> {
        self.syntax
            .children_with_tokens()
            .skip_while(|element| element.kind() != SyntaxKind::KwNext)
            .filter_map(rowan::NodeOrToken::into_node)
            .find_map(Identifier::cast)
    }

    /// The loop body.
    #[must_use]
    pub fn body(&self) -> Option<StmtList> {
        child(&self.syntax)
    }
}

impl FunctionCall {
    /// The called name.
    #[must_use]
    pub fn callee(&self) -> Option<Identifier> {
        child(&self.syntax)
    }

    /// Arguments in order. Empty for a bare instruction such as `SequentialMode`.
    pub fn args(&self) -> impl Iterator<Item = Expr> {
        self.syntax
            .children()
            .find(|node| node.kind() == SyntaxKind::ArgList)
            .into_iter()
            .flat_map(|list| list.children().filter_map(Expr::cast))
    }
}

impl BinaryExpr {
    /// The operator token.
    #[must_use]
    pub fn op(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.syntax)
    }

    /// The operator kind, e.g. [`SyntaxKind::Plus`].
    #[must_use]
    pub fn op_kind(&self) -> Option<SyntaxKind> {
        self.op().map(|token| token.kind())
    }

    /// Left operand.
    #[must_use]
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.syntax)
    }

    /// Right operand.
    #[must_use]
    pub fn rhs(&self) -> Option<Expr> {
        children(&self.syntax).nth(1)
    }
}

impl UnaryExpr {
    /// The prefix operator token.
    #[must_use]
    pub fn op(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.syntax)
    }

    /// The operand.
    #[must_use]
    pub fn operand(&self) -> Option<Expr> {
        child(&self.syntax)
    }
}

impl ParenExpr {
    /// The enclosed expression.
    #[must_use]
    pub fn expr(&self) -> Option<Expr> {
        child(&self.syntax)
    }
}

impl Identifier {
    /// The name as written, including any dots: `Status.Battery`.
    #[must_use]
    pub fn name(&self) -> SmolStr {
        let mut name = String::new();
        for token in self
            .syntax
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
            .filter(|token| !token.kind().is_trivia())
        {
            name.push_str(token.text());
        }
        SmolStr::new(name)
    }
}

/// Radix of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericBase {
    /// `&b101`
    Binary,
    /// `&hFF`
    Hexadecimal,
    /// `42`, `3.5`, `1e3`
    Decimal,
}

/// Type suffix of a numeric literal. It does not change the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericSuffix {
    /// `L`
    Long,
    /// `U`
    Unsigned,
    /// `UL` or `LU`
    UnsignedLong,
    /// `F`
    Float,
}

/// Value of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// Literals without a fractional part or exponent.
    Integer(i64),
    /// Literals with a fractional part or exponent.
    Float(f64),
}

impl NumberLiteral {
    /// The `Number` token.
    #[must_use]
    pub fn token(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.syntax).filter(|token| token.kind() == SyntaxKind::Number)
    }

    /// Radix, from the `&h`/`&b` prefix.
    #[must_use]
    pub fn base(&self) -> Option<NumericBase> {
        self.token().map(|token| split_number(token.text()).0)
    }

    /// Type suffix, if one is written.
    #[must_use]
    pub fn suffix(&self) -> Option<NumericSuffix> {
        let token = self.token()?;
        let (_, _, suffix) = split_number(token.text());
        suffix
    }

    /// Returns `true` for decimal literals with an exponent.
    #[must_use]
    pub fn is_scientific(&self) -> bool {
        self.token().is_some_and(|token| {
            let (base, digits, _) = split_number(token.text());
            base == NumericBase::Decimal && digits.contains(['e', 'E'])
        })
    }

    /// The numeric value, or `None` if it does not fit an `i64`.
    #[must_use]
    pub fn value(&self) -> Option<NumberValue> {
        let token = self.token()?;
        let (base, digits, _) = split_number(token.text());
        match base {
            NumericBase::Binary => i64::from_str_radix(digits, 2).ok().map(NumberValue::Integer),
            NumericBase::Hexadecimal => {
                i64::from_str_radix(digits, 16).ok().map(NumberValue::Integer)
            }
            NumericBase::Decimal if digits.contains(['.', 'e', 'E']) => {
                digits.parse::<f64>().ok().map(NumberValue::Float)
            }
            NumericBase::Decimal => digits.parse::<i64>().ok().map(NumberValue::Integer),
        }
    }
}

/// Splits literal text into base, digits and suffix.
fn split_number(text: &str) -> (NumericBase, &str, Option<NumericSuffix>) {
    let (base, body) = match text.get(..2) {
        Some("&h" | "&H") => (NumericBase::Hexadecimal, &text[2..]),
        Some("&b" | "&B") => (NumericBase::Binary, &text[2..]),
        _ => (NumericBase::Decimal, text),
    };

    // `F` is a hex digit, not a suffix, after `&h`.
    let suffix_chars: &[char] = if base == NumericBase::Hexadecimal {
        &['l', 'L', 'u', 'U']
    } else {
        &['l', 'L', 'u', 'U', 'f', 'F']
    };
    let digits = body.trim_end_matches(suffix_chars);
    let suffix = match body[digits.len()..].to_ascii_lowercase().as_str() {
        "l" => Some(NumericSuffix::Long),
        "u" => Some(NumericSuffix::Unsigned),
        "ul" | "lu" => Some(NumericSuffix::UnsignedLong),
        "f" => Some(NumericSuffix::Float),
        _ => None,
    };
    (base, digits, suffix)
}

impl BooleanLiteral {
    /// `true` for `True` in any letter case.
    #[must_use]
    pub fn value(&self) -> Option<bool> {
        match first_significant_token(&self.syntax)?.kind() {
            SyntaxKind::KwTrue => Some(true),
            SyntaxKind::KwFalse => Some(false),
            _ => None,
        }
    }
}

impl StringLiteral {
    /// Text between the quotes. Escapes are returned as written.
    #[must_use]
    pub fn contents(&self) -> Option<SmolStr> {
        let token = first_significant_token(&self.syntax)?;
        let text = token.text();
        let inner = text.strip_prefix('"')?.strip_suffix('"')?;
        Some(SmolStr::new(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first<N: AstNode>(source: &str) -> N {
        parse(source)
            .syntax()
            .descendants()
            .find_map(N::cast)
            .unwrap()
    }

    #[test]
    fn test_number_bases_and_values() {
        let hex: NumberLiteral = first("x = &hFF");
        assert_eq!(hex.base(), Some(NumericBase::Hexadecimal));
        assert_eq!(hex.value(), Some(NumberValue::Integer(255)));
        assert_eq!(hex.suffix(), None);

        let bin: NumberLiteral = first("x = &b101");
        assert_eq!(bin.base(), Some(NumericBase::Binary));
        assert_eq!(bin.value(), Some(NumberValue::Integer(5)));

        let sci: NumberLiteral = first("x = 1.5e-3");
        assert_eq!(sci.base(), Some(NumericBase::Decimal));
        assert!(sci.is_scientific());
        assert_eq!(sci.value(), Some(NumberValue::Float(1.5e-3)));

        let plain: NumberLiteral = first("x = 3.25");
        assert!(!plain.is_scientific());
        assert_eq!(plain.value(), Some(NumberValue::Float(3.25)));
    }

    #[test]
    fn test_number_suffixes() {
        for text in ["10UL", "10Ul", "10lu"] {
            let number: NumberLiteral = first(&format!("x = {text}"));
            assert_eq!(number.suffix(), Some(NumericSuffix::UnsignedLong), "{text}");
            assert_eq!(number.value(), Some(NumberValue::Integer(10)));
        }
        let long: NumberLiteral = first("x = &h1FL");
        assert_eq!(long.suffix(), Some(NumericSuffix::Long));
        assert_eq!(long.value(), Some(NumberValue::Integer(31)));

        let hex_f: NumberLiteral = first("x = &hAF");
        assert_eq!(hex_f.suffix(), None);
        assert_eq!(hex_f.value(), Some(NumberValue::Integer(175)));

        let float: NumberLiteral = first("x = 4f");
        assert_eq!(float.suffix(), Some(NumericSuffix::Float));
    }

    #[test]
    fn test_boolean_any_case() {
        for text in ["true", "True", "TRUE"] {
            let literal: BooleanLiteral = first(&format!("x = {text}"));
            assert_eq!(literal.value(), Some(true));
        }
        let literal: BooleanLiteral = first("x = FALSE");
        assert_eq!(literal.value(), Some(false));
    }

    #[test]
    fn test_string_contents() {
        let literal: StringLiteral = first(r#"x = "say \"hi\"""#);
        assert_eq!(literal.contents().as_deref(), Some(r#"say \"hi\""#));
    }

    #[test]
    fn test_binary_expr_parts() {
        let expr: BinaryExpr = first("x = 2 + 3 * 4");
        assert_eq!(expr.op_kind(), Some(SyntaxKind::Plus));
        assert!(matches!(expr.lhs(), Some(Expr::Number(_))));
        let Some(Expr::Binary(rhs)) = expr.rhs() else {
            panic!("expected nested binary expression");
        };
        assert_eq!(rhs.op_kind(), Some(SyntaxKind::Star));
    }

    #[test]
    fn test_unary_and_paren() {
        let unary: UnaryExpr = first("x = NOT (a)");
        assert_eq!(unary.op().map(|t| t.kind()), Some(SyntaxKind::KwNot));
        let Some(Expr::Paren(paren)) = unary.operand() else {
            panic!("expected parenthesized operand");
        };
        assert!(matches!(paren.expr(), Some(Expr::Name(_))));
    }

    #[test]
    fn test_for_loop_variables() {
        let for_loop: ForLoop = first("For i = 1 To 10 Step 2\n  x = x + i\nNext j");
        assert_eq!(for_loop.variable().map(|v| v.name()).as_deref(), Some("i"));
        assert_eq!(
            for_loop.closing_variable().map(|v| v.name()).as_deref(),
            Some("j")
        );
        assert_eq!(for_loop.body().map(|b| b.statements().count()), Some(1));

        let bare: ForLoop = first("For k = 1 To 2\nNext");
        assert!(bare.closing_variable().is_none());
    }

    #[test]
    fn test_call_callee_and_args() {
        let call: FunctionCall = first("PanelTemp(PTemp, 15000)");
        assert_eq!(call.callee().map(|c| c.name()).as_deref(), Some("PanelTemp"));
        assert_eq!(call.args().count(), 2);

        let bare: FunctionCall = first("SequentialMode");
        assert_eq!(bare.args().count(), 0);
    }

    #[test]
    fn test_dotted_identifier() {
        let name: Identifier = first("Status.Battery = 1");
        assert_eq!(name.name(), "Status.Battery");
    }

    #[test]
    fn test_if_clauses() {
        let stmt: IfStmt = first("If a Then\n  x = 1\nElseIf b Then\n  x = 2\nElse\n  x = 3\nEndIf");
        assert!(matches!(stmt.condition(), Some(Expr::Name(_))));
        assert_eq!(stmt.else_if_clauses().count(), 1);
        assert!(stmt.else_clause().is_some());
        assert!(!stmt.is_single_line());

        let single: IfStmt = first("If a Then x = 1");
        assert!(single.is_single_line());
    }

    #[test]
    fn test_source_file_program() {
        let file = SourceFile::cast(parse("Public x\nBeginProg\nEndProg").syntax()).unwrap();
        assert_eq!(file.statements().count(), 2);
        assert!(file.program().and_then(|p| p.body()).is_some());
    }
}
