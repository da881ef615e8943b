//! Syntax tree types for CRBasic.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite nodes.

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ([$($token:ident),* $(,)?] [$($(#[$meta:meta])* $node:ident),* $(,)?]) => {
        /// All syntax node and token kinds in CRBasic.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =================================================================
            $($token,)*

            // =================================================================
            // COMPOSITE NODE KINDS (produced by parser)
            // =================================================================
            $($(#[$meta])* $node,)*
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            $(SyntaxKind::$node,)*
        ];
    };
}

macro_rules! with_node_kinds {
    ($($token:ident),* $(,)?) => {
        define_syntax_kind! {
            [$($token),*]
            [
                /// Root node of a source file
                SourceFile,
                /// Main program: `BeginProg ... EndProg`
                Program,
                /// `Function name(params) As type ... EndFunction`
                FunctionDecl,
                /// `Sub name(params) ... EndSub`
                SubDecl,
                /// Parameter list in a declaration: `(a As Float, b)`
                ParamList,
                /// Single parameter
                Param,
                /// `Public`/`Dim` declaration
                VariableDecl,
                /// One declared name with optional dimensions and type
                Declarator,
                /// Array dimensions: `(3, 4)`
                DimensionList,
                /// `Const name = expr`
                ConstDecl,
                /// `ConstTable ... EndConstTable`
                ConstTableDecl,
                /// `Alias name = target`
                AliasDecl,
                /// `Units name = text`
                UnitsDecl,
                /// Type annotation: `As Long`, `As String * 20`
                TypeRef,
                /// Block body
                StmtList,
                /// `target = expr`, `target += expr`, ...
                Assignment,
                /// `name(args)`, or a bare instruction name used as a statement
                FunctionCall,
                /// Argument list in a call: `(a, b)`
                ArgList,
                /// `Call name(args)`
                CallStmt,
                /// `Return [expr]`
                ReturnStmt,
                /// `Exit For`, `Exit Do`, ...
                ExitStmt,
                /// `If ... Then ... EndIf`
                IfStmt,
                /// `ElseIf cond Then` or `Else If cond Then` branch
                ElseIfClause,
                /// `Else` branch
                ElseClause,
                /// `For v = a To b [Step c] ... Next [v]`
                ForLoop,
                /// `While cond ... Wend`
                WhileLoop,
                /// `Do ... Loop`
                DoLoop,
                /// `Select Case subject ... EndSelect`
                SelectStmt,
                /// `Case values` / `Case Is [op] value` / `Case Else` branch
                CaseClause,
                /// `Scan(...) ... NextScan`
                ScanStmt,
                /// `SubScan(...) ... NextSubScan`
                SubScanStmt,
                /// `SlowSequence ... EndSequence`
                SlowSequenceStmt,
                /// `DisplayMenu(...) ... EndMenu`
                MenuStmt,
                /// `SubMenu(...) ... EndSubMenu`
                SubMenuStmt,
                /// `MenuItem "name", variable`
                MenuItem,
                /// `DataTable(name, trigger, size) ... EndTable`
                DataTableStmt,
                /// `CallTable name`
                CallTableStmt,
                /// `#If cond ... #EndIf`
                PreprocessorIf,
                /// `#IfDef name ... #EndIf`
                PreprocessorIfDef,
                /// `#ElseIf cond` branch
                PreprocessorElseIf,
                /// `#Else` branch
                PreprocessorElse,
                /// `#UnDef name`
                PreprocessorUndef,
                /// `Include "file"`
                IncludeDirective,
                /// Binary expression: `a + b`
                BinaryExpr,
                /// Unary expression: `-x`, `NOT x`
                UnaryExpr,
                /// Parenthesized expression: `(expr)`
                ParenExpr,
                /// Name, possibly dotted: `x`, `Status.Battery`
                Identifier,
                /// Numeric literal
                NumberLiteral,
                /// String literal
                StringLiteral,
                /// `True` / `False`
                BooleanLiteral,
                /// Tokens that could not be parsed
                ErrorNode,
            ]
        }
    };
}

for_each_token_kind!(with_node_kinds);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::Comment)
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for CRBasic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrBasicLanguage {}

impl rowan::Language for CrBasicLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::ErrorNode)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the CRBasic syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<CrBasicLanguage>;

/// A syntax token in the CRBasic syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<CrBasicLanguage>;

/// A syntax element (either node or token) in the CRBasic syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<CrBasicLanguage>;
