//! Token definitions for CRBasic.
//!
//! This module defines all lexical tokens that can appear in CRBasic source.
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library.

use logos::Logos;

/// All token kinds in CRBasic.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, newlines, comments) - preserved but ignored by the grammar
/// - Punctuation and operators
/// - Keywords (matched case-insensitively)
/// - Preprocessor markers
/// - Literals and identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Spaces and tabs
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    /// Line break. Kept apart from `Whitespace` because statements end at
    /// line boundaries.
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// Comment: `' ...` up to end of line
    #[regex(r"'[^\r\n]*")]
    Comment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    // =========================================================================
    // OPERATORS - Assignment
    // =========================================================================
    /// `=` (assignment and equality)
    #[token("=")]
    Eq,

    /// `*=`
    #[token("*=")]
    StarEq,

    /// `+=`
    #[token("+=")]
    PlusEq,

    /// `-=`
    #[token("-=")]
    MinusEq,

    /// `/=`
    #[token("/=")]
    SlashEq,

    /// `\=`
    #[token("\\=")]
    BackslashEq,

    /// `^=`
    #[token("^=")]
    CaretEq,

    /// `&=`
    #[token("&=")]
    AmpEq,

    // =========================================================================
    // OPERATORS - Arithmetic
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `\` (integer division)
    #[token("\\")]
    Backslash,

    /// `^`
    #[token("^")]
    Caret,

    // =========================================================================
    // OPERATORS - Comparison
    // =========================================================================
    /// `<`
    #[token("<")]
    Lt,

    /// `>`
    #[token(">")]
    Gt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `<>`
    #[token("<>")]
    Neq,

    // =========================================================================
    // OPERATORS - Bitwise
    // =========================================================================
    /// `&`
    #[token("&")]
    Amp,

    /// `|`
    #[token("|")]
    Pipe,

    /// `!`
    #[token("!")]
    Bang,

    /// `<<`
    #[token("<<")]
    Shl,

    /// `>>`
    #[token(">>")]
    Shr,

    // =========================================================================
    // KEYWORDS - Program structure
    // =========================================================================
    /// `BeginProg`
    #[token("BeginProg", ignore(ascii_case))]
    KwBeginProg,

    /// `EndProg`
    #[token("EndProg", ignore(ascii_case))]
    KwEndProg,

    /// `Function`
    #[token("Function", ignore(ascii_case))]
    KwFunction,

    /// `EndFunction`
    #[token("EndFunction", ignore(ascii_case))]
    KwEndFunction,

    /// `Sub`
    #[token("Sub", ignore(ascii_case))]
    KwSub,

    /// `EndSub`
    #[token("EndSub", ignore(ascii_case))]
    KwEndSub,

    /// `Return`
    #[token("Return", ignore(ascii_case))]
    KwReturn,

    /// `Exit`
    #[token("Exit", ignore(ascii_case))]
    KwExit,

    /// `Call`
    #[token("Call", ignore(ascii_case))]
    KwCall,

    // =========================================================================
    // KEYWORDS - Control Flow
    // =========================================================================
    /// `If`
    #[token("If", ignore(ascii_case))]
    KwIf,

    /// `Then`
    #[token("Then", ignore(ascii_case))]
    KwThen,

    /// `ElseIf`
    #[token("ElseIf", ignore(ascii_case))]
    KwElseIf,

    /// `Else`
    #[token("Else", ignore(ascii_case))]
    KwElse,

    /// `EndIf`
    #[token("EndIf", ignore(ascii_case))]
    KwEndIf,

    /// `For`
    #[token("For", ignore(ascii_case))]
    KwFor,

    /// `To`
    #[token("To", ignore(ascii_case))]
    KwTo,

    /// `Step`
    #[token("Step", ignore(ascii_case))]
    KwStep,

    /// `Next`
    #[token("Next", ignore(ascii_case))]
    KwNext,

    /// `While`
    #[token("While", ignore(ascii_case))]
    KwWhile,

    /// `Wend`
    #[token("Wend", ignore(ascii_case))]
    KwWend,

    /// `Do`
    #[token("Do", ignore(ascii_case))]
    KwDo,

    /// `Loop`
    #[token("Loop", ignore(ascii_case))]
    KwLoop,

    /// `Until`
    #[token("Until", ignore(ascii_case))]
    KwUntil,

    /// `Select`
    #[token("Select", ignore(ascii_case))]
    KwSelect,

    /// `Case`
    #[token("Case", ignore(ascii_case))]
    KwCase,

    /// `Is`
    #[token("Is", ignore(ascii_case))]
    KwIs,

    /// `EndSelect`
    #[token("EndSelect", ignore(ascii_case))]
    KwEndSelect,

    // =========================================================================
    // KEYWORDS - Measurement scheduling
    // =========================================================================
    /// `Scan`
    #[token("Scan", ignore(ascii_case))]
    KwScan,

    /// `NextScan`
    #[token("NextScan", ignore(ascii_case))]
    KwNextScan,

    /// `SubScan`
    #[token("SubScan", ignore(ascii_case))]
    KwSubScan,

    /// `NextSubScan`
    #[token("NextSubScan", ignore(ascii_case))]
    KwNextSubScan,

    /// `SlowSequence`
    #[token("SlowSequence", ignore(ascii_case))]
    KwSlowSequence,

    /// `EndSequence`
    #[token("EndSequence", ignore(ascii_case))]
    KwEndSequence,

    // =========================================================================
    // KEYWORDS - Menus
    // =========================================================================
    /// `DisplayMenu`
    #[token("DisplayMenu", ignore(ascii_case))]
    KwDisplayMenu,

    /// `EndMenu`
    #[token("EndMenu", ignore(ascii_case))]
    KwEndMenu,

    /// `SubMenu`
    #[token("SubMenu", ignore(ascii_case))]
    KwSubMenu,

    /// `EndSubMenu`
    #[token("EndSubMenu", ignore(ascii_case))]
    KwEndSubMenu,

    /// `MenuItem`
    #[token("MenuItem", ignore(ascii_case))]
    KwMenuItem,

    // =========================================================================
    // KEYWORDS - Data tables
    // =========================================================================
    /// `DataTable`
    #[token("DataTable", ignore(ascii_case))]
    KwDataTable,

    /// `EndTable`
    #[token("EndTable", ignore(ascii_case))]
    KwEndTable,

    /// `CallTable`
    #[token("CallTable", ignore(ascii_case))]
    KwCallTable,

    // =========================================================================
    // KEYWORDS - Declarations
    // =========================================================================
    /// `Public`
    #[token("Public", ignore(ascii_case))]
    KwPublic,

    /// `Dim`
    #[token("Dim", ignore(ascii_case))]
    KwDim,

    /// `Const`
    #[token("Const", ignore(ascii_case))]
    KwConst,

    /// `ConstTable`
    #[token("ConstTable", ignore(ascii_case))]
    KwConstTable,

    /// `EndConstTable`
    #[token("EndConstTable", ignore(ascii_case))]
    KwEndConstTable,

    /// `Alias`
    #[token("Alias", ignore(ascii_case))]
    KwAlias,

    /// `Units`
    #[token("Units", ignore(ascii_case))]
    KwUnits,

    /// `As`
    #[token("As", ignore(ascii_case))]
    KwAs,

    // =========================================================================
    // KEYWORDS - Operators
    // =========================================================================
    /// `MOD`
    #[token("Mod", ignore(ascii_case))]
    KwMod,

    /// `INTDV`
    #[token("IntDv", ignore(ascii_case))]
    KwIntdv,

    /// `AND`
    #[token("And", ignore(ascii_case))]
    KwAnd,

    /// `OR`
    #[token("Or", ignore(ascii_case))]
    KwOr,

    /// `XOR`
    #[token("Xor", ignore(ascii_case))]
    KwXor,

    /// `IMP`
    #[token("Imp", ignore(ascii_case))]
    KwImp,

    /// `NOT`
    #[token("Not", ignore(ascii_case))]
    KwNot,

    // =========================================================================
    // KEYWORDS - Literals and directives
    // =========================================================================
    /// `True`
    #[token("True", ignore(ascii_case))]
    KwTrue,

    /// `False`
    #[token("False", ignore(ascii_case))]
    KwFalse,

    /// `Include`
    #[token("Include", ignore(ascii_case))]
    KwInclude,

    // =========================================================================
    // PREPROCESSOR MARKERS
    // =========================================================================
    /// `#If`
    #[token("#If", ignore(ascii_case))]
    PpIf,

    /// `#IfDef`
    #[token("#IfDef", ignore(ascii_case))]
    PpIfDef,

    /// `#ElseIf`
    #[token("#ElseIf", ignore(ascii_case))]
    PpElseIf,

    /// `#Else`
    #[token("#Else", ignore(ascii_case))]
    PpElse,

    /// `#EndIf`
    #[token("#EndIf", ignore(ascii_case))]
    PpEndIf,

    /// `#UnDef`
    #[token("#UnDef", ignore(ascii_case))]
    PpUndef,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Numeric literal: `42`, `3.5`, `.5`, `1.5e-3`, `&hFF`, `&b101`, `10UL`
    #[regex(r"&[bB][01]+(?:[uU][lL]|[lL][uU]|[lLuUfF])?")]
    #[regex(r"&[hH][0-9A-Fa-f]+(?:[uU][lL]|[lL][uU]|[lLuU])?")]
    #[regex(r"[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?(?:[uU][lL]|[lL][uU]|[lLuUfF])?")]
    #[regex(r"\.[0-9]+(?:[eE][+-]?[0-9]+)?(?:[uU][lL]|[lL][uU]|[lLuUfF])?")]
    Number,

    /// Double-quoted string: `"hello\"world"`. Escapes are kept verbatim.
    #[regex(r#""(?:[^"\\\r\n]|\\[^\r\n])*""#, priority = 2)]
    QuotedString,

    /// Free text after `Units <name> =`, produced by the lexer driver rather
    /// than by a pattern.
    UnitsText,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: starts with letter or underscore, contains letters, digits, underscores
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character, unterminated string or
    /// malformed number
    #[regex(r#""(?:[^"\\\r\n]|\\[^\r\n])*\\?"#, priority = 1)]
    #[default]
    Error,

    /// End of file marker (not produced by lexer, added by parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace, newline, or comment).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::Comment)
    }

    /// Returns `true` if this token is a keyword.
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::KwBeginProg as u16) && (self as u16) <= (Self::KwInclude as u16)
    }

    /// Returns `true` if the token is made of identifier characters, so that
    /// a number running straight into it is malformed (`12abc`).
    pub(crate) fn is_word(self) -> bool {
        matches!(self, Self::Ident | Self::Number) || self.is_keyword()
    }

    /// Returns `true` if this token is an assignment operator.
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::StarEq
                | Self::PlusEq
                | Self::MinusEq
                | Self::SlashEq
                | Self::BackslashEq
                | Self::CaretEq
                | Self::AmpEq
        )
    }

    /// Returns `true` if this token is a comparison operator.
    pub fn is_comparison_op(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Returns `true` if this token can start an expression.
    pub fn can_start_expr(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::Number
                | Self::QuotedString
                | Self::KwTrue
                | Self::KwFalse
                | Self::LParen
                | Self::Minus
                | Self::Plus
                | Self::KwNot
                | Self::Bang
        )
    }

    /// Returns `true` if this token can start a statement.
    pub fn can_start_statement(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::KwBeginProg
                | Self::KwFunction
                | Self::KwSub
                | Self::KwReturn
                | Self::KwExit
                | Self::KwCall
                | Self::KwIf
                | Self::KwFor
                | Self::KwWhile
                | Self::KwDo
                | Self::KwSelect
                | Self::KwScan
                | Self::KwSubScan
                | Self::KwSlowSequence
                | Self::KwDisplayMenu
                | Self::KwSubMenu
                | Self::KwMenuItem
                | Self::KwDataTable
                | Self::KwCallTable
                | Self::KwPublic
                | Self::KwDim
                | Self::KwConst
                | Self::KwConstTable
                | Self::KwAlias
                | Self::KwUnits
                | Self::KwInclude
                | Self::PpIf
                | Self::PpIfDef
                | Self::PpUndef
        )
    }

    /// Returns the binding power for precedence climbing (left, right).
    /// Returns None if not an infix operator.
    ///
    /// Every level is left associative, `^` included.
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::Plus | Self::Minus => (1, 2),
            Self::Star | Self::Slash | Self::Backslash | Self::KwMod | Self::KwIntdv => (3, 4),
            Self::Caret => (5, 6),
            Self::Eq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => (7, 8),
            Self::KwAnd | Self::KwOr | Self::KwXor | Self::KwImp => (9, 10),
            Self::Amp | Self::Pipe => (11, 12),
            Self::Shr | Self::Shl => (13, 14),
            _ => return None,
        })
    }

    /// Returns the binding power for prefix operators.
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::KwNot | Self::Bang | Self::Plus | Self::Minus => 15,
            _ => return None,
        })
    }

    /// Human-readable spelling used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Newline => "end of line",
            Self::Comment => "comment",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Eq => "`=`",
            Self::StarEq => "`*=`",
            Self::PlusEq => "`+=`",
            Self::MinusEq => "`-=`",
            Self::SlashEq => "`/=`",
            Self::BackslashEq => "`\\=`",
            Self::CaretEq => "`^=`",
            Self::AmpEq => "`&=`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Backslash => "`\\`",
            Self::Caret => "`^`",
            Self::Lt => "`<`",
            Self::Gt => "`>`",
            Self::LtEq => "`<=`",
            Self::GtEq => "`>=`",
            Self::Neq => "`<>`",
            Self::Amp => "`&`",
            Self::Pipe => "`|`",
            Self::Bang => "`!`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::KwBeginProg => "`BeginProg`",
            Self::KwEndProg => "`EndProg`",
            Self::KwFunction => "`Function`",
            Self::KwEndFunction => "`EndFunction`",
            Self::KwSub => "`Sub`",
            Self::KwEndSub => "`EndSub`",
            Self::KwReturn => "`Return`",
            Self::KwExit => "`Exit`",
            Self::KwCall => "`Call`",
            Self::KwIf => "`If`",
            Self::KwThen => "`Then`",
            Self::KwElseIf => "`ElseIf`",
            Self::KwElse => "`Else`",
            Self::KwEndIf => "`EndIf`",
            Self::KwFor => "`For`",
            Self::KwTo => "`To`",
            Self::KwStep => "`Step`",
            Self::KwNext => "`Next`",
            Self::KwWhile => "`While`",
            Self::KwWend => "`Wend`",
            Self::KwDo => "`Do`",
            Self::KwLoop => "`Loop`",
            Self::KwUntil => "`Until`",
            Self::KwSelect => "`Select`",
            Self::KwCase => "`Case`",
            Self::KwIs => "`Is`",
            Self::KwEndSelect => "`EndSelect`",
            Self::KwScan => "`Scan`",
            Self::KwNextScan => "`NextScan`",
            Self::KwSubScan => "`SubScan`",
            Self::KwNextSubScan => "`NextSubScan`",
            Self::KwSlowSequence => "`SlowSequence`",
            Self::KwEndSequence => "`EndSequence`",
            Self::KwDisplayMenu => "`DisplayMenu`",
            Self::KwEndMenu => "`EndMenu`",
            Self::KwSubMenu => "`SubMenu`",
            Self::KwEndSubMenu => "`EndSubMenu`",
            Self::KwMenuItem => "`MenuItem`",
            Self::KwDataTable => "`DataTable`",
            Self::KwEndTable => "`EndTable`",
            Self::KwCallTable => "`CallTable`",
            Self::KwPublic => "`Public`",
            Self::KwDim => "`Dim`",
            Self::KwConst => "`Const`",
            Self::KwConstTable => "`ConstTable`",
            Self::KwEndConstTable => "`EndConstTable`",
            Self::KwAlias => "`Alias`",
            Self::KwUnits => "`Units`",
            Self::KwAs => "`As`",
            Self::KwMod => "`MOD`",
            Self::KwIntdv => "`INTDV`",
            Self::KwAnd => "`AND`",
            Self::KwOr => "`OR`",
            Self::KwXor => "`XOR`",
            Self::KwImp => "`IMP`",
            Self::KwNot => "`NOT`",
            Self::KwTrue => "`True`",
            Self::KwFalse => "`False`",
            Self::KwInclude => "`Include`",
            Self::PpIf => "`#If`",
            Self::PpIfDef => "`#IfDef`",
            Self::PpElseIf => "`#ElseIf`",
            Self::PpElse => "`#Else`",
            Self::PpEndIf => "`#EndIf`",
            Self::PpUndef => "`#UnDef`",
            Self::Number => "number",
            Self::QuotedString => "string",
            Self::UnitsText => "units text",
            Self::Ident => "identifier",
            Self::Error => "invalid token",
            Self::Eof => "end of input",
        }
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(tok, span)| (tok.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input)
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = lex("BeginProg beginprog BEGINPROG bEgInPrOg");
        assert!(tokens
            .iter()
            .filter(|(k, _)| !k.is_trivia())
            .all(|(kind, _)| *kind == TokenKind::KwBeginProg));
    }

    #[test]
    fn test_booleans_case_insensitive() {
        assert_eq!(
            kinds("true True TRUE false"),
            vec![
                TokenKind::KwTrue,
                TokenKind::KwTrue,
                TokenKind::KwTrue,
                TokenKind::KwFalse
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(
            kinds("Scanner NextScanCount EndIfy"),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident]
        );
    }

    #[test]
    fn test_block_keywords() {
        assert_eq!(
            kinds("Scan NextScan SubScan NextSubScan SlowSequence EndSequence"),
            vec![
                TokenKind::KwScan,
                TokenKind::KwNextScan,
                TokenKind::KwSubScan,
                TokenKind::KwNextSubScan,
                TokenKind::KwSlowSequence,
                TokenKind::KwEndSequence
            ]
        );
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(
            kinds("= *= += -= /= \\= ^= &= <= >= <> << >> < > & | ! \\ ^"),
            vec![
                TokenKind::Eq,
                TokenKind::StarEq,
                TokenKind::PlusEq,
                TokenKind::MinusEq,
                TokenKind::SlashEq,
                TokenKind::BackslashEq,
                TokenKind::CaretEq,
                TokenKind::AmpEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Neq,
                TokenKind::Shl,
                TokenKind::Shr,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Amp,
                TokenKind::Pipe,
                TokenKind::Bang,
                TokenKind::Backslash,
                TokenKind::Caret
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        let tokens = lex("42 3.5 7. .25 1.5e-3 2E+10 &hFF &H1a &b101 &B0 10UL 10Ul 3L 4f");
        let numbers: Vec<_> = tokens.iter().filter(|(k, _)| !k.is_trivia()).collect();
        assert_eq!(numbers.len(), 14);
        assert!(numbers.iter().all(|(k, _)| *k == TokenKind::Number));
        assert_eq!(numbers[10].1, "10UL");
    }

    #[test]
    fn test_preprocessor_markers() {
        assert_eq!(
            kinds("#If #IfDef #ElseIf #Else #EndIf #UnDef #if"),
            vec![
                TokenKind::PpIf,
                TokenKind::PpIfDef,
                TokenKind::PpElseIf,
                TokenKind::PpElse,
                TokenKind::PpEndIf,
                TokenKind::PpUndef,
                TokenKind::PpIf
            ]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""plain" "with \"escape\"" "back\\slash""#);
        let strings: Vec<_> = tokens.iter().filter(|(k, _)| !k.is_trivia()).collect();
        assert!(strings.iter().all(|(k, _)| *k == TokenKind::QuotedString));
        assert_eq!(strings[1].1, r#""with \"escape\"""#);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = lex("\"open\nx");
        assert_eq!(tokens[0], (TokenKind::Error, "\"open"));
        assert_eq!(tokens[1].0, TokenKind::Newline);
        assert_eq!(tokens[2].0, TokenKind::Ident);
    }

    #[test]
    fn test_comment_to_end_of_line() {
        let tokens = lex("x ' note = 1\ny");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Ident
            ]
        );
    }

    #[test]
    fn test_binding_powers_are_left_associative() {
        for op in [
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Caret,
            TokenKind::Eq,
            TokenKind::KwAnd,
            TokenKind::Amp,
            TokenKind::Shl,
        ] {
            let (l, r) = op.infix_binding_power().unwrap();
            assert!(l < r, "{op:?} should be left associative");
        }
        assert!(TokenKind::Minus.prefix_binding_power().unwrap() > 14);
    }
}
