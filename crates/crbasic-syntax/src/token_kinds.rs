//! Single source of truth for the ordered list of token kinds.
//!
//! `SyntaxKind` mirrors `TokenKind` variant-for-variant. The token half of
//! `SyntaxKind` and the `TokenKind` to `SyntaxKind` conversion are generated
//! from this list. `TokenKind` itself carries lexer attributes and is written
//! out by hand in the same order; a test in `syntax` checks that the
//! discriminants line up.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            Newline,
            Comment,
            LParen,
            RParen,
            Comma,
            Dot,
            Eq,
            StarEq,
            PlusEq,
            MinusEq,
            SlashEq,
            BackslashEq,
            CaretEq,
            AmpEq,
            Plus,
            Minus,
            Star,
            Slash,
            Backslash,
            Caret,
            Lt,
            Gt,
            LtEq,
            GtEq,
            Neq,
            Amp,
            Pipe,
            Bang,
            Shl,
            Shr,
            KwBeginProg,
            KwEndProg,
            KwFunction,
            KwEndFunction,
            KwSub,
            KwEndSub,
            KwReturn,
            KwExit,
            KwCall,
            KwIf,
            KwThen,
            KwElseIf,
            KwElse,
            KwEndIf,
            KwFor,
            KwTo,
            KwStep,
            KwNext,
            KwWhile,
            KwWend,
            KwDo,
            KwLoop,
            KwUntil,
            KwSelect,
            KwCase,
            KwIs,
            KwEndSelect,
            KwScan,
            KwNextScan,
            KwSubScan,
            KwNextSubScan,
            KwSlowSequence,
            KwEndSequence,
            KwDisplayMenu,
            KwEndMenu,
            KwSubMenu,
            KwEndSubMenu,
            KwMenuItem,
            KwDataTable,
            KwEndTable,
            KwCallTable,
            KwPublic,
            KwDim,
            KwConst,
            KwConstTable,
            KwEndConstTable,
            KwAlias,
            KwUnits,
            KwAs,
            KwMod,
            KwIntdv,
            KwAnd,
            KwOr,
            KwXor,
            KwImp,
            KwNot,
            KwTrue,
            KwFalse,
            KwInclude,
            PpIf,
            PpIfDef,
            PpElseIf,
            PpElse,
            PpEndIf,
            PpUndef,
            Number,
            QuotedString,
            UnitsText,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
