//! `crbasic-syntax` - Lexer, parser, and concrete syntax tree for CRBasic,
//! the programming language of Campbell Scientific dataloggers.
//!
//! This crate provides the low-level syntactic analysis for CRBasic source:
//!
//! - **Lexer**: Tokenizes source text into a stream of tokens
//! - **Parser**: Builds a concrete syntax tree (CST) from tokens
//! - **Syntax Tree**: Lossless representation of the source code
//! - **AST**: Typed accessors over tree nodes
//!
//! # Design Principles
//!
//! This crate follows the design of `rust-analyzer` and uses the `rowan` library
//! for building lossless syntax trees. Key design decisions:
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Error-tolerant**: Parsing continues after errors, producing a partial tree
//! - **Line oriented**: Statements end at line breaks; keywords are case-insensitive
//!
//! # Example
//!
//! ```
//! use crbasic_syntax::ast::{AstNode, ForLoop};
//! use crbasic_syntax::{parse, SyntaxKind};
//!
//! let source = "\
//! Public PTemp
//! BeginProg
//!   Scan(1, Sec, 0, 0)
//!     PanelTemp(PTemp, 15000)
//!     For i = 1 To 3
//!       PTemp = PTemp + i
//!     Next i
//!   NextScan
//! EndProg
//! ";
//! let parse = parse(source);
//! assert!(parse.ok());
//! assert_eq!(parse.syntax().to_string(), source);
//!
//! let for_loop = parse
//!     .syntax()
//!     .descendants()
//!     .find_map(ForLoop::cast)
//!     .unwrap();
//! assert_eq!(for_loop.variable().unwrap().name(), "i");
//! assert_eq!(for_loop.syntax().kind(), SyntaxKind::ForLoop);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod line_index;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use diagnostics::{Diagnostic, DiagnosticKind, Span};
pub use lexer::{lex, tokenize, Lexer, Token, TokenKind};
pub use line_index::{LineCol, LineIndex};
pub use parser::{parse, parse_with_options, Parse, ParseOptions};
pub use syntax::{CrBasicLanguage, SyntaxKind, SyntaxNode, SyntaxToken};
