//! Grammar rules for CRBasic.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `statements.rs` - statement dispatch, assignments and calls
//! - `blocks.rs` - program, procedures, control flow, scans, menus and tables
//! - `declarations.rs` - `Public`/`Dim`/`Const`/`Alias`/`Units` and type annotations
//! - `preprocessor.rs` - `#If`/`#IfDef`/`#UnDef` and `Include`
//! - `expressions.rs` - expression parsing (precedence climbing)

mod blocks;
mod declarations;
mod expressions;
mod preprocessor;
mod statements;
