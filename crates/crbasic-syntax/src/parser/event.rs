//! Parser events.
//!
//! Grammar functions never touch the tree directly. They append events to a
//! flat buffer which the sink later replays into a `rowan` green tree; this
//! lets an already-parsed operand be wrapped by the node that follows it
//! (`a + b` only becomes a `BinaryExpr` once the `+` is seen).

use crate::syntax::SyntaxKind;

/// An event produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// Open a node.
    Start {
        kind: SyntaxKind,
        /// Offset to a later `Start` that becomes this node's parent.
        forward_parent: Option<u32>,
    },
    /// Attach the next significant token to the open node.
    Token { kind: SyntaxKind },
    /// Close the innermost open node.
    Finish,
    /// A reserved slot: a marker not yet completed, or a `Start` already
    /// consumed through a forward-parent chain.
    Placeholder,
}

impl Event {
    pub(crate) fn start(kind: SyntaxKind) -> Self {
        Self::Start {
            kind,
            forward_parent: None,
        }
    }

    pub(crate) fn token(kind: SyntaxKind) -> Self {
        Self::Token { kind }
    }
}
