//! ivy-util - core utilities shared by the lexer, parser, and evaluator.
//!
//! Grounded on the teacher's `faxc-util`: string interning (`symbol`),
//! source location tracking (`span`), and diagnostic reporting
//! (`diagnostic`). Trimmed to what a single-source, single-threaded
//! tree-walking interpreter needs — no `SourceMap`/`FileId` (one source unit
//! at a time), no `IndexVec`/`DefId` (no arena-allocated HIR), no
//! concurrency-oriented interner.

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
