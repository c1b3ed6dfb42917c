/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type and its helpers
/// - expressions: Variable references, calls, literals and operators
/// - statements: Definitions, assignments, blocks and control flow
/// - types: Declared types, literal values and operator kinds
/// - display: Indented tree rendering
pub mod ast;
pub mod display;
pub mod expressions;
pub mod statements;
pub mod types;
