/// AST (Abstract Syntax Tree) module
/// Contains the expression tree the parser builds
///
/// Submodules:
/// - ast: The `Expr` enum and the value types its nodes carry
/// - expressions: Node payloads and their constructors
pub mod ast;
pub mod expressions;
