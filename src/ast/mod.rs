/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type and its discriminant
/// - expressions: Literal, reference, call and operator nodes
/// - statements: Declaration and control statement nodes
/// - types: Type annotations and mutability
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
