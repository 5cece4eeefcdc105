use super::{
    ast::Node,
    types::{Mutability, TypeNode},
};

/// A variable declaration site: `let x: Integer` or `var x: Integer`.
///
/// Also used for function arguments and enum associated values, which are
/// always immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub mutability: Mutability,
    pub type_: TypeNode,
    pub identifier: String,
}

/// Binds a declared variable to its initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub variable: VariableDecl,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub arguments: Vec<Node>,
}

/// The signature of a function, independent of its body.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeDecl {
    pub name: String,
    pub arguments: Vec<VariableDecl>,
    pub return_type: TypeNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub prototype: PrototypeDecl,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumCaseDecl {
    pub enum_name: String,
    pub case_name: String,
    pub associated_values: Vec<VariableDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclStmt {
    pub name: String,
    pub cases: Vec<EnumCaseDecl>,
}
