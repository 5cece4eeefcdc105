use super::{
    expressions::{
        BinaryExpr, CallExpr, EnumConstructExpr, FieldAccessExpr, FloatExpr, IntegerExpr,
        StringExpr,
    },
    statements::{
        AssignStmt, EnumCaseDecl, EnumDeclStmt, FnDeclStmt, PrintStmt, PrototypeDecl, ReturnStmt,
        VariableDecl,
    },
    types::TypeNode,
};

/// Node Types
///
/// Payload-free discriminant of [`Node`], for consumers that only need to
/// know what kind of construct they are looking at.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Integer,
    Float,
    String,
    FieldAccess,
    Call,
    Binary,
    Type,
    Variable,
    Assign,
    Return,
    Print,
    Prototype,
    Function,
    EnumCase,
    Enum,
    EnumConstruct,
}

/// Node
///
/// Every construct the parser produces. Statements and expressions share
/// one family: the top level of a program is a sequence of `Node`s.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Integer(IntegerExpr),
    Float(FloatExpr),
    String(StringExpr),
    FieldAccess(FieldAccessExpr),
    Call(CallExpr),
    Binary(BinaryExpr),
    Type(TypeNode),
    Variable(VariableDecl),
    Assign(AssignStmt),
    Return(ReturnStmt),
    Print(PrintStmt),
    Prototype(PrototypeDecl),
    Function(FnDeclStmt),
    EnumCase(EnumCaseDecl),
    Enum(EnumDeclStmt),
    EnumConstruct(EnumConstructExpr),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Integer(_) => NodeType::Integer,
            Node::Float(_) => NodeType::Float,
            Node::String(_) => NodeType::String,
            Node::FieldAccess(_) => NodeType::FieldAccess,
            Node::Call(_) => NodeType::Call,
            Node::Binary(_) => NodeType::Binary,
            Node::Type(_) => NodeType::Type,
            Node::Variable(_) => NodeType::Variable,
            Node::Assign(_) => NodeType::Assign,
            Node::Return(_) => NodeType::Return,
            Node::Print(_) => NodeType::Print,
            Node::Prototype(_) => NodeType::Prototype,
            Node::Function(_) => NodeType::Function,
            Node::EnumCase(_) => NodeType::EnumCase,
            Node::Enum(_) => NodeType::Enum,
            Node::EnumConstruct(_) => NodeType::EnumConstruct,
        }
    }

    /// Builds a binary operation node from already-parsed operands.
    pub fn binary(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Node::Binary(BinaryExpr {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        })
    }
}
