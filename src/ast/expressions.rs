use super::ast::Node;

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
}

/// Float Expression
/// Represents a floating point literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

/// Field Access Expression
/// A bare reference to a name, with no call attached.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccessExpr {
    pub identifier: String,
}

// COMPLEX

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub identifier: String,
    pub arguments: Vec<Node>,
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// Precedence has already been applied by the shape of the tree; only the
/// operator symbol is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Node>,
    pub operator: String,
    pub right: Box<Node>,
}

/// Enum Construct Expression
/// Instantiates one case of an enum, as in `.Success(5)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstructExpr {
    pub enum_name: String,
    pub case_name: String,
    pub arguments: Vec<Node>,
}
