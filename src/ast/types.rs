//! Type annotations in the AST.
//!
//! The parser records types purely by name. Built-in names and user type
//! names are both `TypeNode`s; nothing is resolved or unified here.

use std::fmt::Display;

/// The built-in type names of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literals {
    Integer,
    Float,
    String,
    Bool,
    Void,
}

impl Literals {
    pub fn name(&self) -> &'static str {
        match self {
            Literals::Integer => "Integer",
            Literals::Float => "Float",
            Literals::String => "String",
            Literals::Bool => "Bool",
            Literals::Void => "Void",
        }
    }
}

/// A type reference. Two `TypeNode`s denote the same type when their names
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    pub name: String,
}

impl TypeNode {
    pub fn named(name: impl Into<String>) -> Self {
        TypeNode { name: name.into() }
    }

    pub fn literal(literal: Literals) -> Self {
        TypeNode::named(literal.name())
    }

    pub fn integer() -> Self {
        TypeNode::literal(Literals::Integer)
    }

    pub fn float() -> Self {
        TypeNode::literal(Literals::Float)
    }

    pub fn string() -> Self {
        TypeNode::literal(Literals::String)
    }

    pub fn bool() -> Self {
        TypeNode::literal(Literals::Bool)
    }

    pub fn void() -> Self {
        TypeNode::literal(Literals::Void)
    }

    /// Returns the built-in this type names, if any.
    pub fn as_literal(&self) -> Option<Literals> {
        [
            Literals::Integer,
            Literals::Float,
            Literals::String,
            Literals::Bool,
            Literals::Void,
        ]
        .into_iter()
        .find(|literal| literal.name() == self.name)
    }
}

impl Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}
