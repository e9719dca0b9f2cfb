//! Type-expression tree for the tapper DSL.
//!
//! `TypeNode` describes typed data shapes (scalars, structs, arrays, slices,
//! maps) as a closed tree. It has no parsing logic of its own: a parser
//! builds it from the lexer's tokens, and consumers match on it or render it.
//!
//! # Rendering
//!
//! `Display` produces a canonical debugging form, not a re-parsable one:
//! - `INT`, `FLOAT`, `BOOL`, `STRING`
//! - `Name` verbatim
//! - `SLICE(<E>)`, `ARRAY(<N>, <E>)`, `MAP[<K>]<V>`, `FIELD(<name>,<N>)`
//! - `STRUCT(a, b, ...)`, field names only, sorted by name

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A parsed type expression.
///
/// Composite variants exclusively own their children; there is no sharing
/// and therefore no cycles.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeNode {
    /// A symbolic (unresolved) type reference: `Point`, `Timestamp`.
    Name(String),

    /// `[map]K V`
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },

    /// A struct, keyed by field name.
    Struct(StructFields),

    /// A named member of a struct.
    Field { name: String, node: Box<TypeNode> },

    /// `[N]E`: fixed-size array.
    Array { elem: Box<TypeNode>, size: u64 },

    /// `[]E`: unbounded slice.
    Slice(Box<TypeNode>),

    Int,
    Float,
    Bool,
    String,
}

impl TypeNode {
    /// Create a symbolic type reference.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        TypeNode::Name(name.into())
    }

    /// Create a map type.
    #[inline]
    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        TypeNode::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a struct type from its fields.
    #[inline]
    pub fn structure(fields: StructFields) -> Self {
        TypeNode::Struct(fields)
    }

    /// Create a struct field.
    #[inline]
    pub fn field(name: impl Into<String>, node: TypeNode) -> Self {
        TypeNode::Field {
            name: name.into(),
            node: Box::new(node),
        }
    }

    /// Create a fixed-size array type.
    #[inline]
    pub fn array(elem: TypeNode, size: u64) -> Self {
        TypeNode::Array {
            elem: Box::new(elem),
            size,
        }
    }

    /// Create a slice type.
    #[inline]
    pub fn slice(elem: TypeNode) -> Self {
        TypeNode::Slice(Box::new(elem))
    }

    /// The rendering keyword of the variant (`"MAP"`, `"INT"`, ...).
    ///
    /// `Name` nodes have no keyword and report `"NAME"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::Name(_) => "NAME",
            TypeNode::Map { .. } => "MAP",
            TypeNode::Struct(_) => "STRUCT",
            TypeNode::Field { .. } => "FIELD",
            TypeNode::Array { .. } => "ARRAY",
            TypeNode::Slice(_) => "SLICE",
            TypeNode::Int => "INT",
            TypeNode::Float => "FLOAT",
            TypeNode::Bool => "BOOL",
            TypeNode::String => "STRING",
        }
    }

    /// Whether this is one of the size-less scalar leaves.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TypeNode::Int | TypeNode::Float | TypeNode::Bool | TypeNode::String
        )
    }

    /// Direct children, in rendering order.
    ///
    /// Struct children are the field nodes, sorted by field name.
    pub fn children(&self) -> Vec<&TypeNode> {
        match self {
            TypeNode::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            TypeNode::Struct(fields) => fields.iter().map(|(_, node)| node).collect(),
            TypeNode::Field { node, .. } => vec![node.as_ref()],
            TypeNode::Array { elem, .. } | TypeNode::Slice(elem) => vec![elem.as_ref()],
            TypeNode::Name(_)
            | TypeNode::Int
            | TypeNode::Float
            | TypeNode::Bool
            | TypeNode::String => Vec::new(),
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Name(name) => f.write_str(name),
            TypeNode::Map { key, value } => write!(f, "MAP[{key}]{value}"),
            TypeNode::Struct(fields) => {
                f.write_str("STRUCT(")?;
                for (i, name) in fields.names().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str(")")
            }
            TypeNode::Field { name, node } => write!(f, "FIELD({name},{node})"),
            TypeNode::Array { elem, size } => write!(f, "ARRAY({size}, {elem})"),
            TypeNode::Slice(elem) => write!(f, "SLICE({elem})"),
            TypeNode::Int => f.write_str("INT"),
            TypeNode::Float => f.write_str("FLOAT"),
            TypeNode::Bool => f.write_str("BOOL"),
            TypeNode::String => f.write_str("STRING"),
        }
    }
}

/// Fields of a struct type, keyed by name.
///
/// Iteration is sorted by field name, which makes struct rendering
/// deterministic. Name uniqueness is enforced by the map itself; detecting
/// a duplicate is up to the caller (see [`StructFields::insert`]).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StructFields {
    fields: BTreeMap<String, TypeNode>,
}

impl StructFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the node previously stored under `name`.
    ///
    /// A `Some` return means the struct declared `name` twice.
    pub fn insert(&mut self, name: impl Into<String>, node: TypeNode) -> Option<TypeNode> {
        self.fields.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(name, node)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }
}

impl<N: Into<String>> FromIterator<(N, TypeNode)> for StructFields {
    fn from_iter<I: IntoIterator<Item = (N, TypeNode)>>(iter: I) -> Self {
        StructFields {
            fields: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }
}

impl IntoIterator for StructFields {
    type Item = (String, TypeNode);
    type IntoIter = btree_map::IntoIter<String, TypeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests;
