use thiserror::Error;

use crate::NodeValue;

/// Errors raised while reading tokens or link instructions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A value token is not a valid integer
    #[error("token {token:?} at position {position} is not a valid node value")]
    InvalidValue { token: String, position: usize },

    /// A link instruction does not have the `<parent>-><child>` shape
    #[error("malformed link instruction {0:?}")]
    MalformedLink(String),
}

/// Errors raised when a link instruction does not fit the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("no node with value {0}")]
    ValueNotFound(NodeValue),

    #[error("node {0} already has two children")]
    ChildrenFull(NodeValue),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = TreeError::from(ParseError::InvalidValue {
            token: "x1".into(),
            position: 3,
        });
        assert_eq!(
            err.to_string(),
            "token \"x1\" at position 3 is not a valid node value"
        );

        let err = TreeError::from(StructureError::ChildrenFull(4));
        assert_eq!(err.to_string(), "node 4 already has two children");
    }
}
