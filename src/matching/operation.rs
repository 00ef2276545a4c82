//! Comparison operations and the operation flag-set

use std::fmt;

use bitflags::bitflags;

/// A comparison a matcher applies between a property value and a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOperation {
    /// Value equals the target (within tolerance for continuous kinds)
    Equals,
    /// Value differs from the target
    NotEquals,
    /// Value is greater than the target
    Greater,
    /// Value is less than the target
    Less,
    /// Wildcard match; declared by no kind and never evaluated
    PatternMatch,
    /// Every entity matches
    SelectAll,
}

impl MatchOperation {
    /// All operations, in the order they are offered
    pub const ALL: [MatchOperation; 6] = [
        MatchOperation::Equals,
        MatchOperation::NotEquals,
        MatchOperation::Greater,
        MatchOperation::Less,
        MatchOperation::PatternMatch,
        MatchOperation::SelectAll,
    ];

    /// The flag for this operation
    pub const fn flag(self) -> MatchOperations {
        match self {
            MatchOperation::Equals => MatchOperations::EQUALS,
            MatchOperation::NotEquals => MatchOperations::NOT_EQUALS,
            MatchOperation::Greater => MatchOperations::GREATER,
            MatchOperation::Less => MatchOperations::LESS,
            MatchOperation::PatternMatch => MatchOperations::PATTERN_MATCH,
            MatchOperation::SelectAll => MatchOperations::SELECT_ALL,
        }
    }

    /// Short symbol shown in operation pickers
    pub const fn symbol(self) -> &'static str {
        match self {
            MatchOperation::Equals => "=",
            MatchOperation::NotEquals => "<>",
            MatchOperation::Greater => ">",
            MatchOperation::Less => "<",
            MatchOperation::PatternMatch => "*",
            MatchOperation::SelectAll => "Select All",
        }
    }
}

impl fmt::Display for MatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchOperation::Equals => "Equals",
            MatchOperation::NotEquals => "NotEquals",
            MatchOperation::Greater => "Greater",
            MatchOperation::Less => "Less",
            MatchOperation::PatternMatch => "PatternMatch",
            MatchOperation::SelectAll => "SelectAll",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of operations a value kind supports
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatchOperations: u8 {
        const EQUALS = 1 << 0;
        const NOT_EQUALS = 1 << 1;
        const GREATER = 1 << 2;
        const LESS = 1 << 3;
        const PATTERN_MATCH = 1 << 4;
        const SELECT_ALL = 1 << 5;

        /// Discrete and identity kinds
        const BASIC = Self::EQUALS.bits() | Self::NOT_EQUALS.bits() | Self::SELECT_ALL.bits();
        /// Ordered kinds
        const ALL_EXCEPT_PATTERN = Self::BASIC.bits() | Self::GREATER.bits() | Self::LESS.bits();
        /// Reserved for kinds with pattern support
        const ALL = Self::ALL_EXCEPT_PATTERN.bits() | Self::PATTERN_MATCH.bits();
    }
}

impl MatchOperations {
    /// Check if `op` is in the set
    pub const fn supports(self, op: MatchOperation) -> bool {
        self.contains(op.flag())
    }

    /// Operations in the set, in picker order
    pub fn operations(self) -> impl Iterator<Item = MatchOperation> {
        MatchOperation::ALL
            .into_iter()
            .filter(move |op| self.supports(*op))
    }
}
