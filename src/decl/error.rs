use thiserror::Error;

/// A defect in how comparison was declared or wired up, detected at
/// comparison time.
///
/// Every variant indicates a programming mistake rather than a data
/// condition: an absent attribute value is a valid, ordered state and
/// never produces an error. These must never be folded into a default
/// ordering; they abort the comparison that detected them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A declaration names a selector the type's accessor dispatch does
    /// not resolve.
    #[error("no accessor for selector `{selector}` on `{type_name}`")]
    UnknownSelector {
        selector: String,
        type_name: &'static str,
    },

    /// The two operands declare a different number of selectors.
    #[error("mismatched declarations: left declares {left} selectors, right declares {right}")]
    MismatchedLength { left: usize, right: usize },

    /// The two operands disagree on which selector sits at `position`.
    #[error("mismatched declarations at position {position}: left `{left}`, right `{right}`")]
    MismatchedSelector {
        position: usize,
        left: String,
        right: String,
    },
}
