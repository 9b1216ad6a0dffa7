//! Mapping from argument types to Apple format specifiers.

use crate::types::ArgumentType;

impl ArgumentType {
    /// Format specifier body for this type, without `%` or a position.
    ///
    /// `String` → `@`, `Int` → `lld`, `Double` → `lf`.
    pub fn specifier(self) -> &'static str {
        match self {
            ArgumentType::String => "@",
            ArgumentType::Int => "lld",
            ArgumentType::Double => "lf",
        }
    }

    /// Swift type used for accessor parameters of this type.
    pub fn swift_type(self) -> &'static str {
        match self {
            ArgumentType::String => "String",
            ArgumentType::Int => "Int",
            ArgumentType::Double => "Double",
        }
    }
}

/// Positional specifier such as `%2$lld`. `order` is 1-based.
pub fn positional_specifier(order: usize, argument_type: ArgumentType) -> String {
    format!("%{}${}", order, argument_type.specifier())
}

/// Unnumbered specifier such as `%@`, as used in resource keys.
pub fn bare_specifier(argument_type: ArgumentType) -> String {
    format!("%{}", argument_type.specifier())
}
