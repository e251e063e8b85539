//! The VeLa type tags.

use std::fmt;

/// The type of a VeLa value.
///
/// `List` and `Function` are composite; the others are scalar. The only
/// implicit conversion between types is `Integer` widening to `Real` when an
/// operator or an explicit conversion requires it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Integer,
    Real,
    String,
    Boolean,
    List,
    Function,
}

impl Type {
    /// All types, in declaration order.
    pub const ALL: [Type; 6] = [
        Type::Integer,
        Type::Real,
        Type::String,
        Type::Boolean,
        Type::List,
        Type::Function,
    ];

    /// Resolve a type name as written in a formal parameter or return type.
    ///
    /// Accepts the canonical names in any case and the mathematical aliases
    /// `ℤ`, `ℝ`, `𝔹` and `λ`.
    pub fn from_name(text: &str) -> Option<Type> {
        match text.trim() {
            "ℤ" => return Some(Type::Integer),
            "ℝ" => return Some(Type::Real),
            "𝔹" => return Some(Type::Boolean),
            "λ" => return Some(Type::Function),
            _ => {}
        }
        Type::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(text.trim()))
    }

    /// Canonical uppercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Integer => "INTEGER",
            Type::Real => "REAL",
            Type::String => "STRING",
            Type::Boolean => "BOOLEAN",
            Type::List => "LIST",
            Type::Function => "FUNCTION",
        }
    }

    /// Whether values of this type contain other values.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(self, Type::List | Type::Function)
    }

    /// Whether a value of type `self` can be used where `required` is expected,
    /// allowing `Integer` to widen to `Real`.
    #[inline]
    pub fn conforms_to(self, required: Type) -> bool {
        self == required || (self == Type::Integer && required == Type::Real)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
