//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other
//! useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an
//! atom and a boolean.
//! The trait is also implemented for [IntLiteral], the signed integer form used by the DIMACS
//! format, in which the magnitude of the integer is the external representation of the atom and
//! the sign of the integer is the polarity.
//!
//! An example:
//!
//! ```rust
//! # use marten_sat::structures::literal::{CLiteral, IntLiteral, Literal};
//! let literal = CLiteral::new(78, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 78);
//! assert_eq!(literal.negate(), -literal);
//! assert_eq!(literal.as_int(), 79);
//!
//! let int_literal: IntLiteral = -79;
//! assert_eq!(int_literal.canonical(), literal.negate());
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its 'canonical' form of an atom paired with a boolean.
    fn canonical(&self) -> CLiteral;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> IntLiteral;
}

/// The 'canonical' representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

/// The signed integer representation of a literal, as used by the DIMACS format.
///
/// Zero is not a literal, and is only ever read as a clause delimiter.
pub type IntLiteral = i32;

impl CLiteral {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral::new(atom, polarity)
    }

    fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> IntLiteral {
        let magnitude = (self.atom + 1) as IntLiteral;
        match self.polarity {
            true => magnitude,
            false => -magnitude,
        }
    }
}

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        let magnitude = (atom + 1) as IntLiteral;
        match polarity {
            true => magnitude,
            false => -magnitude,
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        debug_assert!(*self != 0);
        self.unsigned_abs() - 1
    }

    fn polarity(&self) -> bool {
        *self > 0
    }

    fn canonical(&self) -> CLiteral {
        CLiteral::new(Literal::atom(self), Literal::polarity(self))
    }

    fn as_int(&self) -> IntLiteral {
        *self
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}
