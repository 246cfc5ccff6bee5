/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when providing a
  formula as input or reading the value of an atom.

The external representation of an atom is a positive integer, as in the DIMACS format.
The internal representation of the external atom *a* is *a - 1*, so that the atoms of a formula
with *m* (external) atoms are exactly [0..*m*), and an atom may be used as the index of a
structure without taking too much space.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are
  often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded below [u32::MAX] so every atom survives a round-trip through the signed integer
/// representation of a literal.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;
