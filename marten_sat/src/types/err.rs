/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- A contradiction during the search is *not* an error --- it is the normal internal signal,
  represented as a boolean failure from the relevant procedures, and at the outermost call a
  failure becomes an unsatisfiable report.

Names of the error enums --- for the most part --- overlap with corresponding structs.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when building a context.
    Build(BuildError),

    /// An error related to parsing.
    Parse(ParseError),

    /// The attempted action could not be completed given the state of the context.
    InvalidState,
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended without a problem header.
    MissingHeader,

    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// A token at the given line could not be read as a literal.
    Literal(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The input ended before the promised clauses had been read.
    PrematureEnd,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
