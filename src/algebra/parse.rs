use crate::algebra::{
    terms::{self, superscript_power},
    Coefficients, Degree, Equation,
};
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Range,
};

/// Parse an [`Equation`] from its canonical form (e.g. `"4x²+12x+40"`).
///
/// When no [`Degree`] is given it is the power of the leading term. Every
/// term must be present, in strictly descending power order:
///
/// ```text
/// equation  := term signed_term*
/// term      := SIGN? MAGNITUDE? variable?
/// signed_term := SIGN MAGNITUDE? variable?
/// variable  := "x" SUPERSCRIPT?
///
/// SIGN        := "+" | "-"
/// MAGNITUDE   := DIGIT+ ("." DIGIT*)? | "." DIGIT+
/// SUPERSCRIPT := "²" | "³" | "⁴"
/// ```
///
/// Whitespace is ignored.
pub(crate) fn parse(
    src: &str,
    degree: Option<Degree>,
) -> Result<Equation, ParseError> {
    let stripped: String = src.chars().filter(|c| !c.is_whitespace()).collect();
    let terms = Terms::new(&stripped).collect::<Result<Vec<_>, _>>()?;

    if terms.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    let degree = match degree {
        Some(degree) => degree,
        None => Degree::from_power(terms[0].power).ok_or(
            ParseError::WrongNumberOfTerms {
                degree: None,
                found: terms.len(),
            },
        )?,
    };

    if terms.len() != degree.terms() {
        return Err(ParseError::WrongNumberOfTerms {
            degree: Some(degree),
            found: terms.len(),
        });
    }

    let mut coefficients = Coefficients::new();

    for (term, expected) in terms.iter().zip((0..=degree.power()).rev()) {
        if term.power != expected {
            return Err(ParseError::UnexpectedPower {
                expected,
                found: term.power,
                index: term.span.start,
            });
        }

        coefficients.push(terms::numify(term.coefficient)?);
    }

    Equation::from_coefficients(&coefficients).ok_or(
        ParseError::WrongNumberOfTerms {
            degree: Some(degree),
            found: coefficients.len(),
        },
    )
}

/// Possible errors that may occur while parsing.
///
/// Indices refer to the equation after whitespace has been removed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    InvalidCharacter {
        character: char,
        index: usize,
    },
    UnexpectedEndOfInput,
    /// A power marker (e.g. `²`) which wasn't attached to an `x`.
    MissingVariable {
        index: usize,
    },
    InvalidNumber {
        text: SmolStr,
    },
    WrongNumberOfTerms {
        degree: Option<Degree>,
        found: usize,
    },
    UnexpectedPower {
        expected: usize,
        found: usize,
        index: usize,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCharacter { character, index } => write!(
                f,
                "Unexpected character, '{}', at index {}",
                character, index
            ),
            ParseError::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input")
            },
            ParseError::MissingVariable { index } => write!(
                f,
                "The power at index {} isn't attached to a variable",
                index
            ),
            ParseError::InvalidNumber { text } => {
                write!(f, "\"{}\" isn't a valid coefficient", text)
            },
            ParseError::WrongNumberOfTerms {
                degree: Some(degree),
                found,
            } => write!(
                f,
                "A {} equation has {} terms, but {} were found",
                degree,
                degree.terms(),
                found
            ),
            ParseError::WrongNumberOfTerms {
                degree: None,
                found,
            } => write!(
                f,
                "Can't find the degree of {} terms led by a constant",
                found
            ),
            ParseError::UnexpectedPower {
                expected,
                found,
                index,
            } => write!(
                f,
                "Expected a term with power {} at index {}, but found power {}",
                expected, index, found
            ),
        }
    }
}

impl Error for ParseError {}

#[derive(Debug, Clone, PartialEq)]
struct Terms<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Terms<'a> {
    fn new(src: &'a str) -> Self { Terms { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn take_while<P>(
        &mut self,
        mut predicate: P,
    ) -> Option<(&'a str, Range<usize>)>
    where
        P: FnMut(char) -> bool,
    {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        let end = self.cursor;

        if start != end {
            let text = &self.src[start..end];
            Some((text, start..end))
        } else {
            None
        }
    }

    /// Consume the digits of a coefficient's magnitude, returning whether
    /// there were any.
    fn chomp_magnitude(&mut self) -> bool {
        let integer_part = self.take_while(|c| c.is_ascii_digit()).is_some();

        if self.peek() == Some('.') {
            // skip past the decimal
            self.advance();

            let fractional_part =
                self.take_while(|c| c.is_ascii_digit()).is_some();
            integer_part || fractional_part
        } else {
            integer_part
        }
    }

    fn chomp_term(&mut self) -> Result<Term<'a>, ParseError> {
        let start = self.cursor;

        if matches!(self.peek(), Some('+') | Some('-')) {
            self.advance();
        }

        let has_magnitude = self.chomp_magnitude();
        let coefficient_end = self.cursor;

        let power = match self.peek() {
            Some('x') => {
                self.advance();

                match self.peek().and_then(superscript_power) {
                    Some(power) => {
                        self.advance();
                        power
                    },
                    None => 1,
                }
            },
            Some(c) if superscript_power(c).is_some() => {
                return Err(ParseError::MissingVariable {
                    index: self.cursor,
                });
            },
            // a lone sign
            Some(other) if !has_magnitude => {
                return Err(ParseError::InvalidCharacter {
                    character: other,
                    index: self.cursor,
                });
            },
            None if !has_magnitude => {
                return Err(ParseError::UnexpectedEndOfInput)
            },
            _ => 0,
        };

        Ok(Term {
            coefficient: &self.src[start..coefficient_end],
            span: start..self.cursor,
            power,
        })
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = Result<Term<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek()?;

        // every term after the first needs to start with a sign
        if self.cursor > 0 && c != '+' && c != '-' {
            return Some(Err(ParseError::InvalidCharacter {
                character: c,
                index: self.cursor,
            }));
        }

        Some(self.chomp_term())
    }
}

/// A single term, `±cxⁿ`.
#[derive(Debug, Clone, PartialEq)]
struct Term<'a> {
    /// The signed magnitude at the start of the term.
    coefficient: &'a str,
    span: Range<usize>,
    power: usize,
}
