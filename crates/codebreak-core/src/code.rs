//! Fixed-length codes of elements.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use tinyvec::TinyVec;

use crate::{Alphabet, ContractViolation, Element, ElementSet};

/// Maximum supported code length.
pub const MAX_CODE_LENGTH: usize = 32;

/// An ordered sequence of elements: a secret or a guess.
///
/// Codes of up to eight elements are stored inline.
///
/// # Examples
///
/// ```
/// use codebreak_core::Code;
///
/// let code: Code = "ABCA".parse()?;
/// assert_eq!(code.len(), 4);
/// assert_eq!(code.to_string(), "ABCA");
/// assert_eq!(code.count(code[0]), 2);
/// # Ok::<(), codebreak_core::ParseCodeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    elements: TinyVec<[Element; 8]>,
}

impl Code {
    /// Creates a code from a sequence of elements.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Creates a code repeating one element `length` times.
    #[must_use]
    pub fn repeated(element: Element, length: usize) -> Self {
        Self::new(std::iter::repeat_n(element, length))
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the code has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Element> {
        self.elements.get(position).copied()
    }

    /// Iterates over the elements in position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Element> + ExactSizeIterator + '_ {
        self.elements.iter().copied()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Returns how many times `element` occurs.
    #[must_use]
    pub fn count(&self, element: Element) -> usize {
        self.elements.iter().filter(|&&e| e == element).count()
    }

    /// Returns the set of distinct elements in the code.
    #[must_use]
    pub fn distinct(&self) -> ElementSet {
        self.iter().collect()
    }

    /// Returns the positions where `self` and `other` hold different elements.
    ///
    /// Both codes must have the same length.
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Vec<usize> {
        debug_assert_eq!(self.len(), other.len());
        self.iter()
            .zip(other.iter())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }

    /// Checks that the code fits a round of `length` positions over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::LengthMismatch`] or
    /// [`ContractViolation::UnknownElement`].
    pub fn check(&self, length: usize, alphabet_size: usize) -> Result<(), ContractViolation> {
        if self.len() != length {
            return Err(ContractViolation::LengthMismatch {
                expected: length,
                actual: self.len(),
            });
        }
        if let Some(element) = self.iter().find(|e| e.index() >= alphabet_size) {
            return Err(ContractViolation::UnknownElement {
                element,
                alphabet_size,
            });
        }
        Ok(())
    }

    /// Formats the code with the alphabet's element names.
    #[must_use]
    pub fn display_with(&self, alphabet: &Alphabet) -> String {
        self.iter()
            .map(|e| alphabet.name(e).map_or_else(|| e.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<usize> for Code {
    type Output = Element;

    fn index(&self, position: usize) -> &Element {
        &self.elements[position]
    }
}

impl FromIterator<Element> for Code {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.iter() {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Code`] from a letter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCodeError {
    /// The string has no elements.
    #[display("code string is empty")]
    Empty,
    /// A character is not a letter.
    #[display("invalid element character {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Parses letters (`A` = first element), ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let elements = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Element::from_letter(c).ok_or(ParseCodeError::InvalidCharacter(c)))
            .collect::<Result<TinyVec<[Element; 8]>, _>>()?;
        if elements.is_empty() {
            return Err(ParseCodeError::Empty);
        }
        Ok(Self { elements })
    }
}
