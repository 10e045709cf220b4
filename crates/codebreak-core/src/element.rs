//! Code elements and the alphabet they are drawn from.

use std::fmt::{self, Display};

use crate::{ContractViolation, ElementSet};

/// Maximum number of elements an [`Alphabet`] can hold.
///
/// This is bounded by the width of [`ElementSet`].
pub const MAX_ELEMENTS: usize = 64;

/// A single code element, identified by its index in the [`Alphabet`].
///
/// Elements are opaque to the deduction logic: only equality matters. They
/// are displayed as letters (`A` for index 0, `B` for index 1, ...) so that
/// codes read like the usual `"ABCD"` notation.
///
/// # Examples
///
/// ```
/// use codebreak_core::Element;
///
/// let c = Element::from_letter('C').unwrap();
/// assert_eq!(c.index(), 2);
/// assert_eq!(c.to_string(), "C");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(u8);

impl Element {
    /// Creates an element from its alphabet index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`MAX_ELEMENTS`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Self {
        assert!(index < MAX_ELEMENTS, "element index out of range");
        Self(index as u8)
    }

    /// Returns the alphabet index of this element.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parses a letter (`A`-`Z`, case-insensitive) into an element.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| Self::new(usize::from(upper as u8 - b'A')))
    }

    /// Returns the letter naming this element, if it has one.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        (self.0 < 26).then(|| char::from(b'A' + self.0))
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// The ordered, fixed set of elements a round plays with.
///
/// # Examples
///
/// ```
/// use codebreak_core::Alphabet;
///
/// let alphabet = Alphabet::new(["Santa", "Present", "Star"])?;
/// assert_eq!(alphabet.len(), 3);
///
/// let star = alphabet.element("Star").unwrap();
/// assert_eq!(alphabet.name(star), Some("Star"));
/// # Ok::<(), codebreak_core::ContractViolation>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: Vec<String>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::letters(Self::DEFAULT_SIZE)
    }
}

impl Alphabet {
    /// Number of elements in the default alphabet.
    pub const DEFAULT_SIZE: usize = 6;

    /// Creates an alphabet from element names.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidAlphabet`] if the list is empty,
    /// longer than [`MAX_ELEMENTS`], or contains empty or repeated names.
    pub fn new<I, S>(names: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ContractViolation::InvalidAlphabet {
                reason: "alphabet is empty",
            });
        }
        if names.len() > MAX_ELEMENTS {
            return Err(ContractViolation::InvalidAlphabet {
                reason: "alphabet has too many elements",
            });
        }
        if names.iter().any(String::is_empty) {
            return Err(ContractViolation::InvalidAlphabet {
                reason: "element name is empty",
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ContractViolation::InvalidAlphabet {
                    reason: "element name is repeated",
                });
            }
        }
        Ok(Self { names })
    }

    /// Creates an alphabet of `size` elements named `A`, `B`, `C`, ...
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or greater than 26.
    #[must_use]
    pub fn letters(size: usize) -> Self {
        assert!(
            (1..=26).contains(&size),
            "letter alphabet size must be between 1 and 26, got {size}"
        );
        let names = (0..size)
            .map(|i| Element::new(i).to_string())
            .collect::<Vec<_>>();
        Self { names }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; an alphabet holds at least one element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the elements in alphabet order.
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = Element> + ExactSizeIterator {
        (0..self.names.len()).map(Element::new)
    }

    /// Returns the set containing every element of the alphabet.
    #[must_use]
    pub fn full_set(&self) -> ElementSet {
        ElementSet::full(self.len())
    }

    /// Returns `true` if `element` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, element: Element) -> bool {
        element.index() < self.names.len()
    }

    /// Returns the display name of an element.
    #[must_use]
    pub fn name(&self, element: Element) -> Option<&str> {
        self.names.get(element.index()).map(String::as_str)
    }

    /// Looks up an element by name.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<Element> {
        self.names.iter().position(|n| n == name).map(Element::new)
    }
}
