use codebreak_core::Element;

/// What is known about whether an element occurs in the secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Presence {
    /// Nothing has been proven yet.
    #[default]
    Unknown,
    /// The element occurs at least once.
    Confirmed,
    /// The element does not occur.
    Eliminated,
}

/// The accumulated knowledge about one element.
///
/// Confirmation and elimination are mutually exclusive because they share
/// one [`Presence`] value; a known count of zero always comes with
/// elimination and a positive count with confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementKnowledge {
    presence: Presence,
    exact_count: Option<u8>,
}

impl ElementKnowledge {
    /// Knowledge about an element no guess has touched.
    pub const UNKNOWN: Self = Self {
        presence: Presence::Unknown,
        exact_count: None,
    };

    /// Whether the element is known to occur.
    #[must_use]
    pub fn presence(self) -> Presence {
        self.presence
    }

    /// Returns `true` if the element is known to occur.
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        self.presence.is_confirmed()
    }

    /// Returns `true` if the element is known not to occur.
    #[must_use]
    pub fn is_eliminated(self) -> bool {
        self.presence.is_eliminated()
    }

    /// The exact number of occurrences, when known.
    #[must_use]
    pub fn exact_count(self) -> Option<u8> {
        self.exact_count
    }

    pub(crate) fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    pub(crate) fn set_exact_count(&mut self, count: u8) {
        self.exact_count = Some(count);
    }
}

/// Knowledge about every element of an alphabet, indexed by element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeTable {
    entries: Vec<ElementKnowledge>,
}

impl KnowledgeTable {
    /// A table with nothing known about `alphabet_size` elements.
    #[must_use]
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            entries: vec![ElementKnowledge::UNKNOWN; alphabet_size],
        }
    }

    /// Number of elements covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Knowledge about `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is outside the alphabet.
    #[must_use]
    pub fn get(&self, element: Element) -> ElementKnowledge {
        self.entries[element.index()]
    }

    pub(crate) fn get_mut(&mut self, element: Element) -> &mut ElementKnowledge {
        &mut self.entries[element.index()]
    }

    /// Iterates over `(element, knowledge)` pairs in element order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Element, ElementKnowledge)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, k)| (Element::new(i), *k))
    }
}
