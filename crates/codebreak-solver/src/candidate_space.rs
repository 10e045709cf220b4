use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use codebreak_core::{Code, ContractViolation, Element, MAX_CODE_LENGTH, MAX_ELEMENTS};

/// Largest number of codes a [`CandidateSpace`] will enumerate.
pub const MAX_CANDIDATE_SPACE: usize = 1 << 22;

/// Every code of a given length over an alphabet, in lexicographic order.
///
/// The space depends only on the alphabet size and the code length, never on
/// a history, so one instance can be shared read-only by every round that
/// uses the same parameters (see [`CandidateSpaceCache`]).
///
/// # Examples
///
/// ```
/// use codebreak_solver::CandidateSpace;
///
/// let space = CandidateSpace::generate(6, 4)?;
/// assert_eq!(space.len(), 1296);
/// assert_eq!(space.codes()[0].to_string(), "AAAA");
/// assert_eq!(space.codes()[1295].to_string(), "FFFF");
/// # Ok::<(), codebreak_core::ContractViolation>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    alphabet_size: usize,
    code_length: usize,
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Enumerates all `alphabet_size ^ code_length` codes.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::InvalidAlphabet`] or
    /// [`ContractViolation::InvalidCodeLength`] for out-of-range parameters,
    /// and [`ContractViolation::SearchSpaceTooLarge`] if the space exceeds
    /// [`MAX_CANDIDATE_SPACE`] codes.
    pub fn generate(alphabet_size: usize, code_length: usize) -> Result<Self, ContractViolation> {
        if alphabet_size == 0 || alphabet_size > MAX_ELEMENTS {
            return Err(ContractViolation::InvalidAlphabet {
                reason: "alphabet size out of range",
            });
        }
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(ContractViolation::InvalidCodeLength {
                length: code_length,
            });
        }
        let too_large = ContractViolation::SearchSpaceTooLarge {
            alphabet_size,
            code_length,
        };
        let size = u32::try_from(code_length)
            .ok()
            .and_then(|exp| alphabet_size.checked_pow(exp))
            .filter(|&size| size <= MAX_CANDIDATE_SPACE)
            .ok_or(too_large)?;

        let mut codes = Vec::with_capacity(size);
        let mut digits = vec![0usize; code_length];
        loop {
            codes.push(digits.iter().copied().map(Element::new).collect());

            // Odometer increment, last position fastest.
            let mut i = code_length;
            loop {
                if i == 0 {
                    debug_assert_eq!(codes.len(), size);
                    log::debug!(
                        "generated {} codes for {alphabet_size} elements, length {code_length}",
                        codes.len()
                    );
                    return Ok(Self {
                        alphabet_size,
                        code_length,
                        codes,
                    });
                }
                i -= 1;
                digits[i] += 1;
                if digits[i] < alphabet_size {
                    break;
                }
                digits[i] = 0;
            }
        }
    }

    /// Size of the alphabet the space was built for.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Length of every code in the space.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// All codes in lexicographic order.
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false`; a space holds at least one code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A shared store of generated [`CandidateSpace`]s keyed by parameters.
///
/// Rounds that use the same alphabet size and code length receive the same
/// `Arc`, so the space is enumerated at most once.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use codebreak_solver::CandidateSpaceCache;
///
/// let cache = CandidateSpaceCache::new();
/// let a = cache.get_or_generate(6, 4)?;
/// let b = cache.get_or_generate(6, 4)?;
/// assert!(Arc::ptr_eq(&a, &b));
/// # Ok::<(), codebreak_core::ContractViolation>(())
/// ```
#[derive(Debug, Default)]
pub struct CandidateSpaceCache {
    spaces: Mutex<HashMap<(usize, usize), Arc<CandidateSpace>>>,
}

impl CandidateSpaceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached space for the parameters, generating it on first use.
    ///
    /// # Errors
    ///
    /// Returns the error of [`CandidateSpace::generate`].
    pub fn get_or_generate(
        &self,
        alphabet_size: usize,
        code_length: usize,
    ) -> Result<Arc<CandidateSpace>, ContractViolation> {
        let mut spaces = self.spaces.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(space) = spaces.get(&(alphabet_size, code_length)) {
            return Ok(Arc::clone(space));
        }
        let space = Arc::new(CandidateSpace::generate(alphabet_size, code_length)?);
        spaces.insert((alphabet_size, code_length), Arc::clone(&space));
        Ok(space)
    }

    /// Number of cached spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
