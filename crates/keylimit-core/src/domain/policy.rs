//! Policies: what a field accepts, as a mix of key sets and literal characters.
//!
//! A policy lets callers combine precomputed classes with ad-hoc characters,
//! e.g. "alphanumeric plus `@-_.`" for an e-mail field:
//!
//! ```
//! use keylimit_core::{Layout, NamedClasses, Policy};
//!
//! let layout = Layout::us101();
//! let classes = NamedClasses::build(&layout);
//! let mail = Policy::new().with_keys(classes.alnum()).with_chars("@-_.");
//! assert_eq!(mail.len(), 2);
//! ```
//!
//! Resolution is deterministic and side-effect free, so a policy can be
//! resolved once when a field is bound or again on every keystroke.

use crate::keymap::Layout;

use super::key_set::{build_from_str, merge, KeySet};

/// One element of a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyElement {
    /// An already-built key set, used as is.
    Keys(KeySet),
    /// Literal characters, looked up in the layout at resolution time.
    Chars(String),
}

impl PolicyElement {
    /// Resolves this element against `layout`.
    pub fn resolve(&self, layout: &Layout) -> KeySet {
        match self {
            PolicyElement::Keys(keys) => *keys,
            PolicyElement::Chars(chars) => build_from_str(layout, chars),
        }
    }
}

impl From<KeySet> for PolicyElement {
    fn from(keys: KeySet) -> Self {
        PolicyElement::Keys(keys)
    }
}

impl From<&str> for PolicyElement {
    fn from(chars: &str) -> Self {
        PolicyElement::Chars(chars.to_string())
    }
}

impl From<String> for PolicyElement {
    fn from(chars: String) -> Self {
        PolicyElement::Chars(chars)
    }
}

/// An ordered list of [`PolicyElement`]s.  The empty policy allows nothing
/// except bypassed keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    elements: Vec<PolicyElement>,
}

impl Policy {
    /// Creates an empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn push(&mut self, element: impl Into<PolicyElement>) {
        self.elements.push(element.into());
    }

    /// Appends a key set and returns the policy.
    pub fn with_keys(mut self, keys: KeySet) -> Self {
        self.push(keys);
        self
    }

    /// Appends literal characters and returns the policy.
    pub fn with_chars(mut self, chars: impl Into<String>) -> Self {
        self.push(PolicyElement::Chars(chars.into()));
        self
    }

    /// The policy's elements in order.
    pub fn elements(&self) -> &[PolicyElement] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the policy has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Resolves every element and merges the results in order.
    pub fn resolve(&self, layout: &Layout) -> KeySet {
        resolve_policy(layout, &self.elements)
    }
}

impl From<KeySet> for Policy {
    fn from(keys: KeySet) -> Self {
        Policy::new().with_keys(keys)
    }
}

impl From<&str> for Policy {
    fn from(chars: &str) -> Self {
        Policy::new().with_chars(chars)
    }
}

impl From<Vec<PolicyElement>> for Policy {
    fn from(elements: Vec<PolicyElement>) -> Self {
        Self { elements }
    }
}

impl FromIterator<PolicyElement> for Policy {
    fn from_iter<I: IntoIterator<Item = PolicyElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Resolves a sequence of policy elements into one merged key set.
pub fn resolve_policy(layout: &Layout, elements: &[PolicyElement]) -> KeySet {
    merge(elements.iter().map(|element| element.resolve(layout)))
}
