//! Deep-clone capability
//!
//! [`DeepClone`] makes each type's copy semantics explicit: leaf types copy
//! their scalar fields into a fresh value, composite types additionally
//! replace every owned child with that child's own `deep_clone`. Nothing
//! mutable is ever shared between an original and its copy.
//!
//! Claiming the capability is the whole contract - an implementation must
//! exist for the claim to compile, so there is no runtime "clone not
//! supported" path to handle or swallow.

/// Produce an independent copy of a value and everything it owns.
///
/// Cloning is synchronous, always succeeds for well-formed input, and never
/// mutates the source.
pub trait DeepClone {
    fn deep_clone(&self) -> Self;
}

/// An absent child clones to an absent child; cloning never fabricates one.
impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Self {
        self.as_ref().map(DeepClone::deep_clone)
    }
}

/// A fresh collection of the same length and order, each element cloned
/// individually; collection identity is never shared with the original.
impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}
