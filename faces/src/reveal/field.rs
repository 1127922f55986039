//! Per-field decisions emitted by `#[derive(Faces)]`.
//!
//! Generated `reveal_with` bodies call these for each accessible field: first
//! [`walk`] to reveal nested values, then [`reset_unless_visible`] for tagged
//! fields. The order matters only in that nested redaction never depends on
//! the field's own outcome.

use super::traverse::Reveal;
use crate::face::TagMatcher;

/// Walks into `field` unless its shape cannot hold tagged fields.
#[inline]
pub fn walk<T, M>(field: &mut T, matcher: &M)
where
    T: Reveal + ?Sized,
    M: TagMatcher + ?Sized,
{
    if T::SHAPE.is_traversable() {
        field.reveal_with(matcher);
    }
}

/// Resets `field` to its default unless `matcher` accepts one of its `declared` tags.
///
/// Untagged fields (`declared` empty) are always kept.
#[inline]
pub fn reset_unless_visible<T, M>(field: &mut T, declared: &[&str], matcher: &M)
where
    T: Default,
    M: TagMatcher + ?Sized,
{
    if !declared.is_empty() && !matcher.matches(declared) {
        *field = T::default();
    }
}
