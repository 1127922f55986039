//! Visible-tag sets and the matching seam used during traversal.
//!
//! A [`Face`] is the set of tags a caller wants revealed. Generated `Reveal`
//! impls never look at it directly; they ask a [`TagMatcher`] whether a field's
//! declared tags keep it visible.

use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

/// Decides whether a tagged field stays visible.
///
/// Implemented by [`Face`] and by slices of string-likes. Implement it yourself
/// for custom matching (e.g., tag hierarchies where `admin` implies `internal`).
pub trait TagMatcher {
    /// Returns `true` if a field declared with `declared` tags keeps its value.
    ///
    /// `declared` is never empty when called by the engine: untagged fields are
    /// always kept without consulting the matcher.
    fn matches(&self, declared: &[&str]) -> bool;
}

impl<T> TagMatcher for &T
where
    T: TagMatcher + ?Sized,
{
    fn matches(&self, declared: &[&str]) -> bool {
        (**self).matches(declared)
    }
}

impl<S> TagMatcher for [S]
where
    S: AsRef<str>,
{
    fn matches(&self, declared: &[&str]) -> bool {
        self.is_empty()
            || declared
                .iter()
                .any(|tag| self.iter().any(|visible| visible.as_ref() == *tag))
    }
}

/// The set of tags being revealed.
///
/// An empty face means "no filtering requested": matching always succeeds and
/// [`crate::reveal_face`] returns without walking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Face {
    tags: BTreeSet<String>,
}

impl Face {
    /// Builds a face from individual tags.
    ///
    /// Each tag is trimmed and blank tags are dropped, the same way `parse` and
    /// field attributes treat list segments.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .filter_map(|tag| {
                    let tag = tag.as_ref().trim();
                    (!tag.is_empty()).then(|| tag.to_owned())
                })
                .collect(),
        }
    }

    /// The empty face. Revealing it leaves every value untouched.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses a comma-separated tag list, e.g. a face name taken from a request header.
    ///
    /// Segments are trimmed and empty segments dropped, matching how field
    /// attributes are read.
    pub fn parse(list: &str) -> Self {
        Self::new(split_tag_list(list))
    }

    /// Adds `tag` to the face. A blank tag is ignored.
    #[must_use]
    pub fn with(mut self, tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() {
            self.tags.insert(tag.to_owned());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Iterates the tags in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(String::as_str)
    }
}

pub(crate) fn split_tag_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

impl TagMatcher for Face {
    fn matches(&self, declared: &[&str]) -> bool {
        self.is_empty() || declared.iter().any(|tag| self.contains(tag))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

impl FromStr for Face {
    type Err = Infallible;

    fn from_str(list: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(list))
    }
}

impl From<&str> for Face {
    fn from(list: &str) -> Self {
        Self::parse(list)
    }
}

impl<S> FromIterator<S> for Face
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
