//! Traversal layer: types that can be walked for tagged fields.
//!
//! - [`Reveal`]: implemented by `#[derive(Faces)]` types and std containers
//! - [`Shape`]: the closed set of shapes a walked value can have
//! - [`Revealable`]: user-facing `.reveal()` / `.revealed()` methods
//!
//! ## Container Implementations
//!
//! | Type | Shape | Walks |
//! |------|-------|-------|
//! | `Box<T>`, `Option<T>`, `&mut T` | inner | the inner value |
//! | `Result<T, E>` | inner | whichever side is present |
//! | tuples up to 12 elements | `Structure` if any element is walkable | every element |
//! | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` | `Sequence` | every element |
//! | `HashSet<T>`, `BTreeSet<T>` | `Sequence` | every element, by rebuilding the set |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `Map` | every value, never keys |
//! | primitives, strings, `PhantomData<T>`, `()`, `&T` | `Other` | nothing |
//! | `Duration`, `Instant`, `SystemTime`, `NonZero*`, `std::net` addresses | `Other` | nothing |
//!
//! Set elements cannot be mutated in place, so walking a set takes it apart,
//! reveals each element and reinserts it. Elements that become equal after
//! revealing collapse into one.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    path::PathBuf,
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

use crate::face::{Face, TagMatcher};

/// The kind of value a [`Reveal`] impl walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A type with fields, usually from `#[derive(Faces)]`.
    Structure,
    /// An ordered collection; every element is walked.
    Sequence,
    /// A key-value collection; every value is walked.
    Map,
    /// Anything else. Walking it is a no-op.
    Other,
}

impl Shape {
    /// Returns `true` for shapes that may hold tagged fields.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Returns `self` if traversable, `other` otherwise.
    pub const fn or(self, other: Self) -> Self {
        if self.is_traversable() {
            self
        } else {
            other
        }
    }
}

/// A value that can be walked to reset tagged fields outside a face.
///
/// Derive it with `#[derive(Faces)]`. Indirection impls (`Box`, `Option`,
/// `&mut`) report the shape of what they wrap.
///
/// Public fields of foreign types without `Reveal` must be marked opaque:
///
/// ```compile_fail
/// pub struct Timestamp(pub u64);
///
/// #[derive(faces::Faces)]
/// pub struct Event {
///     pub at: Timestamp,
/// }
/// ```
///
/// ```
/// pub struct Timestamp(pub u64);
///
/// #[derive(faces::Faces)]
/// pub struct Event {
///     #[faces(opaque)]
///     pub at: Timestamp,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Reveal`",
    label = "this type cannot be walked for tagged fields",
    note = "use `#[derive(Faces)]` on the type definition",
    note = "or mark the field `#[faces(opaque)]` so the engine never walks into it"
)]
pub trait Reveal {
    /// The shape of this type, known at compile time.
    const SHAPE: Shape;

    /// Walks `self`, resetting every tagged field `matcher` rejects.
    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized;
}

// =============================================================================
// Revealable - User-facing methods
// =============================================================================

/// Convenience methods for every [`Reveal`] type.
pub trait Revealable: Reveal {
    /// Reveals the face made of `tags` in place. No tags is a no-op.
    fn reveal<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        super::reveal(self, tags);
    }

    /// Reveals `face` in place.
    fn reveal_face(&mut self, face: &Face) {
        super::reveal_face(self, face);
    }

    /// Consumes `self` and returns it with the face made of `tags` revealed.
    #[must_use]
    fn revealed<I, S>(mut self, tags: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        super::reveal(&mut self, tags);
        self
    }
}

impl<T> Revealable for T where T: Reveal + ?Sized {}

// =============================================================================
// Reveal implementations for standard library types
// =============================================================================

macro_rules! impl_reveal_other {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reveal for $ty {
                const SHAPE: Shape = Shape::Other;

                fn reveal_with<M>(&mut self, _matcher: &M)
                where
                    M: TagMatcher + ?Sized,
                {
                }
            }
        )*
    };
}

impl_reveal_other!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    String, str, Cow<'_, str>, Rc<str>, Arc<str>, PathBuf,
);
impl_reveal_other!(Duration, Instant, SystemTime);
impl_reveal_other!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);
impl_reveal_other!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

// Shared references cannot be mutated; whatever they point at stays as is.
impl<T> Reveal for &T
where
    T: ?Sized,
{
    const SHAPE: Shape = Shape::Other;

    fn reveal_with<M>(&mut self, _matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
    }
}

impl<T> Reveal for PhantomData<T>
where
    T: ?Sized,
{
    const SHAPE: Shape = Shape::Other;

    fn reveal_with<M>(&mut self, _matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
    }
}

impl<T> Reveal for Box<T>
where
    T: Reveal + ?Sized,
{
    const SHAPE: Shape = T::SHAPE;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        (**self).reveal_with(matcher);
    }
}

impl<T> Reveal for &mut T
where
    T: Reveal + ?Sized,
{
    const SHAPE: Shape = T::SHAPE;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        (**self).reveal_with(matcher);
    }
}

impl<T> Reveal for Option<T>
where
    T: Reveal,
{
    const SHAPE: Shape = T::SHAPE;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if let Some(value) = self {
            value.reveal_with(matcher);
        }
    }
}

impl<T, E> Reveal for Result<T, E>
where
    T: Reveal,
    E: Reveal,
{
    const SHAPE: Shape = T::SHAPE.or(E::SHAPE);

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        match self {
            Ok(value) => value.reveal_with(matcher),
            Err(err) => err.reveal_with(matcher),
        }
    }
}

macro_rules! impl_reveal_tuple {
    ($($name:ident . $index:tt),+) => {
        impl<$($name),+> Reveal for ($($name,)+)
        where
            $($name: Reveal,)+
        {
            const SHAPE: Shape = if Shape::Other$(.or($name::SHAPE))+.is_traversable() {
                Shape::Structure
            } else {
                Shape::Other
            };

            fn reveal_with<M>(&mut self, matcher: &M)
            where
                M: TagMatcher + ?Sized,
            {
                $(
                    if $name::SHAPE.is_traversable() {
                        self.$index.reveal_with(matcher);
                    }
                )+
            }
        }
    };
}

impl_reveal_tuple!(A.0);
impl_reveal_tuple!(A.0, B.1);
impl_reveal_tuple!(A.0, B.1, C.2);
impl_reveal_tuple!(A.0, B.1, C.2, D.3);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_reveal_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

impl<T> Reveal for [T]
where
    T: Reveal,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !T::SHAPE.is_traversable() {
            return;
        }
        for value in self {
            value.reveal_with(matcher);
        }
    }
}

impl<T, const N: usize> Reveal for [T; N]
where
    T: Reveal,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        self.as_mut_slice().reveal_with(matcher);
    }
}

impl<T> Reveal for Vec<T>
where
    T: Reveal,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        self.as_mut_slice().reveal_with(matcher);
    }
}

impl<T> Reveal for VecDeque<T>
where
    T: Reveal,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !T::SHAPE.is_traversable() {
            return;
        }
        for value in self.iter_mut() {
            value.reveal_with(matcher);
        }
    }
}

impl<T, S> Reveal for HashSet<T, S>
where
    T: Reveal + Hash + Eq,
    S: BuildHasher + Clone,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !T::SHAPE.is_traversable() || self.is_empty() {
            return;
        }
        let hasher = self.hasher().clone();
        let values = std::mem::replace(self, HashSet::with_hasher(hasher));
        self.extend(values.into_iter().map(|mut value| {
            value.reveal_with(matcher);
            value
        }));
    }
}

impl<T> Reveal for BTreeSet<T>
where
    T: Reveal + Ord,
{
    const SHAPE: Shape = Shape::Sequence;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !T::SHAPE.is_traversable() {
            return;
        }
        *self = std::mem::take(self)
            .into_iter()
            .map(|mut value| {
                value.reveal_with(matcher);
                value
            })
            .collect();
    }
}

impl<K, V, S> Reveal for HashMap<K, V, S>
where
    V: Reveal,
{
    const SHAPE: Shape = Shape::Map;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !V::SHAPE.is_traversable() {
            return;
        }
        for value in self.values_mut() {
            value.reveal_with(matcher);
        }
    }
}

impl<K, V> Reveal for BTreeMap<K, V>
where
    V: Reveal,
{
    const SHAPE: Shape = Shape::Map;

    fn reveal_with<M>(&mut self, matcher: &M)
    where
        M: TagMatcher + ?Sized,
    {
        if !V::SHAPE.is_traversable() {
            return;
        }
        for value in self.values_mut() {
            value.reveal_with(matcher);
        }
    }
}
