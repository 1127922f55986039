//! The reveal engine: traversal trait, entrypoints and the helpers behind `#[derive(Faces)]`.
//!
//! - **`traverse`**: what can be walked (`Reveal`, `Shape`) and the std container impls
//! - **`field`**: per-field decisions emitted by the derive (`walk`, `reset_unless_visible`)
//!
//! Tag sets and matching live in `crate::face`.

mod field;
mod traverse;

pub use field::{reset_unless_visible, walk};
pub use traverse::{Reveal, Revealable, Shape};

use crate::face::Face;

/// Reveals the face made of `tags`, resetting every tagged field outside it.
///
/// Supplying no tags is a no-op. `value` must be a mutable reference; handing
/// over a value or a shared reference does not compile:
///
/// ```compile_fail
/// use faces::Faces;
///
/// #[derive(Faces)]
/// struct User {
///     #[faces("private")]
///     pub email: String,
/// }
///
/// let user = User { email: "a@example.com".into() };
/// faces::reveal(user, ["public"]);
/// ```
///
/// ```compile_fail
/// use faces::Faces;
///
/// #[derive(Faces)]
/// struct User {
///     #[faces("private")]
///     pub email: String,
/// }
///
/// let user = User { email: "a@example.com".into() };
/// faces::reveal(&user, ["public"]);
/// ```
pub fn reveal<T, I, S>(value: &mut T, tags: I)
where
    T: Reveal + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let face = Face::new(tags);
    reveal_face(value, &face);
}

/// Reveals `face` on `value`. An empty face leaves `value` untouched.
pub fn reveal_face<T>(value: &mut T, face: &Face)
where
    T: Reveal + ?Sized,
{
    if face.is_empty() {
        return;
    }
    value.reveal_with(face);
}
