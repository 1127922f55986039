//! Type utilities for the derive macro.

/// Checks if a type is a recognized leaf: a primitive, `String` or `PhantomData<_>`.
///
/// Leaf fields can be reset but never hold nested tagged fields, so no traversal
/// code is emitted for them.
///
/// This is intentionally conservative - qualified paths and type aliases are not
/// recognized and fall back to being walked through `Reveal`.
pub(crate) fn is_leaf_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        // Absolute path (e.g., ::std::primitive::i32) - not a simple leaf
        return false;
    }
    if path.path.segments.len() != 1 {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident == "PhantomData" {
        return true;
    }
    if !segment.arguments.is_empty() {
        // Generic type (e.g., Vec<T>) - not a leaf
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
            | "String"
    )
}
