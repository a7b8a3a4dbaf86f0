//! Intrinsic-element catalogue resolution.
//!
//! The platform's native-element prop catalogue lives on the
//! `JSX.IntrinsicElements` interface: one member per element name, each
//! pointing at the attribute interface for that element. Resolution is
//! best-effort; a program without the namespace simply has no catalogue.

use log::debug;

use super::checker::{TypeChecker, TypeProperty, TypeRef};

const JSX_NAMESPACE: &str = "JSX";
const INTRINSIC_ELEMENTS_EXPORT: &str = "IntrinsicElements";

/// Locate the intrinsic-elements interface anywhere in the program.
pub fn resolve_intrinsic_elements<C: TypeChecker + ?Sized>(checker: &C) -> Option<TypeRef> {
    let resolved = checker.resolve_namespace_export(JSX_NAMESPACE, INTRINSIC_ELEMENTS_EXPORT);
    if resolved.is_none() {
        debug!("no JSX.IntrinsicElements declaration in program; intrinsic prop augmentation unavailable");
    }
    resolved
}

/// The prop bag of one intrinsic element, or `None` when the catalogue has
/// no member for that element name.
pub fn intrinsic_props<C: TypeChecker + ?Sized>(
    checker: &C,
    intrinsics: &TypeRef,
    element: &str,
) -> Option<Vec<TypeProperty>> {
    let member = checker
        .properties_of_type(intrinsics)
        .into_iter()
        .find(|member| member.name == element)?;
    Some(checker.properties_of_type(&member.ty))
}
