//! Whether a method's results travel as a direct return value.
//!
//! The native backend returns at most one value directly. Everything else
//! goes through a trailing `<name>_cb _hidl_cb` callback parameter.

use crate::types::NamedReference;

/// The single result that can be returned directly, if any.
///
/// Elidability of a forward reference is only known after evaluation, so
/// this is recomputed on each call rather than cached.
pub fn elided_result(results: &[NamedReference]) -> Option<&NamedReference> {
    match results {
        [only] if only.ty().is_elidable() => Some(only),
        _ => None,
    }
}

/// True when the native call takes no parameters at all
pub fn has_empty_native_arg_signature(args: &[NamedReference], results: &[NamedReference]) -> bool {
    args.is_empty() && (results.is_empty() || elided_result(results).is_some())
}
