/// Relation applied to new-context anchors: no `window.opener`, no referrer.
pub const SAFE_REL: &str = "noopener noreferrer";

/// `rel` value to set on an anchor opening a new browsing context.
///
/// Only a missing attribute is filled in; any declared value, even an empty
/// one, is the author's choice and is left alone.
#[inline]
pub fn hardened_rel(existing: Option<&str>) -> Option<&'static str> {
    match existing {
        Some(_) => None,
        None => Some(SAFE_REL),
    }
}
