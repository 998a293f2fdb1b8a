use crate::constants::EXTERNAL_LINK_SELECTOR;
use crate::core::hardened_rel;
use crate::dom;
use web_sys as web;

/// Give new-context anchors without a `rel` the safe default. Returns how many
/// were changed. Only the links present now are scanned.
pub fn harden_external_links(document: &web::Document) -> usize {
    let mut hardened = 0;
    for link in dom::query_elements(document, EXTERNAL_LINK_SELECTOR) {
        let existing = link.get_attribute("rel");
        if let Some(rel) = hardened_rel(existing.as_deref()) {
            if link.set_attribute("rel", rel).is_ok() {
                hardened += 1;
            }
        }
    }
    hardened
}
