pub mod debounce;
pub mod links;
pub mod nav;
pub mod spotlight;

pub use debounce::{Debouncer, TimerHost};
pub use links::hardened_rel;
pub use nav::{fragment_id, initial_section, topmost_visible, NavIndex, SectionSighting};
pub use spotlight::{px, SpotlightGate};
