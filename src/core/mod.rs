pub mod constants;
pub mod contact;
pub mod effects;
pub mod form;
pub mod keyboard;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use contact::ContactAction;
pub use form::{process_submission, ContactSubmission, FormOutcome, LocalSubmitter};
pub use keyboard::KeyboardNavigation;
pub use nav::{activation_mask, MenuState, PageState};
pub use reveal::RevealTracker;
pub use scroll::{FrameThrottle, ScrollMetrics, ScrollTracker};
