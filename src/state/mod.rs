// ============================================================================
// STATE MODULE - Rc<RefCell> state with change notifications
// ============================================================================

pub mod reactivity;
pub mod form_state;

pub use reactivity::*;
pub use form_state::*;
