pub mod portal_context;
pub mod use_reactive;

pub use portal_context::{use_portal, PortalContext, PortalContextProvider};
pub use use_reactive::use_reactive;
