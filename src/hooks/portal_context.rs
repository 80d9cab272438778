// ============================================================================
// PORTAL CONTEXT - API client and session store shared by every screen
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::{open_session_store, SessionStore};

#[derive(Clone)]
pub struct PortalContext {
    pub api: Rc<ApiClient>,
    pub sessions: Rc<dyn SessionStore>,
}

impl PortalContext {
    pub fn new() -> Self {
        Self {
            api: Rc::new(ApiClient::new()),
            sessions: open_session_store(),
        }
    }
}

impl Default for PortalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PortalContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
            && Rc::as_ptr(&self.sessions) as *const () == Rc::as_ptr(&other.sessions) as *const ()
    }
}

#[derive(Properties, PartialEq)]
pub struct PortalContextProviderProps {
    pub context: PortalContext,
    pub children: Children,
}

#[function_component(PortalContextProvider)]
pub fn portal_context_provider(props: &PortalContextProviderProps) -> Html {
    html! {
        <ContextProvider<PortalContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<PortalContext>>
    }
}

/// Services of the enclosing `PortalContextProvider`
#[hook]
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("screens are rendered inside PortalContextProvider")
}
