// ============================================================================
// APP - Root component: session restore, hash routing, screen dispatch
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::{PortalContext, PortalContextProvider};
use crate::models::Route;
use crate::viewmodels::SessionViewModel;
use crate::views::{AskView, DashboardView, LoginView, OnboardingView, PaymentView, RegisterView};

fn current_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok().filter(|hash| !hash.is_empty())
}

fn write_hash(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let wanted = format!("#{}", route.path());
    if location.hash().ok().as_deref() != Some(wanted.as_str()) {
        if let Err(e) = location.set_hash(route.path()) {
            log::warn!("⚠️ [ROUTER] Could not update location hash: {:?}", e);
        }
    }
}

/// Route for the current URL: the hash when it names a screen, otherwise
/// wherever the stored session belongs.
fn initial_route(session: &SessionViewModel) -> Route {
    match current_hash().as_deref().and_then(Route::from_path) {
        Some(requested) => session.guard(requested),
        None => session.restore(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let portal = use_memo((), |_| PortalContext::new());
    let session = {
        let sessions = portal.sessions.clone();
        use_memo((), move |_| SessionViewModel::new(sessions))
    };
    let route = {
        let session = session.clone();
        use_state(move || initial_route(&session))
    };

    let navigate = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |requested: Route| {
            let target = session.guard(requested);
            if target != requested {
                log::info!("🔀 [ROUTER] {:?} redirected to {:?}", requested, target);
            }
            write_hash(target);
            route.set(target);
        })
    };

    let logout = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(session.logout()))
    };

    // Back/forward buttons and manual hash edits
    {
        let session = session.clone();
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                let requested = current_hash().as_deref().and_then(Route::from_path);
                let target = match requested {
                    Some(requested) => session.guard(requested),
                    None => session.restore(),
                };
                write_hash(target);
                route.set(target);
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) =
                    window.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                {
                    log::warn!("⚠️ [ROUTER] hashchange listener not installed: {:?}", e);
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window
                        .remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    // Keep the address bar in sync with the first screen
    {
        let current = *route;
        use_effect_with((), move |_| write_hash(current));
    }

    let screen = match *route {
        Route::Login => html! { <LoginView on_navigate={navigate.clone()} /> },
        Route::Register => html! { <RegisterView on_navigate={navigate.clone()} /> },
        step @ (Route::ProviderOnboarding
        | Route::OrganizationOnboarding
        | Route::ProviderRateOnboarding
        | Route::AvailabilityOnboarding) => {
            html! { <OnboardingView key={step.path()} {step} on_logout={logout.clone()} /> }
        }
        Route::Dashboard => html! { <DashboardView on_navigate={navigate.clone()} on_logout={logout.clone()} /> },
        Route::Payment => html! { <PaymentView on_navigate={navigate.clone()} on_logout={logout.clone()} /> },
        Route::Ask => html! { <AskView on_navigate={navigate.clone()} on_logout={logout.clone()} /> },
    };

    html! {
        <PortalContextProvider context={(*portal).clone()}>
            <div class="app" data-route={route.path()}>
                {screen}
            </div>
        </PortalContextProvider>
    }
}
