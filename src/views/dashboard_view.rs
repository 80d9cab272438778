use yew::prelude::*;

use crate::hooks::use_portal;
use crate::models::Route;
use crate::viewmodels::SessionViewModel;
use crate::views::shared::Header;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let portal = use_portal();
    let greeting = {
        let sessions = portal.sessions.clone();
        use_memo((), move |_| {
            SessionViewModel::new(sessions)
                .current()
                .and_then(|session| session.user.display_name())
                .map(|name| format!("Welcome, {}", name))
                .unwrap_or_else(|| "Welcome".to_string())
        })
    };

    let link = |route: Route, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route);
        });
        html! {
            <a class="dashboard-card" href={format!("#{}", route.path())} {onclick}>{label}</a>
        }
    };

    html! {
        <div class="dashboard-screen">
            <Header title={Route::Dashboard.title()} on_logout={props.on_logout.clone()} />
            <main class="dashboard-content">
                <h2>{(*greeting).clone()}</h2>
                <nav class="dashboard-actions">
                    {link(Route::Payment, "Make a payment")}
                    {link(Route::Ask, "Ask a question")}
                </nav>
            </main>
        </div>
    }
}
