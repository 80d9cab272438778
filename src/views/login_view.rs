use yew::prelude::*;

use crate::hooks::{use_portal, use_reactive};
use crate::models::{Credentials, Route};
use crate::viewmodels::LoginViewModel;
use crate::views::shared::{bind, FormError, FormField, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let portal = use_portal();
    let vm = {
        let portal = portal.clone();
        use_memo((), move |_| LoginViewModel::new(portal.api.clone(), portal.sessions.clone()))
    };
    let status = use_reactive(vm.form().reactive());

    let phone_number = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let vm = vm.clone();
        let phone_number = phone_number.clone();
        let password = password.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let vm = vm.clone();
            let on_navigate = on_navigate.clone();
            let credentials = Credentials {
                phone_number: (*phone_number).clone(),
                password: (*password).clone(),
            };
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(route) = vm.submit(credentials).await {
                    on_navigate.emit(route);
                }
            });
        })
    };

    let go_register = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Register);
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{Route::Login.title()}</h1>
                <form class="auth-form" {onsubmit} novalidate=true>
                    <FormField
                        id="phone_number"
                        label="Phone number"
                        input_type="tel"
                        placeholder="0803 123 4567"
                        autocomplete={Some(AttrValue::Static("tel"))}
                        value={(*phone_number).clone()}
                        on_change={bind(&phone_number)}
                        disabled={status.submitting}
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete={Some(AttrValue::Static("current-password"))}
                        value={(*password).clone()}
                        on_change={bind(&password)}
                        disabled={status.submitting}
                    />
                    <FormError message={status.error.clone()} />
                    <SubmitButton label="Sign in" busy_label="Signing in..." busy={status.submitting} />
                </form>
                <p class="auth-switch">
                    {"No account yet? "}
                    <a href={format!("#{}", Route::Register.path())} onclick={go_register}>{"Create one"}</a>
                </p>
            </div>
        </div>
    }
}
