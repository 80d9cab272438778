use yew::prelude::*;

use crate::hooks::{use_portal, use_reactive};
use crate::models::Route;
use crate::viewmodels::{RegisterForm, RegisterViewModel};
use crate::views::shared::{bind, FormError, FormField, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let portal = use_portal();
    let vm = {
        let portal = portal.clone();
        use_memo((), move |_| RegisterViewModel::new(portal.api.clone(), portal.sessions.clone()))
    };
    let status = use_reactive(vm.form().reactive());

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let phone_number = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);

    let onsubmit = {
        let vm = vm.clone();
        let on_navigate = props.on_navigate.clone();
        let fields = (
            first_name.clone(),
            last_name.clone(),
            email.clone(),
            phone_number.clone(),
            password.clone(),
            confirm_password.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (first_name, last_name, email, phone_number, password, confirm_password) = &fields;
            let input = RegisterForm {
                first_name: (**first_name).clone(),
                last_name: (**last_name).clone(),
                email: (**email).clone(),
                phone_number: (**phone_number).clone(),
                password: (**password).clone(),
                confirm_password: (**confirm_password).clone(),
            };
            let vm = vm.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(route) = vm.submit(input).await {
                    on_navigate.emit(route);
                }
            });
        })
    };

    let go_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Login);
        })
    };

    let busy = status.submitting;
    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{Route::Register.title()}</h1>
                <form class="auth-form" {onsubmit} novalidate=true>
                    <div class="form-row">
                        <FormField id="first_name" label="First name"
                            autocomplete={Some(AttrValue::Static("given-name"))}
                            value={(*first_name).clone()} on_change={bind(&first_name)} disabled={busy} />
                        <FormField id="last_name" label="Last name"
                            autocomplete={Some(AttrValue::Static("family-name"))}
                            value={(*last_name).clone()} on_change={bind(&last_name)} disabled={busy} />
                    </div>
                    <FormField id="email" label="Email" input_type="email"
                        autocomplete={Some(AttrValue::Static("email"))}
                        value={(*email).clone()} on_change={bind(&email)} disabled={busy} />
                    <FormField id="phone_number" label="Phone number" input_type="tel"
                        placeholder="0803 123 4567"
                        autocomplete={Some(AttrValue::Static("tel"))}
                        value={(*phone_number).clone()} on_change={bind(&phone_number)} disabled={busy} />
                    <FormField id="password" label="Password" input_type="password"
                        autocomplete={Some(AttrValue::Static("new-password"))}
                        value={(*password).clone()} on_change={bind(&password)} disabled={busy} />
                    <FormField id="confirm_password" label="Confirm password" input_type="password"
                        autocomplete={Some(AttrValue::Static("new-password"))}
                        value={(*confirm_password).clone()} on_change={bind(&confirm_password)} disabled={busy} />
                    <FormError message={status.error.clone()} />
                    <SubmitButton label="Create account" busy_label="Creating account..." busy={busy} />
                </form>
                <p class="auth-switch">
                    {"Already registered? "}
                    <a href={format!("#{}", Route::Login.path())} onclick={go_login}>{"Sign in"}</a>
                </p>
            </div>
        </div>
    }
}
