use yew::prelude::*;

use crate::hooks::{use_portal, use_reactive};
use crate::models::Route;
use crate::utils::constants::MSG_TRANSPORT_FAILURE;
use crate::viewmodels::{PaymentForm, PaymentViewModel};
use crate::views::shared::{bind, FormError, FormField, Header, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct PaymentViewProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(PaymentView)]
pub fn payment_view(props: &PaymentViewProps) -> Html {
    let portal = use_portal();
    let vm = {
        let portal = portal.clone();
        use_memo((), move |_| PaymentViewModel::new(portal.api.clone(), portal.sessions.clone()))
    };
    let status = use_reactive(vm.form().reactive());

    let defaults = vm.defaults();
    let email = use_state(|| defaults.email.clone());
    let phone_number = use_state(|| defaults.phone_number.clone());
    let amount = use_state(String::new);

    let onsubmit = {
        let vm = vm.clone();
        let email = email.clone();
        let phone_number = phone_number.clone();
        let amount = amount.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = PaymentForm {
                email: (*email).clone(),
                phone_number: (*phone_number).clone(),
                amount: (*amount).clone(),
            };
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(url) = vm.submit(input).await else {
                    return;
                };
                let redirected = web_sys::window()
                    .map(|window| window.location().set_href(&url).is_ok())
                    .unwrap_or(false);
                if !redirected {
                    log::error!("❌ [PAYMENT] Could not redirect to {}", url);
                    vm.form().fail(MSG_TRANSPORT_FAILURE);
                }
            });
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(Route::Dashboard))
    };

    let busy = status.submitting;
    html! {
        <div class="payment-screen">
            <Header title={Route::Payment.title()} on_back={Some(on_back)} on_logout={props.on_logout.clone()} />
            <main class="payment-content">
                <form class="payment-form" {onsubmit} novalidate=true>
                    <FormField id="email" label="Email" input_type="email"
                        autocomplete={Some(AttrValue::Static("email"))}
                        value={(*email).clone()} on_change={bind(&email)} disabled={busy} />
                    <FormField id="phone_number" label="Phone number" input_type="tel"
                        autocomplete={Some(AttrValue::Static("tel"))}
                        value={(*phone_number).clone()} on_change={bind(&phone_number)} disabled={busy} />
                    <FormField id="amount" label="Amount" input_type="text"
                        placeholder="5,000"
                        value={(*amount).clone()} on_change={bind(&amount)} disabled={busy} />
                    <FormError message={status.error.clone()} />
                    <SubmitButton label="Pay now" busy_label="Redirecting..." busy={busy} />
                </form>
            </main>
        </div>
    }
}
