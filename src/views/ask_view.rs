use yew::prelude::*;

use crate::hooks::{use_portal, use_reactive};
use crate::models::{ChatMessage, ChatRole, Route};
use crate::viewmodels::AskViewModel;
use crate::views::shared::{FormError, Header, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct AskViewProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn render_message(message: &ChatMessage) -> Html {
    let class = match message.role {
        ChatRole::User => "chat-message from-user",
        ChatRole::Assistant => "chat-message from-assistant",
    };
    html! {
        <li key={message.id.to_string()} {class}>
            <p class="chat-text">{message.text.clone()}</p>
            <time class="chat-time" datetime={message.sent_at.to_rfc3339()}>
                {message.sent_at.format("%H:%M").to_string()}
            </time>
        </li>
    }
}

#[function_component(AskView)]
pub fn ask_view(props: &AskViewProps) -> Html {
    let portal = use_portal();
    let vm = {
        let portal = portal.clone();
        use_memo((), move |_| AskViewModel::new(portal.api.clone(), portal.sessions.clone()))
    };
    let status = use_reactive(vm.form().reactive());
    let transcript = use_reactive(vm.transcript());

    let question = use_state(String::new);

    let oninput = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let onsubmit = {
        let vm = vm.clone();
        let question = question.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let vm = vm.clone();
            let question = question.clone();
            let text = (*question).clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.submit(text).await {
                    question.set(String::new());
                }
            });
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(Route::Dashboard))
    };

    html! {
        <div class="ask-screen">
            <Header title={Route::Ask.title()} on_back={Some(on_back)} on_logout={props.on_logout.clone()} />
            <main class="ask-content">
                if transcript.is_empty() {
                    <p class="chat-empty">{"Ask anything about your health or your account."}</p>
                } else {
                    <ul class="chat-transcript" aria-live="polite">
                        { for transcript.iter().map(render_message) }
                    </ul>
                }
                <form class="chat-form" {onsubmit}>
                    <input
                        id="question"
                        type="text"
                        placeholder="Type your question"
                        value={(*question).clone()}
                        disabled={status.submitting}
                        {oninput}
                    />
                    <SubmitButton label="Send" busy_label="Thinking..." busy={status.submitting} />
                </form>
                <FormError message={status.error.clone()} />
            </main>
        </div>
    }
}
