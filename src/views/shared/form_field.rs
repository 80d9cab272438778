use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input bound to a `String` state
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                required=true
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormErrorProps {
    pub message: Option<String>,
}

#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class="form-error" role="alert">{message.clone()}</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub busy_label: AttrValue,
    pub busy: bool,
}

/// Disabled with a loading label while a request is in flight
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class={classes!("btn-primary", props.busy.then_some("is-loading"))} disabled={props.busy}>
            if props.busy {
                <span class="spinner" aria-hidden="true"></span>
                <span class="btn-text">{props.busy_label.clone()}</span>
            } else {
                <span class="btn-text">{props.label.clone()}</span>
            }
        </button>
    }
}

/// `Callback<String>` writing into a `UseStateHandle<String>`
pub fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| state.set(value))
}
