use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let back = props.on_back.as_ref().map(|on_back| {
        let on_back = on_back.clone();
        html! {
            <button class="btn-back" onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}>
                {"← Back"}
            </button>
        }
    });
    let on_logout = {
        let callback = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <header class="app-header">
            {back}
            <h1>{props.title.clone()}</h1>
            <button class="btn-logout" onclick={on_logout}>{"Log out"}</button>
        </header>
    }
}
