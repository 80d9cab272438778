use yew::prelude::*;

use crate::state::ReactiveState;

/// Current value of a viewmodel's `ReactiveState`; the component re-renders
/// whenever it changes and unsubscribes on unmount.
#[hook]
pub fn use_reactive<T>(state: &ReactiveState<T>) -> T
where
    T: Clone + 'static,
{
    let update = use_force_update();
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let id = state.subscribe(move || update.force_update());
            move || state.unsubscribe(id)
        });
    }
    state.get()
}
