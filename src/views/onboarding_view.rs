use yew::prelude::*;

use crate::models::Route;
use crate::views::shared::Header;

/// Position in the four-step onboarding sequence, `None` for other routes
pub fn onboarding_step(route: Route) -> Option<usize> {
    match route {
        Route::ProviderOnboarding => Some(1),
        Route::OrganizationOnboarding => Some(2),
        Route::ProviderRateOnboarding => Some(3),
        Route::AvailabilityOnboarding => Some(4),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct OnboardingViewProps {
    pub step: Route,
    pub on_logout: Callback<()>,
}

#[function_component(OnboardingView)]
pub fn onboarding_view(props: &OnboardingViewProps) -> Html {
    let position = onboarding_step(props.step).unwrap_or(1);

    html! {
        <div class="onboarding-screen">
            <Header title={props.step.title()} on_logout={props.on_logout.clone()} />
            <main class="onboarding-content">
                <p class="onboarding-progress">{format!("Step {} of 4", position)}</p>
                <ol class="onboarding-steps">
                    { for (1..=4).map(|n| html! {
                        <li class={classes!((n < position).then_some("done"), (n == position).then_some("current"))}></li>
                    }) }
                </ol>
                <h2>{props.step.title()}</h2>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_steps_are_ordered() {
        assert_eq!(onboarding_step(Route::ProviderOnboarding), Some(1));
        assert_eq!(onboarding_step(Route::OrganizationOnboarding), Some(2));
        assert_eq!(onboarding_step(Route::ProviderRateOnboarding), Some(3));
        assert_eq!(onboarding_step(Route::AvailabilityOnboarding), Some(4));
    }

    #[test]
    fn other_routes_have_no_step() {
        assert_eq!(onboarding_step(Route::Dashboard), None);
        assert_eq!(onboarding_step(Route::Login), None);
    }
}
