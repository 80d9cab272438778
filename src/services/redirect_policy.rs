use crate::models::{Destination, User};

/// Next screen for an authenticated user: the first unfinished onboarding
/// step, checked in a fixed order, or the dashboard.
pub fn decide(user: &User) -> Destination {
    if !user.profile_set {
        Destination::ProviderOnboarding
    } else if !user.organization_set {
        Destination::OrganizationOnboarding
    } else if !user.provider_rate_set {
        Destination::ProviderRateOnboarding
    } else if !user.availability_set {
        Destination::AvailabilityOnboarding
    } else {
        Destination::Dashboard
    }
}
