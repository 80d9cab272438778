// ============================================================================
// ROUTES - Screen identifiers consumed by the app shell
// ============================================================================

use serde::{Deserialize, Serialize};

/// Where the redirection policy sends a freshly authenticated user
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Destination {
    ProviderOnboarding,
    OrganizationOnboarding,
    ProviderRateOnboarding,
    AvailabilityOnboarding,
    Dashboard,
}

/// Every screen the router knows about
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Route {
    Login,
    Register,
    ProviderOnboarding,
    OrganizationOnboarding,
    ProviderRateOnboarding,
    AvailabilityOnboarding,
    Dashboard,
    Payment,
    Ask,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::ProviderOnboarding => Route::ProviderOnboarding,
            Destination::OrganizationOnboarding => Route::OrganizationOnboarding,
            Destination::ProviderRateOnboarding => Route::ProviderRateOnboarding,
            Destination::AvailabilityOnboarding => Route::AvailabilityOnboarding,
            Destination::Dashboard => Route::Dashboard,
        }
    }
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Register,
        Route::ProviderOnboarding,
        Route::OrganizationOnboarding,
        Route::ProviderRateOnboarding,
        Route::AvailabilityOnboarding,
        Route::Dashboard,
        Route::Payment,
        Route::Ask,
    ];

    /// Hash path, without the leading `#`
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ProviderOnboarding => "/onboarding/provider",
            Route::OrganizationOnboarding => "/onboarding/organization",
            Route::ProviderRateOnboarding => "/onboarding/rate",
            Route::AvailabilityOnboarding => "/onboarding/availability",
            Route::Dashboard => "/dashboard",
            Route::Payment => "/payment",
            Route::Ask => "/ask",
        }
    }

    /// Accepts `#/login`, `/login` or `login`; trailing slashes are ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let cleaned = path.trim().trim_start_matches('#').trim_end_matches('/');
        let normalized = if cleaned.starts_with('/') {
            cleaned.to_string()
        } else {
            format!("/{}", cleaned)
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn requires_session(self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Register => "Create account",
            Route::ProviderOnboarding => "Complete your profile",
            Route::OrganizationOnboarding => "Add your organization",
            Route::ProviderRateOnboarding => "Set your consultation rate",
            Route::AvailabilityOnboarding => "Set your availability",
            Route::Dashboard => "Dashboard",
            Route::Payment => "Payment",
            Route::Ask => "Ask",
        }
    }
}
