// Shared constants: storage keys, API paths, user-facing fallback messages

/// localStorage key holding the serialized AuthResult
pub const STORAGE_KEY_SESSION: &str = "carePortal_session";

pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const PAYMENT_PATH: &str = "/payments/initialize/";
pub const ASK_PATH: &str = "/ask/";

pub const TENANT_HEADER: &str = "X-Tenant-Domain";

pub const MSG_TRANSPORT_FAILURE: &str = "An error occurred. Please try again.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed";
pub const MSG_PAYMENT_FAILED: &str = "Unable to initiate payment";
pub const MSG_ASK_FAILED: &str = "Unable to get an answer right now";
pub const MSG_SESSION_EXPIRED: &str = "Please log in again";

pub const MIN_PASSWORD_LEN: usize = 8;
