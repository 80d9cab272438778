pub mod form_field;
pub mod header;

pub use form_field::{bind, FormError, FormField, SubmitButton};
pub use header::Header;
