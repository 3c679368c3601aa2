pub mod custom_make_span;
pub mod custom_on_response;
