pub mod implementations;

/// Opens one `Request` span per HTTP request.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomMakeSpan;
