use std::io;

use crate::error::AppError;

impl AppError {
    /// Wraps a failed `bind` so the message names the port.
    pub fn bind(port: u16) -> impl FnOnce(io::Error) -> Self {
        move |source| AppError::BindError { port, source }
    }
}
