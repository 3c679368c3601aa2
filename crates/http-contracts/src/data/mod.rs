pub mod implementation;

use serde::Serialize;

/// A message paired with a payload. Serializes as `{"message": .., "data": ..}`
/// with the keys in that order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}
