use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserOut {
    pub name: String,
    pub email: String,
}
