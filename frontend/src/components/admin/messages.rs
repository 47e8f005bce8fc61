use common::model::award::Award;

use super::state::{FailedAction, Field};

#[derive(Clone)]
pub enum Msg {
    UpdateField(Field, String),
    Submit,
    Delete(String),
    AwardsLoaded(Vec<Award>),
    CreateSucceeded,
    DeleteSucceeded,
    RequestFailed(FailedAction, String),
    Retry,
    DismissError,
}
