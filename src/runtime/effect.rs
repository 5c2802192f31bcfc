use crate::submit::SubmitRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Submit(SubmitRequest),
    RequestRender,
}
