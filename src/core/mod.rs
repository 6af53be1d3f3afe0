pub mod gateway;

pub use crate::domain::model::{
    Action, CapturedOrder, CreatedOrder, Envelope, OrderDraft, PaymentRequest, ResponseStatus,
};
pub use crate::domain::ports::PaymentProcessor;
pub use crate::utils::error::Result;
