use serde::Deserialize;
use thiserror::Error;

use crate::domain::order::OrderStatus;

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing order forms.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// The submitted status is not one of the known values.
    #[error("unknown order status `{value}`")]
    UnknownStatus { value: String },
}

/// Form payload emitted by the status buttons on the orders screens.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusForm {
    /// Requested status in storage form.
    pub status: String,
}

impl UpdateOrderStatusForm {
    /// Parses the requested status strictly; unknown values are rejected
    /// rather than defaulted.
    pub fn into_status(self) -> OrderFormResult<OrderStatus> {
        let value = self.status.trim().to_ascii_lowercase();
        OrderStatus::parse(&value).ok_or(OrderFormError::UnknownStatus { value })
    }
}
