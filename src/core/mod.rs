pub mod client;
pub mod retry;

pub use crate::domain::model::{ListingStockDto, WorkingHoursStatus};
pub use crate::domain::ports::TokenProvider;
pub use crate::utils::error::Result;
