pub mod manufacture;
pub mod order;
pub mod user;

pub use manufacture::{JobWithProduct, MaterialWithProduct, ManufactureStatusEntry};
pub use order::OrderSummaryRow;
pub use user::User;
