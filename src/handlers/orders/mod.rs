pub mod list;

pub use list::get_orders;
