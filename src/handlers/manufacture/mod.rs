pub mod get_job;

pub use get_job::get_job;
