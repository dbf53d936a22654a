pub mod interview;
pub mod resume;
pub mod role;
