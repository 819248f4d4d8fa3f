pub mod category;
pub mod grid;
pub mod period;
pub mod record;
pub mod role;
