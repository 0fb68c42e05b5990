pub mod availability;
pub mod scheduler;
pub mod slots;
pub mod week_grid;
