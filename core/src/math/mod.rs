pub mod median;
pub mod trapezoid;

pub use median::MedianFilter;
pub use trapezoid::TrapezoidShape;
