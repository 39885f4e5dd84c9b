pub mod curve;
pub mod graduation;
pub mod rewards;
pub mod trending;

pub use curve::*;
pub use graduation::*;
pub use rewards::*;
pub use trending::*;
