pub mod connector;
pub mod error;
pub mod field;
pub mod params;
pub mod point;
pub mod surface;
pub mod ticker;

pub use connector::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use point::*;
pub use surface::*;
pub use ticker::*;
