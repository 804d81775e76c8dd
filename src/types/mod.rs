mod crs;
mod device;
mod direction;
mod point;
mod traffic_light;

pub use crs::*;
pub use device::*;
pub use direction::*;
pub use point::*;
pub use traffic_light::*;
