pub mod country;
pub mod defaults;
pub mod device;
pub mod email;
pub mod impact;

pub use country::*;
pub use device::*;
pub use email::*;
pub use impact::*;
