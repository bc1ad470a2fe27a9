pub mod crop_profile;
pub mod farm_input;
pub mod recommendation;
pub mod region;
pub mod soil;

pub use crop_profile::*;
pub use farm_input::*;
pub use recommendation::*;
pub use region::*;
pub use soil::*;
