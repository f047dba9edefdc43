pub mod hazard;
pub mod polytope;
pub mod region;
pub mod state;


pub use hazard::*;
pub use polytope::*;
pub use region::*;
pub use state::*;
