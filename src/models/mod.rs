pub mod forecast;
pub mod outlook;
pub mod recommendation;

pub use forecast::*;
pub use outlook::*;
pub use recommendation::*;
