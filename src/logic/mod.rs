pub mod best_window;
pub mod cache;
pub mod calculations;
pub mod daily_outlook;
pub mod reason;
pub mod spray_window;
pub mod thresholds;

pub use daily_outlook::daily_outlook;
pub use spray_window::SprayWindowService;
pub use thresholds::THRESHOLDS;
