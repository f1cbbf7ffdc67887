pub mod file;
pub mod openweathermap;
pub mod synthetic;

pub use file::parse_readings;
pub use openweathermap::OpenWeatherMapClient;
pub use synthetic::diurnal_forecast;
