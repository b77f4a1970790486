pub mod data_set;
pub mod response;
pub mod weather_condition;
pub mod weather_data;
