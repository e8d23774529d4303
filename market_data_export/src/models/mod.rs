pub mod bar;
pub mod exchange_time;
pub mod request_params;
