pub mod escape_time;
