pub mod capture_callback;
