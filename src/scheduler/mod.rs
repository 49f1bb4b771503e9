pub mod patron_reload;
