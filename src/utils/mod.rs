pub mod date;
pub mod start_case;

pub use date::locale_date;
pub use start_case::start_case;
