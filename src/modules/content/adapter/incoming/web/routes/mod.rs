pub mod get_portfolio;
pub mod replace_portfolio;
pub mod save_raw;

pub use get_portfolio::get_portfolio_handler;
pub use replace_portfolio::replace_portfolio_handler;
pub use save_raw::save_raw_handler;
