mod check_admin;

pub use check_admin::check_admin_handler;
