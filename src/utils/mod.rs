mod gracefulshutdown;
mod logs;

pub use self::gracefulshutdown::shutdown_signal;
pub use self::logs::init_logger;
