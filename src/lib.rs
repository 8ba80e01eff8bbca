pub mod command;
pub mod dispatch;
pub mod fault;
pub mod logging;
pub mod options;
