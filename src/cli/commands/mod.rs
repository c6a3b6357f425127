pub mod check;
mod command_result;
pub mod fix;
pub mod helper;

pub use command_result::*;
