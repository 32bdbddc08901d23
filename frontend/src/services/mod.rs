pub mod clipboard;
pub mod date_utils;
pub mod gateway;
pub mod js;
pub mod logging;
pub mod wallet;
