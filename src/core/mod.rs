pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod integrity;
pub mod log;
pub mod logic;
pub mod mark;
pub mod roster;
pub mod session;
