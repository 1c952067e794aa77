pub mod cantons;
pub mod export;
pub mod fetch;
pub mod process;
