pub mod audit;
pub mod collection;
pub mod content;
pub mod watch;
