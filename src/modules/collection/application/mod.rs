pub mod service;

pub use service::CollectionService;
