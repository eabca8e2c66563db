pub mod repository;
pub mod service;

pub use repository::SeaOrmCustomerRepository;
pub use service::CustomerService;
