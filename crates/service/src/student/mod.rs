pub mod repository;
pub mod service;

pub use repository::SeaOrmStudentRepository;
pub use service::StudentService;
