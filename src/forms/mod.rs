pub mod mapper;
pub mod schema;

pub use mapper::FormMapper;
