pub mod categories;
pub mod products;

pub use categories::CategoryDto;
pub use products::ProductDto;
