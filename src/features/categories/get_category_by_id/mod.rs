mod endpoint;
mod handler;

pub use endpoint::{ROUTE_NAME, ROUTE_PATH, descriptor, map_get_category_by_id};
pub use handler::{CategoryResponse, GetCategoryByIdHandler};
