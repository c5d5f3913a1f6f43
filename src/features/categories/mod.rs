pub mod get_category_by_id;
