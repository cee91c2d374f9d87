pub mod dropdown;
pub mod filter;
pub mod pagination;
pub mod store;
