pub mod landing;
pub mod models;
