pub mod catalog;
pub mod credentials;
pub mod landing;
pub mod route;
pub mod selector;
