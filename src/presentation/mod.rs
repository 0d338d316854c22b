pub mod components;
pub mod landing;
pub mod register;

pub use landing::LandingPage;
pub use register::RegisterPage;
