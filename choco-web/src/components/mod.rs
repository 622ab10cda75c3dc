pub mod activation;
pub mod cover;
pub mod overlay;
pub mod sections;
pub mod stars;

pub use activation::Activation;
