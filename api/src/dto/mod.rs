pub mod upload;

pub use upload::DeleteImagesRequest;
