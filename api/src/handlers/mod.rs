pub mod not_found;

pub use not_found::not_found;
