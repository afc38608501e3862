//! Value objects shared by the catalog entities.

pub mod object_id;

pub use object_id::ObjectId;
