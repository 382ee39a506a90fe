pub mod entity;
pub mod invariants;

pub use entity::{GarmentId, GarmentRecord};
pub use invariants::{find_duplicate_ids, validate_garment};
