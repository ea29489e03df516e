pub mod hilbert;
pub mod index;

// Re-exports for convenience
pub use hilbert::{index_to_point, pixel_to_node_id, point_to_index};
pub use index::NodeIndex;
