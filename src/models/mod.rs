// Data Models
pub mod deletion_plan;
pub mod hashed_image;
pub mod review_state;
pub mod similarity_group;

pub use deletion_plan::DeletionPlan;
pub use review_state::{ReviewRow, ReviewState};
pub use similarity_group::SimilarityGroup;
