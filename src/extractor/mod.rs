pub mod scene_extractor;
pub mod entity_extractor;

pub use scene_extractor::{
    extract_scenes,
    extract_scenes_with,
    find_scene_at,
    is_structural_heading,
};
pub use entity_extractor::{extract_entities, extract_entities_with, EntityIndex};
