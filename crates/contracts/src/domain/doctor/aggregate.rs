use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Member of the medical team. Reference data, keyed by a stable slug so the
/// booking form and seeded appointments can point at it without a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Stable slug, e.g. "dr-nadia"
    pub id: String,
    pub name: String,
    pub speciality: String,
    /// Portrait URL for the team section
    pub image: String,
}

impl Doctor {
    pub fn new(id: &str, name: &str, speciality: &str, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            speciality: speciality.to_string(),
            image: image.to_string(),
        }
    }
}
