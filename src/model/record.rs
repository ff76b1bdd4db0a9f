use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One portfolio item found on a profile page
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Stable identifier derived from `url`
    pub id: u64,

    /// Project title (may be empty)
    pub name: String,

    /// Absolute project URL, unique within its profile
    pub url: String,

    /// Cover image URL or empty string
    pub cover_image: String,
}

/// One freelancer profile
///
/// Built in one step by [`crate::extract::extract_profile`]. The completed
/// projects count is not stored: it is always `projects.len()` and is only
/// materialized when the record is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub url: String,
    pub location: String,
    pub country: String,
    pub is_available_for_freelance_services: bool,
    pub categories: Vec<String>,
    pub reviews: Vec<String>,
    pub profile_image: String,
    pub projects: Vec<ProjectRecord>,
}

impl ProfileRecord {
    /// Number of portfolio items found on the profile
    pub fn completed_projects_count(&self) -> usize {
        self.projects.len()
    }
}

impl Serialize for ProfileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProfileRecord", 12)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field("displayName", &self.display_name)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field(
            "isAvailableForFreelanceServices",
            &self.is_available_for_freelance_services,
        )?;
        state.serialize_field("categories", &self.categories)?;
        state.serialize_field("completedProjectsCount", &self.completed_projects_count())?;
        state.serialize_field("reviews", &self.reviews)?;
        state.serialize_field("profileImage", &self.profile_image)?;
        state.serialize_field("projects", &self.projects)?;
        state.end()
    }
}
