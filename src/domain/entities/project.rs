use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub live_link: Option<String>,
    pub code_link: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub image: Option<String>,
    pub live_link: Option<String>,
    pub code_link: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live_link: Option<String>,
    pub code_link: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl Resource for Project {
    const NAME: &'static str = "projects";

    type Create = NewProject;
    type Patch = ProjectPatch;

    fn from_create(input: NewProject) -> Self {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            image: input.image,
            live_link: input.live_link,
            code_link: input.code_link,
            technologies: input.technologies,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(live_link) = patch.live_link {
            self.live_link = Some(live_link);
        }
        if let Some(code_link) = patch.code_link {
            self.code_link = Some(code_link);
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
