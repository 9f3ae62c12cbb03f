use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub image: Option<String>,
    pub link: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Resource for Achievement {
    const NAME: &'static str = "achievements";

    type Create = NewAchievement;
    type Patch = AchievementPatch;

    fn from_create(input: NewAchievement) -> Self {
        let now = Utc::now();
        Achievement {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            image: input.image,
            link: input.link,
            date: input.date,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: AchievementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(link) = patch.link {
            self.link = Some(link);
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
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
