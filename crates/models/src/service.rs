use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::is_url_safe_slug;

/// One frequently-asked question shown on a service detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct FaqList(pub Vec<Faq>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct BrandList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    pub image_url: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub brands: BrandList,
    #[sea_orm(column_type = "JsonBinary")]
    pub faqs: FaqList,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    slug: &str,
    description: &str,
    image_url: &str,
    brands: Vec<String>,
    faqs: Vec<Faq>,
) -> Result<Model, errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required".into()));
    }
    if !is_url_safe_slug(slug) {
        return Err(errors::ModelError::Validation(format!("slug not URL-safe: {slug}")));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        description: Set(description.to_string()),
        image_url: Set(image_url.to_string()),
        brands: Set(BrandList(brands)),
        faqs: Set(FaqList(faqs)),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
