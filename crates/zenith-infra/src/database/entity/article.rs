//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use super::enums::{AutoPostStatusType, PlatformType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(nullable)]
    pub original_link: Option<String>,
    pub auto_post_status: AutoPostStatusType,
    #[sea_orm(nullable)]
    pub auto_posted_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(nullable)]
    pub auto_post_platform: Option<PlatformType>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scheduled_post::Entity")]
    ScheduledPost,
}

impl Related<super::scheduled_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduledPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for zenith_core::domain::Article {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            original_link: model.original_link,
            auto_post_status: model.auto_post_status.into(),
            auto_posted_at: model.auto_posted_at.map(Into::into),
            auto_post_platform: model.auto_post_platform.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<zenith_core::domain::Article> for ActiveModel {
    fn from(article: zenith_core::domain::Article) -> Self {
        Self {
            id: Set(article.id),
            user_id: Set(article.user_id),
            title: Set(article.title),
            original_link: Set(article.original_link),
            auto_post_status: Set(article.auto_post_status.into()),
            auto_posted_at: Set(article.auto_posted_at.map(Into::into)),
            auto_post_platform: Set(article.auto_post_platform.map(Into::into)),
            created_at: Set(article.created_at.into()),
            updated_at: Set(article.updated_at.into()),
        }
    }
}
