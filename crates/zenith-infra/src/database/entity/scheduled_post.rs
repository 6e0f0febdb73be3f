//! Scheduled post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use super::enums::{MediaKind, PlatformType, PostStatusType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    /// Source article; NULL for posts created from the planner.
    #[sea_orm(nullable)]
    pub article_id: Option<Uuid>,
    pub platform: PlatformType,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(indexed)]
    pub scheduled_at: DateTimeWithTimeZone,
    pub status: PostStatusType,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    #[sea_orm(nullable)]
    pub media_type: Option<MediaKind>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain ScheduledPost.
impl From<Model> for zenith_core::domain::ScheduledPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            origin: model.article_id.into(),
            platform: model.platform.into(),
            content: model.content,
            scheduled_at: model.scheduled_at.into(),
            status: model.status.into(),
            media_url: model.image_url,
            media_type: model.media_type.map(Into::into),
            error_message: model.error_message,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain ScheduledPost to SeaORM ActiveModel.
impl From<zenith_core::domain::ScheduledPost> for ActiveModel {
    fn from(post: zenith_core::domain::ScheduledPost) -> Self {
        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            article_id: Set(post.origin.article_id()),
            platform: Set(post.platform.into()),
            content: Set(post.content),
            scheduled_at: Set(post.scheduled_at.into()),
            status: Set(post.status.into()),
            image_url: Set(post.media_url),
            media_type: Set(post.media_type.map(Into::into)),
            error_message: Set(post.error_message),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
