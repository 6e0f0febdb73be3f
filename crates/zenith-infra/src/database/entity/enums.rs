//! Database enums, stored as strings and mapped onto the domain enums.

use sea_orm::entity::prelude::*;

use zenith_core::domain::{AutoPostStatus, MediaType, Platform, PostStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PlatformType {
    #[sea_orm(string_value = "Facebook")]
    Facebook,
    #[sea_orm(string_value = "Instagram")]
    Instagram,
    #[sea_orm(string_value = "TikTok")]
    TikTok,
    #[sea_orm(string_value = "LinkedIn")]
    LinkedIn,
    #[sea_orm(string_value = "WordPress")]
    WordPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PostStatusType {
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Published")]
    Published,
    #[sea_orm(string_value = "Error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MediaKind {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AutoPostStatusType {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SUCCESS")]
    Success,
    #[sea_orm(string_value = "ERROR")]
    Error,
    #[sea_orm(string_value = "NONE")]
    None,
}

impl From<PlatformType> for Platform {
    fn from(value: PlatformType) -> Self {
        match value {
            PlatformType::Facebook => Platform::Facebook,
            PlatformType::Instagram => Platform::Instagram,
            PlatformType::TikTok => Platform::TikTok,
            PlatformType::LinkedIn => Platform::LinkedIn,
            PlatformType::WordPress => Platform::WordPress,
        }
    }
}

impl From<Platform> for PlatformType {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Facebook => PlatformType::Facebook,
            Platform::Instagram => PlatformType::Instagram,
            Platform::TikTok => PlatformType::TikTok,
            Platform::LinkedIn => PlatformType::LinkedIn,
            Platform::WordPress => PlatformType::WordPress,
        }
    }
}

impl From<PostStatusType> for PostStatus {
    fn from(value: PostStatusType) -> Self {
        match value {
            PostStatusType::Scheduled => PostStatus::Scheduled,
            PostStatusType::Draft => PostStatus::Draft,
            PostStatusType::Published => PostStatus::Published,
            PostStatusType::Error => PostStatus::Error,
        }
    }
}

impl From<PostStatus> for PostStatusType {
    fn from(value: PostStatus) -> Self {
        match value {
            PostStatus::Scheduled => PostStatusType::Scheduled,
            PostStatus::Draft => PostStatusType::Draft,
            PostStatus::Published => PostStatusType::Published,
            PostStatus::Error => PostStatusType::Error,
        }
    }
}

impl From<MediaKind> for MediaType {
    fn from(value: MediaKind) -> Self {
        match value {
            MediaKind::Image => MediaType::Image,
            MediaKind::Video => MediaType::Video,
        }
    }
}

impl From<MediaType> for MediaKind {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Image => MediaKind::Image,
            MediaType::Video => MediaKind::Video,
        }
    }
}

impl From<AutoPostStatusType> for AutoPostStatus {
    fn from(value: AutoPostStatusType) -> Self {
        match value {
            AutoPostStatusType::Pending => AutoPostStatus::Pending,
            AutoPostStatusType::Success => AutoPostStatus::Success,
            AutoPostStatusType::Error => AutoPostStatus::Error,
            AutoPostStatusType::None => AutoPostStatus::None,
        }
    }
}

impl From<AutoPostStatus> for AutoPostStatusType {
    fn from(value: AutoPostStatus) -> Self {
        match value {
            AutoPostStatus::Pending => AutoPostStatusType::Pending,
            AutoPostStatus::Success => AutoPostStatusType::Success,
            AutoPostStatus::Error => AutoPostStatusType::Error,
            AutoPostStatus::None => AutoPostStatusType::None,
        }
    }
}
