use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What happened. Stored as SCREAMING_SNAKE_CASE text, same spelling on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    IssueAssigned,
    IssueUpdated,
    IssueCompleted,
    ProjectInvited,
    ProjectUpdated,
    FeatureAdded,
    CommentAdded,
    DependencyBlocked,
    DueDateApproaching,
    RoadmapUpdated,
    LaunchReminder,
    OrgAnnouncement,
    SystemUpdate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Who a notification targets. Determines which read-path slice it lands in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationScope {
    User,
    Organization,
    Project,
}

/// How often digest emails would be batched. Only persisted here; delivery is
/// out of scope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigestFrequency {
    Immediate,
    Hourly,
    Daily,
    Weekly,
    Never,
}
