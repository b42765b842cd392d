use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Membership role within an organization. Stored but not consulted by the
/// record access checks: any member may read and mutate org-shared records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrganizationRole {
    Owner,
    Admin,
    Member,
    Viewer,
}
