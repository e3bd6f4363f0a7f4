//! Models for managing Roles
use std::fmt;
use std::str::FromStr;

use diesel::sql_types::VarChar;

use schema::user_roles;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[sql_type = "VarChar"]
#[serde(rename_all = "lowercase")]
pub enum UserRoleKind {
    Superuser,
    Moderator,
    User,
}

impl UserRoleKind {
    /// Staff members browse the storefront without being counted in popularity
    pub fn is_staff(&self) -> bool {
        match *self {
            UserRoleKind::Superuser | UserRoleKind::Moderator => true,
            UserRoleKind::User => false,
        }
    }
}

impl fmt::Display for UserRoleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let role = match *self {
            UserRoleKind::Superuser => "superuser",
            UserRoleKind::Moderator => "moderator",
            UserRoleKind::User => "user",
        };
        write!(f, "{}", role)
    }
}

impl FromStr for UserRoleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superuser" => Ok(UserRoleKind::Superuser),
            "moderator" => Ok(UserRoleKind::Moderator),
            "user" => Ok(UserRoleKind::User),
            _ => Err(()),
        }
    }
}

varchar_enum_sql!(UserRoleKind);

#[derive(Serialize, Queryable, Debug, Clone)]
pub struct UserRole {
    pub id: i32,
    pub user_id: i32,
    pub role: UserRoleKind,
}

#[derive(Serialize, Deserialize, Insertable, Clone, Debug)]
#[table_name = "user_roles"]
pub struct NewUserRole {
    pub user_id: i32,
    pub role: UserRoleKind,
}
