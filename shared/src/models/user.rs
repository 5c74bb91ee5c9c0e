//! User Model

use serde::{Deserialize, Serialize};

use super::order::Order;
use crate::util::coerce::{RawId, lenient_f64};

/// Account role. Anything the backend sends besides `ADMIN` is a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    pub fn from_backend(role: Option<&str>) -> Self {
        match role {
            Some("ADMIN") => Self::Admin,
            _ => Self::Member,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// User as returned by `/auth/*` and `/users/me`
///
/// Auth endpoints that sign the user in also carry a fresh `token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: RawId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub token: Option<String>,
    pub email_verified: Option<bool>,
    pub password_set: Option<bool>,
}

/// User entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub password_set: bool,
    /// Not loaded by the user endpoints
    pub orders: Vec<Order>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id.to_string(),
            email: dto.email.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            phone: dto.phone,
            role: Role::from_backend(dto.role.as_deref()),
            email_verified: dto.email_verified.unwrap_or(false),
            password_set: dto.password_set.unwrap_or(false),
            orders: Vec::new(),
        }
    }
}

/// A signed-in user together with the bearer token issued for them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Admin member list row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: RawId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// Admin member list row; `role` is the backend's value verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl From<UserSummaryDto> for UserSummary {
    fn from(dto: UserSummaryDto) -> Self {
        Self {
            id: dto.id.to_string(),
            email: dto.email.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            phone: dto.phone,
            role: dto.role,
        }
    }
}

/// Update profile payload. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Spending statistics for one member, as returned by
/// `/users/{id}/statistics`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatisticsDto {
    pub user_id: RawId,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_spent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_order_value: Option<f64>,
    pub order_count: Option<u32>,
    pub completed_order_count: Option<u32>,
    pub last_order_date: Option<String>,
    pub first_order_date: Option<String>,
    pub registered_at: Option<String>,
}

/// Spending statistics for one member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatistics {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub total_spent: f64,
    pub average_order_value: f64,
    pub order_count: u32,
    pub completed_order_count: u32,
    pub last_order_date: Option<String>,
    pub first_order_date: Option<String>,
    pub registered_at: Option<String>,
}

impl From<MemberStatisticsDto> for MemberStatistics {
    fn from(dto: MemberStatisticsDto) -> Self {
        Self {
            user_id: dto.user_id.to_string(),
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            total_spent: dto.total_spent.unwrap_or_default(),
            average_order_value: dto.average_order_value.unwrap_or_default(),
            order_count: dto.order_count.unwrap_or(0),
            completed_order_count: dto.completed_order_count.unwrap_or(0),
            last_order_date: dto.last_order_date,
            first_order_date: dto.first_order_date,
            registered_at: dto.registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(value: serde_json::Value) -> User {
        User::from(serde_json::from_value::<UserDto>(value).unwrap())
    }

    #[test]
    fn test_role_collapses_to_member() {
        assert_eq!(user(json!({ "id": 1, "role": "ADMIN" })).role, Role::Admin);
        assert_eq!(user(json!({ "id": 1, "role": "MEMBER" })).role, Role::Member);
        assert_eq!(user(json!({ "id": 1, "role": "STAFF" })).role, Role::Member);
        assert_eq!(user(json!({ "id": 1 })).role, Role::Member);
    }

    #[test]
    fn test_user_defaults() {
        let u = user(json!({ "id": 12, "email": "a@b.co", "name": "A" }));
        assert_eq!(u.id, "12");
        assert!(!u.email_verified);
        assert!(!u.password_set);
        assert!(u.orders.is_empty());
        assert!(u.phone.is_none());
    }

    #[test]
    fn test_role_serializes_upper_case() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));
    }

    #[test]
    fn test_profile_update_is_sparse() {
        let patch = ProfileUpdate {
            phone: Some("0912345678".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "phone": "0912345678" })
        );
    }

    #[test]
    fn test_statistics_from_dto() {
        let dto: MemberStatisticsDto = serde_json::from_value(json!({
            "userId": 5,
            "name": "Lin",
            "email": "lin@example.com",
            "totalSpent": 5120.5,
            "averageOrderValue": "1706.83",
            "orderCount": 3,
            "completedOrderCount": 2,
            "lastOrderDate": "2024-03-07T10:30:00"
        }))
        .unwrap();
        let stats = MemberStatistics::from(dto);
        assert_eq!(stats.user_id, "5");
        assert_eq!(stats.total_spent, 5120.5);
        assert_eq!(stats.average_order_value, 1706.83);
        assert_eq!(stats.order_count, 3);
        assert!(stats.first_order_date.is_none());
    }
}
