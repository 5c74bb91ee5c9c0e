//! Users client

use serde::de::IgnoredAny;
use shared::client::{ChangePasswordRequest, DeleteAccountRequest};
use shared::models::{
    MemberStatistics, MemberStatisticsDto, ProfileUpdate, User, UserDto, UserSummary,
    UserSummaryDto,
};

use super::{NotFoundExt, unauthorized_as_none};
use crate::{ClientResult, HttpClient};

pub struct UsersApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> UsersApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Own profile, or `None` when not signed in
    pub async fn get_me(&self) -> ClientResult<Option<User>> {
        let dto: Option<UserDto> = unauthorized_as_none(self.http.get("/users/me").await)?;
        Ok(dto.map(User::from))
    }

    /// Sparse profile update
    pub async fn update_me(&self, patch: &ProfileUpdate) -> ClientResult<User> {
        let dto: UserDto = self.http.put("/users/me", patch).await?;
        Ok(User::from(dto))
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> ClientResult<()> {
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let _: IgnoredAny = self.http.put("/users/password", &body).await?;
        Ok(())
    }

    /// Member list (admin)
    pub async fn get_all(&self) -> ClientResult<Vec<UserSummary>> {
        let dtos: Vec<UserSummaryDto> = self.http.get("/users").await?;
        Ok(dtos.into_iter().map(UserSummary::from).collect())
    }

    /// Number of orders placed by `user_id` (admin)
    pub async fn get_user_order_count(&self, user_id: &str) -> ClientResult<usize> {
        let orders: Vec<IgnoredAny> = self.http.get(&format!("/orders/user/{user_id}")).await?;
        Ok(orders.len())
    }

    /// Anonymize and soft-delete the signed-in account. Requires the
    /// current password.
    pub async fn delete_account(&self, password: &str) -> ClientResult<()> {
        let body = DeleteAccountRequest {
            password: password.to_string(),
        };
        let _: IgnoredAny = self.http.post("/users/me/delete", &body).await?;
        Ok(())
    }

    /// Spending statistics for one member (admin)
    pub async fn get_statistics(&self, user_id: &str) -> ClientResult<Option<MemberStatistics>> {
        let dto: Option<MemberStatisticsDto> = self
            .http
            .get(&format!("/users/{user_id}/statistics"))
            .await
            .or_not_found()?;
        Ok(dto.map(MemberStatistics::from))
    }
}
