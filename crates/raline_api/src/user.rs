//! `user` endpoints.

use crate::client::{AbortSignal, RalineApiClient};
use crate::error::RalineApiError;
use crate::payload::{ProfileUpdate, UserPatch};
use crate::records::{PublicUser, UserPage};
use crate::request::RequestSpec;
use crate::response::ApiResponse;

impl RalineApiClient {
    /// `PUT user`: update the caller's own profile.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        abort: Option<&AbortSignal>,
    ) -> Result<ApiResponse, RalineApiError> {
        let spec = RequestSpec::put("user")
            .with_operation("Update profile")
            .with_body(update)?;
        self.send(spec, abort).await
    }

    /// `GET user?page=N`: admin user list.
    pub async fn get_user_list(
        &self,
        page: u64,
        abort: Option<&AbortSignal>,
    ) -> Result<UserPage, RalineApiError> {
        let spec = RequestSpec::get("user")
            .with_query("page", page)
            .with_operation("User list");
        let mut list: UserPage = self.send(spec, abort).await?.decode_data()?;
        if list.page == 0 {
            list.page = page;
        }
        Ok(list)
    }

    /// `PUT user/{id}`: change another user's role or label.
    pub async fn update_user(
        &self,
        id: i64,
        patch: &UserPatch,
        abort: Option<&AbortSignal>,
    ) -> Result<ApiResponse, RalineApiError> {
        let spec = RequestSpec::put(format!("user/{id}"))
            .with_operation("Update user")
            .with_body(patch)?;
        self.send(spec, abort).await
    }

    /// `GET user?pageSize=N`: public user wall.
    pub async fn get_public_user_list(
        &self,
        page_size: u64,
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<PublicUser>, RalineApiError> {
        let spec = RequestSpec::get("user")
            .with_query("pageSize", page_size)
            .with_operation("user list");
        self.send(spec, abort).await?.decode_data()
    }
}
