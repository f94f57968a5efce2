//! Profile operations

use super::{require, to_body, GovernanceService};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{Profile, ProfileCollection, ProfilePrototype, ProfileType};
use crate::types::QueryParams;
use reqwest::Method;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProfilesParams {
    pub profile_type: Option<ProfileType>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListProfilesParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("profile_type", self.profile_type)
    }
}

paginated! {
    ListProfilesParams => Profile,
    list: list_profiles,
    pager: profiles_pager,
    alias: ProfilesPager,
}

impl GovernanceService {
    pub async fn list_profiles(&self, params: &ListProfilesParams) -> Result<ProfileCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["profiles"]), config)
            .await
    }

    pub async fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        require("profile_id", profile_id)?;
        self.http()
            .request_json(Method::GET, &self.path(&["profiles", profile_id]), RequestConfig::new())
            .await
    }

    pub async fn create_profile(&self, profile: &ProfilePrototype) -> Result<Profile> {
        let config = RequestConfig::new().json(to_body(profile)?);
        self.http()
            .request_json(Method::POST, &self.path(&["profiles"]), config)
            .await
    }

    pub async fn replace_profile(
        &self,
        profile_id: &str,
        profile: &ProfilePrototype,
    ) -> Result<Profile> {
        require("profile_id", profile_id)?;
        let config = RequestConfig::new().json(to_body(profile)?);
        self.http()
            .request_json(Method::PUT, &self.path(&["profiles", profile_id]), config)
            .await
    }

    pub async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        require("profile_id", profile_id)?;
        self.http()
            .request_empty(
                Method::DELETE,
                &self.path(&["profiles", profile_id]),
                RequestConfig::new(),
            )
            .await?;
        Ok(())
    }
}
