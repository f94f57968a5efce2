//! Attachment operations
//!
//! Attachments live under their profile; the instance-wide listing spans
//! all profiles.

use super::{require, to_body, GovernanceService};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{
    Attachment, AttachmentCollection, AttachmentPrototype, AttachmentsCreated, NewAttachment,
};
use crate::types::{QueryParams, SortDirection};
use reqwest::Method;

/// Paging for [`GovernanceService::list_profile_attachments`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProfileAttachmentsParams {
    pub profile_id: String,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListProfileAttachmentsParams {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
    }
}

/// Filters and paging for [`GovernanceService::list_instance_attachments`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInstanceAttachmentsParams {
    pub attachment_name: Option<String>,
    pub scope_type: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListInstanceAttachmentsParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("attachment_name", self.attachment_name.as_deref())
            .opt("scope_type", self.scope_type.as_deref())
            .opt("sort", self.sort.as_deref())
            .opt("direction", self.direction)
    }
}

paginated! {
    ListProfileAttachmentsParams => Attachment,
    list: list_profile_attachments,
    pager: profile_attachments_pager,
    alias: ProfileAttachmentsPager,
}

paginated! {
    ListInstanceAttachmentsParams => Attachment,
    list: list_instance_attachments,
    pager: instance_attachments_pager,
    alias: InstanceAttachmentsPager,
}

impl GovernanceService {
    pub async fn list_profile_attachments(
        &self,
        params: &ListProfileAttachmentsParams,
    ) -> Result<AttachmentCollection> {
        require("profile_id", &params.profile_id)?;
        let path = self.path(&["profiles", params.profile_id.as_str(), "attachments"]);
        let config = RequestConfig::new().with_query(params.query());
        self.http().request_json(Method::GET, &path, config).await
    }

    pub async fn list_instance_attachments(
        &self,
        params: &ListInstanceAttachmentsParams,
    ) -> Result<AttachmentCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["attachments"]), config)
            .await
    }

    pub async fn get_profile_attachment(
        &self,
        profile_id: &str,
        attachment_id: &str,
    ) -> Result<Attachment> {
        require("profile_id", profile_id)?;
        require("attachment_id", attachment_id)?;
        let path = self.path(&["profiles", profile_id, "attachments", attachment_id]);
        self.http()
            .request_json(Method::GET, &path, RequestConfig::new())
            .await
    }

    /// Attach a profile to scopes; one call may create several attachments
    pub async fn create_profile_attachment(
        &self,
        profile_id: &str,
        prototype: &AttachmentPrototype,
    ) -> Result<AttachmentsCreated> {
        require("profile_id", profile_id)?;
        let path = self.path(&["profiles", profile_id, "attachments"]);
        let config = RequestConfig::new().json(to_body(prototype)?);
        self.http().request_json(Method::POST, &path, config).await
    }

    pub async fn replace_profile_attachment(
        &self,
        profile_id: &str,
        attachment_id: &str,
        attachment: &NewAttachment,
    ) -> Result<Attachment> {
        require("profile_id", profile_id)?;
        require("attachment_id", attachment_id)?;
        let path = self.path(&["profiles", profile_id, "attachments", attachment_id]);
        let config = RequestConfig::new().json(to_body(attachment)?);
        self.http().request_json(Method::PUT, &path, config).await
    }

    pub async fn delete_profile_attachment(
        &self,
        profile_id: &str,
        attachment_id: &str,
    ) -> Result<()> {
        require("profile_id", profile_id)?;
        require("attachment_id", attachment_id)?;
        let path = self.path(&["profiles", profile_id, "attachments", attachment_id]);
        self.http()
            .request_empty(Method::DELETE, &path, RequestConfig::new())
            .await?;
        Ok(())
    }
}
