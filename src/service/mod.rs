//! Governance service client
//!
//! `GovernanceService` maps each REST operation to a typed method. All
//! paths are rooted at `/instances/{instance_id}/v3`; every request goes
//! through the shared [`HttpClient`].
//!
//! Each paginated list operation also gets:
//! - a [`PageSource`] implementation on the service,
//! - a pager alias (e.g. [`RulesPager`]) and a constructor
//!   (e.g. [`GovernanceService::rules_pager`]).

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{PageCursor, PageParams, PageSource};

/// Wire a list operation into the pagination machinery
macro_rules! paginated {
    (
        $params:ty => $item:ty,
        list: $list:ident,
        pager: $pager:ident,
        alias: $alias:ident $(,)?
    ) => {
        impl $crate::pagination::PageParams for $params {
            fn set_start(&mut self, start: Option<String>) {
                self.start = start;
            }

            fn set_limit(&mut self, limit: Option<i64>) {
                self.limit = limit;
            }

            fn limit(&self) -> Option<i64> {
                self.limit
            }
        }

        #[async_trait::async_trait]
        impl $crate::pagination::PageSource<$params> for $crate::service::GovernanceService {
            type Item = $item;

            async fn fetch_page(
                &self,
                params: $params,
            ) -> $crate::error::Result<$crate::pagination::Page<$item>> {
                Ok(self.$list(&params).await?.into())
            }
        }

        #[doc = concat!("Cursor over [`GovernanceService::", stringify!($list), "`]")]
        pub type $alias<'a> =
            $crate::pagination::PageCursor<'a, $crate::service::GovernanceService, $params>;

        impl $crate::service::GovernanceService {
            #[doc = concat!("Create a cursor over [`GovernanceService::", stringify!($list), "`]")]
            pub fn $pager(&self, params: $params) -> $alias<'_> {
                $crate::pagination::PageCursor::new(self, params)
            }
        }
    };
}

mod attachments;
mod control_libraries;
mod profiles;
mod reports;
mod rules;
mod scopes;

pub use attachments::{
    InstanceAttachmentsPager, ListInstanceAttachmentsParams, ListProfileAttachmentsParams,
    ProfileAttachmentsPager,
};
pub use control_libraries::{ControlLibrariesPager, ListControlLibrariesParams};
pub use profiles::{ListProfilesParams, ProfilesPager};
pub use reports::{
    ListReportEvaluationsParams, ListReportResourcesParams, ListReportsParams,
    ReportEvaluationsPager, ReportResourcesPager, ReportsPager,
};
pub use rules::{ListRulesParams, RulesPager};
pub use scopes::{ListScopesParams, ListSubscopesParams, ScopesPager, SubscopesPager};

/// Typed client for the governance service
#[derive(Debug)]
pub struct GovernanceService {
    http: HttpClient,
    instance_id: String,
}

impl GovernanceService {
    /// Create a service client for one service instance
    pub fn new(http: HttpClient, instance_id: impl Into<String>) -> Self {
        Self {
            http,
            instance_id: instance_id.into(),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The service instance all paths are rooted at
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Generic cursor over any list operation this service implements
    pub fn pager<P>(&self, params: P) -> PageCursor<'_, Self, P>
    where
        P: PageParams,
        Self: PageSource<P>,
    {
        PageCursor::new(self, params)
    }

    /// Build an instance-relative path, percent-encoding each segment
    pub(crate) fn path(&self, segments: &[&str]) -> String {
        let mut path = format!("/instances/{}/v3", urlencoding::encode(&self.instance_id));
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }
}

/// Reject empty path identifiers before issuing a request
pub(crate) fn require(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing_argument(argument));
    }
    Ok(())
}

/// Serialize a request body
pub(crate) fn to_body<T: serde::Serialize>(body: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}
