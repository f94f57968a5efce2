//! Control library operations

use super::{require, to_body, GovernanceService};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{ControlLibrary, ControlLibraryCollection, ControlLibraryPrototype, ControlLibraryType};
use crate::types::QueryParams;
use reqwest::Method;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListControlLibrariesParams {
    pub control_library_type: Option<ControlLibraryType>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListControlLibrariesParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("control_library_type", self.control_library_type)
    }
}

paginated! {
    ListControlLibrariesParams => ControlLibrary,
    list: list_control_libraries,
    pager: control_libraries_pager,
    alias: ControlLibrariesPager,
}

impl GovernanceService {
    pub async fn list_control_libraries(
        &self,
        params: &ListControlLibrariesParams,
    ) -> Result<ControlLibraryCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["control_libraries"]), config)
            .await
    }

    pub async fn get_control_library(&self, control_library_id: &str) -> Result<ControlLibrary> {
        require("control_library_id", control_library_id)?;
        let path = self.path(&["control_libraries", control_library_id]);
        self.http()
            .request_json(Method::GET, &path, RequestConfig::new())
            .await
    }

    pub async fn create_control_library(
        &self,
        library: &ControlLibraryPrototype,
    ) -> Result<ControlLibrary> {
        let config = RequestConfig::new().json(to_body(library)?);
        self.http()
            .request_json(Method::POST, &self.path(&["control_libraries"]), config)
            .await
    }

    /// Delete a custom control library; predefined libraries are rejected by the service
    pub async fn delete_control_library(&self, control_library_id: &str) -> Result<()> {
        require("control_library_id", control_library_id)?;
        let path = self.path(&["control_libraries", control_library_id]);
        self.http()
            .request_empty(Method::DELETE, &path, RequestConfig::new())
            .await?;
        Ok(())
    }
}
