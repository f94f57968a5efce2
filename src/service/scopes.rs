//! Scope and subscope operations

use super::{require, to_body, GovernanceService};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{Scope, ScopeCollection, ScopePatch, ScopePrototype, SubscopeCollection, Subscope};
use crate::types::QueryParams;
use reqwest::Method;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScopesParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListScopesParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("name", self.name.as_deref())
            .opt("description", self.description.as_deref())
            .opt("environment", self.environment.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscopesParams {
    pub scope_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListSubscopesParams {
    pub fn new(scope_id: impl Into<String>) -> Self {
        Self {
            scope_id: scope_id.into(),
            ..Default::default()
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("name", self.name.as_deref())
            .opt("description", self.description.as_deref())
            .opt("environment", self.environment.as_deref())
    }
}

paginated! {
    ListScopesParams => Scope,
    list: list_scopes,
    pager: scopes_pager,
    alias: ScopesPager,
}

paginated! {
    ListSubscopesParams => Subscope,
    list: list_subscopes,
    pager: subscopes_pager,
    alias: SubscopesPager,
}

impl GovernanceService {
    pub async fn list_scopes(&self, params: &ListScopesParams) -> Result<ScopeCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["scopes"]), config)
            .await
    }

    pub async fn get_scope(&self, scope_id: &str) -> Result<Scope> {
        require("scope_id", scope_id)?;
        self.http()
            .request_json(Method::GET, &self.path(&["scopes", scope_id]), RequestConfig::new())
            .await
    }

    pub async fn create_scope(&self, scope: &ScopePrototype) -> Result<Scope> {
        let config = RequestConfig::new().json(to_body(scope)?);
        self.http()
            .request_json(Method::POST, &self.path(&["scopes"]), config)
            .await
    }

    /// Rename or redescribe a scope; properties cannot be patched
    pub async fn update_scope(&self, scope_id: &str, patch: &ScopePatch) -> Result<Scope> {
        require("scope_id", scope_id)?;
        let config = RequestConfig::new().json(to_body(patch)?);
        self.http()
            .request_json(Method::PATCH, &self.path(&["scopes", scope_id]), config)
            .await
    }

    pub async fn delete_scope(&self, scope_id: &str) -> Result<()> {
        require("scope_id", scope_id)?;
        self.http()
            .request_empty(Method::DELETE, &self.path(&["scopes", scope_id]), RequestConfig::new())
            .await?;
        Ok(())
    }

    pub async fn list_subscopes(&self, params: &ListSubscopesParams) -> Result<SubscopeCollection> {
        require("scope_id", &params.scope_id)?;
        let path = self.path(&["scopes", params.scope_id.as_str(), "subscopes"]);
        let config = RequestConfig::new().with_query(params.query());
        self.http().request_json(Method::GET, &path, config).await
    }
}
