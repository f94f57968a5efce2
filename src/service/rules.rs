//! Rule operations

use super::{require, to_body, GovernanceService};
use crate::error::Result;
use crate::http::{DetailedResponse, RequestConfig};
use crate::models::{Rule, RuleCollection, RulePrototype, RuleType};
use crate::types::QueryParams;
use reqwest::Method;

/// Filters and paging for [`GovernanceService::list_rules`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRulesParams {
    pub rule_type: Option<RuleType>,
    /// Free-text search over rule descriptions
    pub search: Option<String>,
    pub service_name: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl ListRulesParams {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("start", self.start.as_deref())
            .opt("type", self.rule_type)
            .opt("search", self.search.as_deref())
            .opt("service_name", self.service_name.as_deref())
            .opt("sort", self.sort.as_deref())
    }
}

paginated! {
    ListRulesParams => Rule,
    list: list_rules,
    pager: rules_pager,
    alias: RulesPager,
}

impl GovernanceService {
    /// Fetch one page of rules
    pub async fn list_rules(&self, params: &ListRulesParams) -> Result<RuleCollection> {
        let config = RequestConfig::new().with_query(params.query());
        self.http()
            .request_json(Method::GET, &self.path(&["rules"]), config)
            .await
    }

    /// Read a rule; the response ETag is required to replace it
    pub async fn get_rule(&self, rule_id: &str) -> Result<DetailedResponse<Rule>> {
        require("rule_id", rule_id)?;
        self.http()
            .request_detailed(Method::GET, &self.path(&["rules", rule_id]), RequestConfig::new())
            .await
    }

    pub async fn create_rule(&self, rule: &RulePrototype) -> Result<Rule> {
        let config = RequestConfig::new().json(to_body(rule)?);
        self.http()
            .request_json(Method::POST, &self.path(&["rules"]), config)
            .await
    }

    /// Replace a rule, guarded by the ETag of the version being replaced
    pub async fn replace_rule(
        &self,
        rule_id: &str,
        if_match: &str,
        rule: &RulePrototype,
    ) -> Result<DetailedResponse<Rule>> {
        require("rule_id", rule_id)?;
        require("if_match", if_match)?;
        let config = RequestConfig::new()
            .header("If-Match", if_match)
            .json(to_body(rule)?);
        self.http()
            .request_detailed(Method::PUT, &self.path(&["rules", rule_id]), config)
            .await
    }

    pub async fn delete_rule(&self, rule_id: &str) -> Result<()> {
        require("rule_id", rule_id)?;
        self.http()
            .request_empty(Method::DELETE, &self.path(&["rules", rule_id]), RequestConfig::new())
            .await?;
        Ok(())
    }
}
