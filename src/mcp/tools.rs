//! Tool declarations: one per FoxESS Cloud endpoint.
//!
//! Every tool fixes a path and reshapes its typed arguments into the
//! dispatcher's parameter mapping. Two tools compute derived values before
//! dispatch: the history query turns an hours count into a millisecond
//! window, and the force-charge setter merges the caller's schedule fields
//! with the serial number.

use chrono::Utc;
use rmcp::{handler::server::wrapper::Parameters, model::*, schemars, tool, tool_router};
use serde_json::{Map, Value, json};

use crate::api::Method;
use crate::mcp::server::FoxEssMcpServer;

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PageParams {
    /// Page number to fetch, starting at 1
    pub current_page: Option<u32>,
    /// Number of entries per page
    pub page_size: Option<u32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PlantDetailParams {
    /// Plant identifier as returned by get_plant_list
    pub plant_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SerialParams {
    /// Inverter serial number
    pub sn: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RealTimeQueryParams {
    /// Inverter serial number
    pub sn: String,
    /// Variable names to read
    pub variables: Vec<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HistoryQueryParams {
    /// Inverter serial number
    pub sn: String,
    /// Variable names to read
    pub variables: Vec<String>,
    /// Trailing window in hours, ending now (default 24)
    pub hours: Option<i64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BatterySocParams {
    /// Inverter serial number
    pub sn: String,
    /// Minimum state of charge in percent
    pub min_soc: u32,
    /// Minimum state of charge while on grid, in percent
    pub min_soc_on_grid: u32,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ForceChargeTimeParams {
    /// Inverter serial number
    pub sn: String,
    /// Schedule fields passed through to the remote endpoint
    pub config: Map<String, Value>,
}

/// Millisecond window covering the trailing `hours` before `end`.
fn history_window(hours: i64, end: i64) -> (i64, i64) {
    (end - hours * 3_600_000, end)
}

/// `{"sn": sn}` extended with the caller's schedule fields. A caller entry
/// named `sn` overwrites, matching the remote endpoint's merge contract.
fn merge_serial(sn: String, config: Map<String, Value>) -> Value {
    let mut params = Map::new();
    params.insert("sn".to_string(), Value::String(sn));
    params.extend(config);
    Value::Object(params)
}

/// Wrap an ApiResult mapping as JSON text content.
fn api_result(value: Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(value.to_string())])
}

#[tool_router(router = build_tool_router, vis = "pub")]
impl FoxEssMcpServer {
    #[tool(description = "Get the list of plants")]
    pub async fn get_plant_list(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = json!({
            "currentPage": params.current_page.unwrap_or(1),
            "pageSize": params.page_size.unwrap_or(10),
        });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/plant/list", Some(body)).await,
        ))
    }

    #[tool(description = "Get details of a specific plant")]
    pub async fn get_plant_detail(
        &self,
        Parameters(params): Parameters<PlantDetailParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = json!({ "id": params.plant_id });
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/plant/detail", Some(query)).await,
        ))
    }

    #[tool(description = "Get the list of devices")]
    pub async fn get_device_list(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = json!({
            "currentPage": params.current_page.unwrap_or(1),
            "pageSize": params.page_size.unwrap_or(500),
        });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/device/list", Some(body)).await,
        ))
    }

    #[tool(description = "Get details of a specific device")]
    pub async fn get_device_detail(
        &self,
        Parameters(params): Parameters<SerialParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = json!({ "sn": params.sn });
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/device/detail", Some(query)).await,
        ))
    }

    #[tool(description = "Get the variables a device can report")]
    pub async fn get_device_variables(&self) -> Result<CallToolResult, ErrorData> {
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/device/variable/get", None).await,
        ))
    }

    #[tool(description = "Query real-time device data")]
    pub async fn query_device_real_time(
        &self,
        Parameters(params): Parameters<RealTimeQueryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = json!({ "sn": params.sn, "variables": params.variables });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/device/real/query", Some(body)).await,
        ))
    }

    #[tool(description = "Query historical device data over a trailing window of hours")]
    pub async fn query_device_history(
        &self,
        Parameters(params): Parameters<HistoryQueryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let (begin, end) = history_window(
            params.hours.unwrap_or(24),
            Utc::now().timestamp_millis(),
        );
        let body = json!({
            "sn": params.sn,
            "variables": params.variables,
            "begin": begin,
            "end": end,
        });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/device/history/query", Some(body)).await,
        ))
    }

    #[tool(description = "Get device generation data")]
    pub async fn get_device_generation(
        &self,
        Parameters(params): Parameters<SerialParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = json!({ "sn": params.sn });
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/device/generation", Some(query)).await,
        ))
    }

    #[tool(description = "Get battery state of charge settings")]
    pub async fn get_battery_soc(
        &self,
        Parameters(params): Parameters<SerialParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = json!({ "sn": params.sn });
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/device/battery/soc/get", Some(query)).await,
        ))
    }

    #[tool(description = "Set battery state of charge parameters")]
    pub async fn set_battery_soc(
        &self,
        Parameters(params): Parameters<BatterySocParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = json!({
            "sn": params.sn,
            "minSoc": params.min_soc,
            "minSocOnGrid": params.min_soc_on_grid,
        });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/device/battery/soc/set", Some(body)).await,
        ))
    }

    #[tool(description = "Get battery force charge time settings")]
    pub async fn get_force_charge_time(
        &self,
        Parameters(params): Parameters<SerialParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = json!({ "sn": params.sn });
        Ok(api_result(
            self.client
                .dispatch(Method::Get, "/op/v0/device/battery/forceChargeTime/get", Some(query))
                .await,
        ))
    }

    #[tool(description = "Set battery force charge time settings")]
    pub async fn set_force_charge_time(
        &self,
        Parameters(params): Parameters<ForceChargeTimeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = merge_serial(params.sn, params.config);
        Ok(api_result(
            self.client
                .dispatch(Method::Post, "/op/v0/device/battery/forceChargeTime/set", Some(body))
                .await,
        ))
    }

    #[tool(description = "Get the list of modules")]
    pub async fn get_module_list(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let body = json!({
            "currentPage": params.current_page.unwrap_or(1),
            "pageSize": params.page_size.unwrap_or(10),
        });
        Ok(api_result(
            self.client.dispatch(Method::Post, "/op/v0/module/list", Some(body)).await,
        ))
    }

    #[tool(description = "Get the account's API access count")]
    pub async fn get_access_count(&self) -> Result<CallToolResult, ErrorData> {
        Ok(api_result(
            self.client.dispatch(Method::Get, "/op/v0/user/getAccessCount", None).await,
        ))
    }
}
