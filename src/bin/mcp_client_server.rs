//! Pokedex Manager MCP Server - SDK Implementation
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes the owner registry and per-owner Pokedex commands as tools.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use pokedex_manager::interface::*;
use pokedex_manager::Registry;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

#[derive(Debug, Clone)]
pub struct PokedexManagerService {
    tool_router: ToolRouter<PokedexManagerService>,
    registry: Arc<Mutex<Registry>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreatePokedexRequest {
    #[schemars(description = "Name of the new owner (must be unique, case-sensitive)")]
    pub owner_name: String,
    #[schemars(description = "Starter choice: 1 = Bulbasaur, 2 = Charmander, 3 = Squirtle")]
    pub starter_choice: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OwnerRequest {
    #[schemars(description = "Exact name of the owner")]
    pub owner_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecordRequest {
    #[schemars(description = "Exact name of the owner")]
    pub owner_name: String,
    #[schemars(description = "Pokemon ID (1-151)")]
    pub pokemon_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DisplayRequest {
    #[schemars(description = "Exact name of the owner")]
    pub owner_name: String,
    #[schemars(
        description = "1 = BFS (Level-Order), 2 = Pre-Order, 3 = In-Order, 4 = Post-Order, 5 = Alphabetical"
    )]
    pub order_choice: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FightRequest {
    #[schemars(description = "Exact name of the owner")]
    pub owner_name: String,
    #[schemars(description = "ID of the first Pokemon")]
    pub first_id: i64,
    #[schemars(description = "ID of the second Pokemon")]
    pub second_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MergeRequest {
    #[schemars(description = "Owner that keeps the merged Pokedex")]
    pub target_owner: String,
    #[schemars(description = "Owner whose Pokedex is absorbed and who is then removed")]
    pub source_owner: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PrintOwnersRequest {
    #[schemars(description = "'F' for forward or 'B' for backward")]
    pub direction: String,
    #[schemars(description = "How many owners to print (wraps around)")]
    pub times: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Pokemon name or ID to look up")]
    pub query: String,
}

fn text_result(result: Result<String, String>) -> CallToolResult {
    let text = match result {
        Ok(text) => text,
        Err(e) => format!("Error: {}", e),
    };
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl PokedexManagerService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Run `command` against the shared registry.
    fn with_registry<T>(&self, command: impl FnOnce(&mut Registry) -> T) -> Result<T, McpError> {
        let mut registry = self.registry.lock().map_err(|e| McpError {
            code: ErrorCode(-32603),
            message: Cow::from(format!("Registry lock poisoned: {}", e)),
            data: None,
        })?;
        Ok(command(&mut registry))
    }

    #[tool(description = "List all owners in registry order")]
    async fn list_owners(&self) -> Result<CallToolResult, McpError> {
        let text = self.with_registry(|registry| display_owner_list(registry))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Create a new Pokedex for an owner with a starter Pokemon")]
    async fn create_pokedex(
        &self,
        Parameters(request): Parameters<CreatePokedexRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            create_pokedex(registry, &request.owner_name, request.starter_choice)
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Add a Pokemon to an owner's Pokedex")]
    async fn add_pokemon(
        &self,
        Parameters(request): Parameters<RecordRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name)
                .and_then(|owner| add_pokemon(registry, owner, request.pokemon_id))
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Release a Pokemon from an owner's Pokedex by ID")]
    async fn release_pokemon(
        &self,
        Parameters(request): Parameters<RecordRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name)
                .and_then(|owner| release_pokemon(registry, owner, request.pokemon_id))
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Display an owner's Pokedex in the chosen traversal order")]
    async fn display_pokedex(
        &self,
        Parameters(request): Parameters<DisplayRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name)
                .and_then(|owner| display_pokedex(registry, owner, request.order_choice))
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Evolve a Pokemon in an owner's Pokedex")]
    async fn evolve_pokemon(
        &self,
        Parameters(request): Parameters<RecordRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name)
                .and_then(|owner| evolve_pokemon(registry, owner, request.pokemon_id))
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Score two Pokemon of the same Pokedex against each other")]
    async fn pokemon_fight(
        &self,
        Parameters(request): Parameters<FightRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name).and_then(|owner| {
                pokemon_fight(registry, owner, request.first_id, request.second_id)
            })
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Delete an owner and their entire Pokedex")]
    async fn delete_pokedex(
        &self,
        Parameters(request): Parameters<OwnerRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            owner_by_name(registry, &request.owner_name)
                .and_then(|owner| delete_pokedex(registry, owner))
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Merge the source owner's Pokedex into the target owner's")]
    async fn merge_pokedexes(
        &self,
        Parameters(request): Parameters<MergeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            merge_pokedexes(registry, &request.target_owner, &request.source_owner)
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Sort owners by name")]
    async fn sort_owners(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| sort_owners(registry))?;
        Ok(text_result(result))
    }

    #[tool(description = "Print owners starting at the head, walking forward or backward")]
    async fn print_owners(
        &self,
        Parameters(request): Parameters<PrintOwnersRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_registry(|registry| {
            print_owners_directional(registry, &request.direction, request.times)
        })?;
        Ok(text_result(result))
    }

    #[tool(description = "Look up a Pokemon in the catalog by name or ID")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = lookup_pokemon(&request.query);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokedexManagerService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Pokedex Manager MCP Server (SDK version) starting...");

    let service = PokedexManagerService::new();
    let transport = (stdin(), stdout());

    eprintln!("Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    eprintln!("Server running, waiting for shutdown...");
    let quit_reason = server.waiting().await?;

    eprintln!("Pokedex Manager MCP Server exiting: {:?}", quit_reason);
    Ok(())
}
