use crate::client::PokeApiClient;
use crate::format;
use crate::utils::error::Result as ApiResult;
use crate::utils::validation;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

const DEFAULT_LIMIT: usize = 20;
const DEFAULT_OFFSET: usize = 0;
const MAX_LIMIT: usize = 100;

const LIMIT_CAP_WARNING: &str = "⚠️ Limit capped at 100 for performance\n\n";

fn default_limit() -> String {
    DEFAULT_LIMIT.to_string()
}

fn default_offset() -> String {
    DEFAULT_OFFSET.to_string()
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct IdentifierRequest {
    #[serde(default)]
    #[schemars(description = "Resource name or numeric ID (e.g. 'pikachu' or '25')")]
    pub identifier: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ChainRequest {
    #[serde(default)]
    #[schemars(description = "Evolution chain ID (e.g. '10')")]
    pub chain_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct MachineRequest {
    #[serde(default)]
    #[schemars(description = "Machine ID (e.g. '1')")]
    pub machine_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListRequest {
    #[serde(default = "default_limit")]
    #[schemars(description = "Number of entries per page (default 20, max 100)")]
    pub limit: String,
    #[serde(default = "default_offset")]
    #[schemars(description = "Number of entries to skip (default 0)")]
    pub offset: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TypeSearchRequest {
    #[serde(default)]
    #[schemars(description = "Type name (e.g. 'electric')")]
    pub type_name: String,
    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of Pokémon to return (default 20, max 100)")]
    pub limit: String,
}

/// MCP server exposing PokeAPI lookups as tools.
///
/// Each tool is a single-shot request/response: validate the string inputs,
/// issue one GET, format the JSON. Every error becomes a `❌ Error:` text
/// result; nothing propagates past the tool boundary.
#[derive(Clone)]
pub struct PokeApiServer {
    client: PokeApiClient,
    tool_router: ToolRouter<Self>,
}

/// Operation layer: transport-independent string-in/string-out lookups.
/// The `#[tool]` methods below are thin wrappers over these.
impl PokeApiServer {
    pub async fn pokemon_text(&self, identifier: &str) -> ApiResult<String> {
        let slug = validation::require_slug("Pokémon name or ID", identifier)?;
        let data = self.client.fetch(&format!("/pokemon/{}", slug)).await?;
        Ok(format::pokemon::format_pokemon_data(&data))
    }

    pub async fn species_text(&self, identifier: &str) -> ApiResult<String> {
        let slug = validation::require_slug("Pokémon name or ID", identifier)?;
        let data = self
            .client
            .fetch(&format!("/pokemon-species/{}", slug))
            .await?;
        Ok(format::species::format_species_data(&data))
    }

    pub async fn evolution_chain_text(&self, chain_id: &str) -> ApiResult<String> {
        let id = validation::require_identifier("Evolution chain ID", chain_id)?;
        let data = self.client.fetch(&format!("/evolution-chain/{}", id)).await?;
        Ok(format::evolution::format_evolution_chain(&data))
    }

    pub async fn type_text(&self, identifier: &str) -> ApiResult<String> {
        let slug = validation::require_slug("Type name or ID", identifier)?;
        let data = self.client.fetch(&format!("/type/{}", slug)).await?;
        Ok(format::type_data::format_type_data(&data))
    }

    pub async fn machine_text(&self, machine_id: &str) -> ApiResult<String> {
        let id = validation::require_identifier("Machine ID", machine_id)?;
        let data = self.client.fetch(&format!("/machine/{}", id)).await?;
        Ok(format::machine::format_machine_data(&data))
    }

    pub async fn pokedex_text(&self, identifier: &str) -> ApiResult<String> {
        let slug = validation::require_slug("Pokédex name or ID", identifier)?;
        let data = self.client.fetch(&format!("/pokedex/{}", slug)).await?;
        Ok(format::pokedex::format_pokedex_data(&data))
    }

    pub async fn list_pokemon_text(&self, limit: &str, offset: &str) -> ApiResult<String> {
        let (limit, mut result) = clamp_limit(validation::parse_numeric_arg(limit, DEFAULT_LIMIT)?);
        let offset = validation::parse_numeric_arg(offset, DEFAULT_OFFSET)?;

        let data = self
            .client
            .fetch(&format!("/pokemon?limit={}&offset={}", limit, offset))
            .await?;
        result += &format::listing::format_pokemon_list(&data, limit, offset);
        Ok(result)
    }

    pub async fn list_types_text(&self, limit: &str, offset: &str) -> ApiResult<String> {
        let (limit, mut result) = clamp_limit(validation::parse_numeric_arg(limit, DEFAULT_LIMIT)?);
        let offset = validation::parse_numeric_arg(offset, DEFAULT_OFFSET)?;

        let data = self
            .client
            .fetch(&format!("/type?limit={}&offset={}", limit, offset))
            .await?;
        result += &format::listing::format_type_list(&data);
        Ok(result)
    }

    pub async fn search_by_type_text(&self, type_name: &str, limit: &str) -> ApiResult<String> {
        let slug = validation::require_slug("Type name", type_name)?;
        let (limit, mut result) = clamp_limit(validation::parse_numeric_arg(limit, DEFAULT_LIMIT)?);

        let data = self.client.fetch(&format!("/type/{}", slug)).await?;
        result += &format::listing::format_type_members(&slug, &data, limit);
        Ok(result)
    }
}

/// Clamp a requested page size to `1..=MAX_LIMIT`; capping prepends a
/// warning line to the output.
fn clamp_limit(requested: usize) -> (usize, String) {
    if requested > MAX_LIMIT {
        (MAX_LIMIT, LIMIT_CAP_WARNING.to_string())
    } else {
        (requested.max(1), String::new())
    }
}

fn reply(result: ApiResult<String>) -> CallToolResult {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("tool returned error: {}", e);
            format!("❌ Error: {}", e)
        }
    };
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl PokeApiServer {
    pub fn new() -> ApiResult<Self> {
        Ok(Self::with_client(PokeApiClient::new()?))
    }

    pub fn with_client(client: PokeApiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get detailed information about a Pokémon by name or ID.")]
    async fn get_pokemon(
        &self,
        Parameters(req): Parameters<IdentifierRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.pokemon_text(&req.identifier).await))
    }

    #[tool(description = "Get species information about a Pokémon by name or ID.")]
    async fn get_pokemon_species(
        &self,
        Parameters(req): Parameters<IdentifierRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.species_text(&req.identifier).await))
    }

    #[tool(description = "Get evolution chain information by chain ID.")]
    async fn get_evolution_chain(
        &self,
        Parameters(req): Parameters<ChainRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.evolution_chain_text(&req.chain_id).await))
    }

    #[tool(description = "Get type information including damage relations by name or ID.")]
    async fn get_type(
        &self,
        Parameters(req): Parameters<IdentifierRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.type_text(&req.identifier).await))
    }

    #[tool(description = "Get machine (TM/HM/TR) information by ID.")]
    async fn get_machine(
        &self,
        Parameters(req): Parameters<MachineRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.machine_text(&req.machine_id).await))
    }

    #[tool(description = "Get Pokédex information by name or ID.")]
    async fn get_pokedex(
        &self,
        Parameters(req): Parameters<IdentifierRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.pokedex_text(&req.identifier).await))
    }

    #[tool(description = "List Pokémon with pagination support.")]
    async fn list_pokemon(
        &self,
        Parameters(req): Parameters<ListRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.list_pokemon_text(&req.limit, &req.offset).await))
    }

    #[tool(description = "List all Pokémon types with pagination support.")]
    async fn list_types(
        &self,
        Parameters(req): Parameters<ListRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.list_types_text(&req.limit, &req.offset).await))
    }

    #[tool(description = "Find Pokémon of a specific type.")]
    async fn search_pokemon_by_type(
        &self,
        Parameters(req): Parameters<TypeSearchRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(reply(self.search_by_type_text(&req.type_name, &req.limit).await))
    }
}

#[tool_handler]
impl ServerHandler for PokeApiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Access Pokémon data from PokeAPI: individual Pokémon, species, \
                 evolution chains, types, machines and Pokédexes, plus paginated \
                 listings and type-filtered search."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
