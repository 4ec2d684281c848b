//! Pokedex Manager MCP Server
//!
//! A line-delimited JSON-RPC server over stdio that exposes the Pokedex
//! manager commands as MCP tools without the SDK.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

use pokedex_manager::interface::*;
use pokedex_manager::Registry;
use serde_json::{json, Value};

/// Registry shared across tool calls
type SharedRegistry = Arc<Mutex<Registry>>;

struct McpServer {
    registry: SharedRegistry,
}

fn tool(name: &str, description: &str, properties: Value, required: &[&str]) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required
        }
    })
}

fn text_content(text: String) -> Value {
    json!({
        "content": [{"type": "text", "text": text}]
    })
}

fn int_arg(args: &Value, key: &str) -> i64 {
    args[key].as_i64().unwrap_or(0)
}

fn str_arg<'a>(args: &'a Value, key: &str) -> &'a str {
    args[key].as_str().unwrap_or("")
}

impl McpServer {
    fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    fn handle_request(&self, method: &str, params: &Value) -> Value {
        match method {
            "initialize" => {
                json!({
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": "pokedex-manager",
                        "version": env!("CARGO_PKG_VERSION")
                    }
                })
            }
            "tools/list" => json!({ "tools": Self::tool_list() }),
            "tools/call" => {
                let tool_name = params["name"].as_str().unwrap_or("");
                let args = &params["arguments"];
                self.handle_tool_call(tool_name, args)
            }
            _ => {
                json!({
                    "error": {
                        "code": -32601,
                        "message": "Method not found"
                    }
                })
            }
        }
    }

    fn tool_list() -> Vec<Value> {
        let owner = json!({"type": "string", "description": "Exact name of the owner"});
        let pokemon_id = json!({"type": "number", "description": "Pokemon ID (1-151)"});

        vec![
            tool("list_owners", "List all owners in registry order", json!({}), &[]),
            tool(
                "create_pokedex",
                "Create a new Pokedex for an owner with a starter Pokemon",
                json!({
                    "owner_name": owner,
                    "starter_choice": {
                        "type": "number",
                        "description": "1 = Bulbasaur, 2 = Charmander, 3 = Squirtle"
                    }
                }),
                &["owner_name", "starter_choice"],
            ),
            tool(
                "add_pokemon",
                "Add a Pokemon to an owner's Pokedex",
                json!({"owner_name": owner, "pokemon_id": pokemon_id}),
                &["owner_name", "pokemon_id"],
            ),
            tool(
                "release_pokemon",
                "Release a Pokemon from an owner's Pokedex by ID",
                json!({"owner_name": owner, "pokemon_id": pokemon_id}),
                &["owner_name", "pokemon_id"],
            ),
            tool(
                "display_pokedex",
                "Display an owner's Pokedex in the chosen traversal order",
                json!({
                    "owner_name": owner,
                    "order_choice": {
                        "type": "number",
                        "description": "1 = BFS, 2 = Pre-Order, 3 = In-Order, 4 = Post-Order, 5 = Alphabetical"
                    }
                }),
                &["owner_name", "order_choice"],
            ),
            tool(
                "evolve_pokemon",
                "Evolve a Pokemon in an owner's Pokedex",
                json!({"owner_name": owner, "pokemon_id": pokemon_id}),
                &["owner_name", "pokemon_id"],
            ),
            tool(
                "pokemon_fight",
                "Score two Pokemon of the same Pokedex against each other",
                json!({"owner_name": owner, "first_id": pokemon_id, "second_id": pokemon_id}),
                &["owner_name", "first_id", "second_id"],
            ),
            tool(
                "delete_pokedex",
                "Delete an owner and their entire Pokedex",
                json!({"owner_name": owner}),
                &["owner_name"],
            ),
            tool(
                "merge_pokedexes",
                "Merge the source owner's Pokedex into the target owner's",
                json!({"target_owner": owner, "source_owner": owner}),
                &["target_owner", "source_owner"],
            ),
            tool("sort_owners", "Sort owners by name", json!({}), &[]),
            tool(
                "print_owners",
                "Print owners starting at the head, walking forward or backward",
                json!({
                    "direction": {"type": "string", "description": "'F' or 'B'"},
                    "times": {"type": "number", "description": "How many owners to print"}
                }),
                &["direction", "times"],
            ),
            tool(
                "lookup_pokemon",
                "Look up a Pokemon in the catalog by name or ID",
                json!({"query": {"type": "string", "description": "Pokemon name or ID"}}),
                &["query"],
            ),
        ]
    }

    fn handle_tool_call(&self, tool_name: &str, args: &Value) -> Value {
        let mut registry = match self.registry.lock() {
            Ok(registry) => registry,
            Err(e) => return text_content(format!("Error: registry unavailable: {}", e)),
        };
        let registry = &mut *registry;

        let result = match tool_name {
            "list_owners" => Ok(display_owner_list(registry)),
            "create_pokedex" => create_pokedex(
                registry,
                str_arg(args, "owner_name"),
                int_arg(args, "starter_choice"),
            ),
            "add_pokemon" => owner_by_name(registry, str_arg(args, "owner_name"))
                .and_then(|owner| add_pokemon(registry, owner, int_arg(args, "pokemon_id"))),
            "release_pokemon" => owner_by_name(registry, str_arg(args, "owner_name"))
                .and_then(|owner| release_pokemon(registry, owner, int_arg(args, "pokemon_id"))),
            "display_pokedex" => owner_by_name(registry, str_arg(args, "owner_name"))
                .and_then(|owner| display_pokedex(registry, owner, int_arg(args, "order_choice"))),
            "evolve_pokemon" => owner_by_name(registry, str_arg(args, "owner_name"))
                .and_then(|owner| evolve_pokemon(registry, owner, int_arg(args, "pokemon_id"))),
            "pokemon_fight" => {
                owner_by_name(registry, str_arg(args, "owner_name")).and_then(|owner| {
                    pokemon_fight(
                        registry,
                        owner,
                        int_arg(args, "first_id"),
                        int_arg(args, "second_id"),
                    )
                })
            }
            "delete_pokedex" => owner_by_name(registry, str_arg(args, "owner_name"))
                .and_then(|owner| delete_pokedex(registry, owner)),
            "merge_pokedexes" => merge_pokedexes(
                registry,
                str_arg(args, "target_owner"),
                str_arg(args, "source_owner"),
            ),
            "sort_owners" => sort_owners(registry),
            "print_owners" => print_owners_directional(
                registry,
                str_arg(args, "direction"),
                int_arg(args, "times"),
            ),
            "lookup_pokemon" => Ok(lookup_pokemon(str_arg(args, "query"))),
            _ => Err(format!("Unknown tool: {}", tool_name)),
        };

        match result {
            Ok(text) => text_content(text),
            Err(e) => text_content(format!("Error: {}", e)),
        }
    }

    fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            // Parse the JSON-RPC request
            let request: Value = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Skipping malformed request: {}", e);
                    continue;
                }
            };

            let id = request["id"].clone();
            let method = request["method"].as_str().unwrap_or("");
            let params = &request["params"];

            let result = self.handle_request(method, params);

            let response = json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result
            });

            writeln!(stdout, "{}", response)?;
            stdout.flush()?;
        }

        Ok(())
    }
}

fn main() -> io::Result<()> {
    eprintln!("Pokedex Manager MCP Server starting...");
    let server = McpServer::new();
    server.run()
}
