//! `generate_tree` exposed as a callable tool with a JSON definition.

use anyhow::{Result, anyhow};
use serde::Deserialize;
use serde_json::{Value, json};
use std::path::PathBuf;

use crate::args::{TranslatedArgs, translate_onto};
use crate::fs::FileSystem;
use crate::{TreeRequest, generate_tree};

#[derive(Debug, Deserialize)]
pub struct TreeToolArgs {
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub tree_args: Vec<String>,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub show_hidden: Option<bool>,
}

fn default_path() -> String {
    ".".to_owned()
}

pub struct TreeTool {
    base_dir: Option<PathBuf>,
}

impl TreeTool {
    pub const NAME: &'static str = "generate_tree";

    /// `base_dir` replaces the working directory for relative targets.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn definition() -> Value {
        json!({
            "type": "function",
            "function": {
                "name": Self::NAME,
                "description": "Show the directory tree of a path, skipping .gitignore matches, .git, .DS_Store and node_modules.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "path": {
                            "type": "string",
                            "description": "Directory to show (default: current directory)"
                        },
                        "tree_args": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "tree-style flags: -L <n> limits depth, -a/--all shows hidden entries"
                        },
                        "max_depth": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Maximum number of directory levels to list"
                        },
                        "show_hidden": {
                            "type": "boolean",
                            "description": "Include entries whose name starts with '.'"
                        }
                    }
                }
            }
        })
    }

    /// Merge flags and explicit parameters; explicit parameters win.
    pub fn request(&self, args: TreeToolArgs) -> TreeRequest {
        let base = TranslatedArgs {
            path: args.path,
            ..TranslatedArgs::default()
        };
        let translated = translate_onto(base, &args.tree_args);

        TreeRequest {
            target: translated.path,
            base_override: self.base_dir.clone(),
            max_depth: args.max_depth.or(translated.max_depth),
            show_hidden: args.show_hidden.unwrap_or(translated.show_hidden),
        }
    }

    pub async fn execute<F: FileSystem>(&self, fs: &F, args: &Value) -> Result<String> {
        let parsed: TreeToolArgs =
            serde_json::from_value(args.clone()).map_err(|e| anyhow!("Invalid arguments: {e}"))?;
        Ok(generate_tree(fs, &self.request(parsed)).await?)
    }

    /// Run with a raw `tree`-style argument list such as `["src", "-L", "2"]`.
    pub async fn execute_tree_args<F: FileSystem>(
        &self,
        fs: &F,
        tokens: &[String],
    ) -> Result<String> {
        let args = TreeToolArgs {
            path: default_path(),
            tree_args: tokens.to_vec(),
            max_depth: None,
            show_hidden: None,
        };
        Ok(generate_tree(fs, &self.request(args)).await?)
    }
}
