// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::api::TenantContext;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("it.officinalabs", "OfficinaLabs", "officina"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub token: String,
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg = serde_json::from_str(&raw)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    Ok(cfg)
}

pub fn save(cfg: &Config) -> Result<PathBuf> {
    let path = config_path()?;
    fs::write(&path, serde_json::to_string_pretty(cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(path)
}

/// Build the tenant context from the config file, letting environment
/// variables override individual fields. Errors if any field ends up empty.
pub fn tenant_context() -> Result<TenantContext> {
    let cfg = load()?;
    let base_url = std::env::var("OFFICINA_BASE_URL").unwrap_or(cfg.base_url);
    let tenant_id = std::env::var("OFFICINA_TENANT").unwrap_or(cfg.tenant_id);
    let token = std::env::var("OFFICINA_TOKEN").unwrap_or(cfg.token);
    if base_url.is_empty() || tenant_id.is_empty() || token.is_empty() {
        anyhow::bail!(
            "Tenant context incomplete. Run 'officina config set --base-url ... --tenant ... --token ...' \
             or set OFFICINA_BASE_URL/OFFICINA_TENANT/OFFICINA_TOKEN."
        );
    }
    Ok(TenantContext {
        base_url,
        tenant_id,
        token,
    })
}
