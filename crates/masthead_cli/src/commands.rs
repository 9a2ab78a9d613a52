//! Command implementations

use anyhow::{Context as _, Result};
use masthead_theme::{Brand, ThemeRegistry, TokenSet};
use masthead_tokens::{Resolved, Resolver, DEFAULT_MAX_DEPTH};
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::MastheadConfig;
use crate::OutputFormat;

pub struct Context {
    config: MastheadConfig,
    format: OutputFormat,
}

impl Context {
    pub fn new(config: MastheadConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Catalog for this run: the configured token directory, or the embedded
    /// documents
    fn registry(&self) -> Result<Arc<ThemeRegistry>> {
        let max_depth = self.config.resolver.max_depth;
        if let Some(dir) = &self.config.theme.tokens_dir {
            let registry = ThemeRegistry::from_dir(dir, max_depth)
                .with_context(|| format!("Failed to load tokens from {}", dir.display()))?;
            return Ok(Arc::new(registry));
        }
        if max_depth == DEFAULT_MAX_DEPTH {
            return Ok(Arc::clone(ThemeRegistry::builtin()));
        }
        let set = TokenSet::embedded().context("Failed to load embedded tokens")?;
        Ok(Arc::new(ThemeRegistry::build(&set, max_depth)))
    }

    fn brand(&self, id: Option<&str>) -> Brand {
        let id = id.unwrap_or(&self.config.theme.default_brand);
        if Brand::from_id(id).is_none() {
            tracing::warn!(id, fallback = Brand::DEFAULT.id(), "unknown brand");
        }
        ThemeRegistry::resolve_brand(id)
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn brands(ctx: &Context) -> Result<ExitCode> {
    match ctx.format {
        OutputFormat::Text => {
            for brand in Brand::all() {
                println!(
                    "{:<18} {:<20} {}",
                    brand.id(),
                    brand.attribute_value(),
                    brand.display_name()
                );
            }
        }
        OutputFormat::Json => {
            let brands: Vec<_> = Brand::all()
                .iter()
                .map(|brand| {
                    json!({
                        "id": brand.id(),
                        "attribute": brand.attribute_value(),
                        "name": brand.display_name(),
                    })
                })
                .collect();
            print_json(&json!(brands))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn theme(ctx: &Context, id: Option<&str>) -> Result<ExitCode> {
    let registry = ctx.registry()?;
    let theme = registry.get(ctx.brand(id));
    let roles = theme.role_map();

    match ctx.format {
        OutputFormat::Text => {
            println!("{} ({})", theme.display_name(), theme.brand().attribute_value());
            for (role, value) in &roles {
                println!("  {role:<22} {value}");
            }
        }
        OutputFormat::Json => print_json(&json!({
            "id": theme.id(),
            "attribute": theme.brand().attribute_value(),
            "name": theme.display_name(),
            "roles": roles,
        }))?,
    }
    Ok(ExitCode::SUCCESS)
}

pub fn resolve(ctx: &Context, reference: &str, id: Option<&str>) -> Result<ExitCode> {
    let registry = ctx.registry()?;
    let brand = ctx.brand(id);
    let resolved = registry.resolver(brand).resolve_str(reference);
    report_resolved(ctx, reference, &resolved)
}

pub async fn resolve_remote(ctx: &Context, reference: &str, url: &str) -> Result<ExitCode> {
    let client = reqwest::Client::new();
    let graph = masthead_tokens::fetch_graph(&client, url)
        .await
        .with_context(|| format!("Failed to fetch tokens from {url}"))?;
    let resolved = Resolver::new(&graph)
        .with_max_depth(ctx.config.resolver.max_depth)
        .resolve_str(reference);
    report_resolved(ctx, reference, &resolved)
}

fn report_resolved(ctx: &Context, reference: &str, resolved: &Resolved) -> Result<ExitCode> {
    match ctx.format {
        OutputFormat::Text => match resolved {
            Resolved::Value(value) => println!("{value}"),
            Resolved::Unresolved(unresolved) => eprintln!("unresolved {unresolved}"),
        },
        OutputFormat::Json => print_json(&resolved_json(reference, resolved))?,
    }
    Ok(if resolved.is_resolved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn resolved_json(reference: &str, resolved: &Resolved) -> serde_json::Value {
    json!({
        "reference": reference,
        "resolved": resolved.is_resolved(),
        "value": resolved.as_str(),
        "reason": resolved.unresolved().map(|u| u.reason.to_string()),
    })
}

pub fn audit(ctx: &Context) -> Result<ExitCode> {
    let registry = ctx.registry()?;
    let failures = registry.audit();

    match ctx.format {
        OutputFormat::Text => {
            for (brand, token) in &failures {
                println!(
                    "{} {}:{} -> {}",
                    brand.attribute_value(),
                    token.namespace,
                    token.path,
                    token.unresolved
                );
            }
            tracing::info!(
                brands = registry.brands().len(),
                failures = failures.len(),
                "audit finished"
            );
        }
        OutputFormat::Json => {
            let failures: Vec<_> = failures
                .iter()
                .map(|(brand, token)| {
                    json!({
                        "brand": brand.attribute_value(),
                        "namespace": token.namespace.name(),
                        "path": token.path,
                        "reference": token.unresolved.reference,
                        "reason": token.unresolved.reason.to_string(),
                    })
                })
                .collect();
            print_json(&json!(failures))?;
        }
    }

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
