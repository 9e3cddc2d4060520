//! `check` command: load the nearest map and summarise it

use super::shared;
use crate::catalog::LoadedMap;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::PlannerConfig;
use crate::constants::EDGE_SLOTS;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    map: &'a str,
    latitude: f64,
    longitude: f64,
    junctions: usize,
    edges: usize,
    searched_edges: usize,
}

pub fn run(args: &CheckArgs, config: &PlannerConfig) -> Result<ExitCode> {
    let here = args.position.coordinate();

    let loaded = match shared::load_map(config, &here) {
        Ok(loaded) => loaded,
        Err(load_error) => {
            error!("Map load failed with code {}: {}", load_error.code(), load_error);
            shared::report_load_failure(&load_error).context("Failed to write diagnostic")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = summarise(&loaded, config.search.edge_slots);
    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize summary")?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{}", "Map loaded".bright_green().bold());
            println!(
                "  {} {} ({}, {})",
                "Map:".bright_cyan(),
                report.map.bright_white().bold(),
                report.latitude,
                report.longitude
            );
            println!(
                "  {} {}",
                "Junctions:".bright_cyan(),
                report.junctions.to_string().bright_white()
            );
            println!(
                "  {} {} ({} searched)",
                "Edges:".bright_cyan(),
                report.edges.to_string().bright_white(),
                report.searched_edges
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn summarise(loaded: &LoadedMap, edge_slots: usize) -> CheckReport<'_> {
    let nodes = loaded.graph.nodes();
    CheckReport {
        map: &loaded.selected.filename,
        latitude: loaded.selected.position.latitude,
        longitude: loaded.selected.position.longitude,
        junctions: nodes.len(),
        edges: nodes.iter().map(|j| j.edges(EDGE_SLOTS).count()).sum(),
        searched_edges: nodes.iter().map(|j| j.edges(edge_slots).count()).sum(),
    }
}
