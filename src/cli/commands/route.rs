//! `route` command: load the nearest map and plan between two junctions

use super::{NO_ROUTE_EXIT, shared};
use crate::cli::args::{OutputFormat, RouteArgs};
use crate::config::PlannerConfig;
use crate::models::{MapDefinition, Route, RouteWaypoint};
use crate::planner::PathPlanner;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info};

/// JSON shape of a planned route
#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    map: &'a MapDefinition,
    route: &'a Route,
    waypoints: Vec<RouteWaypoint>,
}

pub fn run(args: &RouteArgs, config: &PlannerConfig) -> Result<ExitCode> {
    let here = args.position.coordinate();

    let loaded = match shared::load_map(config, &here) {
        Ok(loaded) => loaded,
        Err(load_error) => {
            error!("Map load failed with code {}: {}", load_error.code(), load_error);
            shared::report_load_failure(&load_error).context("Failed to write diagnostic")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let planner = PathPlanner::new(&loaded.graph, config.search);
    let route = match planner.find_path(args.start, args.goal) {
        Ok(route) => route,
        Err(failure) => {
            info!("Planning failed: {}", failure);
            eprintln!("{} {}", "No route:".bright_red().bold(), failure);
            return Ok(ExitCode::from(NO_ROUTE_EXIT));
        }
    };

    let waypoints = route.waypoints(&loaded.graph);
    match args.output_format {
        OutputFormat::Json => {
            let report = RouteReport {
                map: &loaded.selected,
                route: &route,
                waypoints,
            };
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize route")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_route(&loaded.selected, &route, &waypoints),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_route(map: &MapDefinition, route: &Route, waypoints: &[RouteWaypoint]) {
    println!("{}", "Route found".bright_green().bold());
    println!(
        "  {} {} ({}, {})",
        "Map:".bright_cyan(),
        map.filename.bright_white().bold(),
        map.position.latitude,
        map.position.longitude
    );
    println!(
        "  {} {} mm",
        "Cost:".bright_cyan(),
        route.cost_mm.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Nodes expanded:".bright_cyan(),
        route.nodes_expanded.to_string().bright_white()
    );
    println!();

    for waypoint in waypoints {
        println!(
            "  {:>3}  junction {:>2}  ({:>9}, {:>9}) mm  {:>9} mm",
            waypoint.sequence.to_string().bright_yellow(),
            waypoint.junction,
            waypoint.position.east_mm,
            waypoint.position.north_mm,
            waypoint.cumulative_mm
        );
    }
}
