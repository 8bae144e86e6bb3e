use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use derive_more::{Display, From};
use eulerian::{
    eulerian::{classify, eulerian_cycle, eulerian_path, Trail},
    front_end::{error::ReadError, read_graph},
    graph::{EdgeListGraph, Graph},
};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use std::error::Error;

#[derive(Debug, Display, From)]
enum CliError {
    #[display(fmt = "{}", _0)]
    Read(ReadError),
    #[display(fmt = "{}", _0)]
    Trail(eulerian::eulerian::Error),
}

impl std::error::Error for CliError {}

/// Run `handle` on every GRAPH file in parallel and print the results in
/// argument order.
fn for_each_graph<F>(matches: &ArgMatches, handle: F) -> Result<(), Box<dyn Error>>
where
    F: Fn(&EdgeListGraph) -> Result<String, CliError> + Sync,
{
    let paths: Vec<&str> = matches.values_of("GRAPH").into_iter().flatten().collect();
    info!("processing {} graphs", paths.len());
    let outputs: Vec<Result<String, CliError>> = paths
        .par_iter()
        .map(|path| {
            let graph = read_graph(path)?;
            info!("read {}: {}", path, graph.info());
            handle(&graph)
        })
        .collect();
    for (path, output) in paths.iter().zip(outputs) {
        match output {
            Ok(output) => println!("{}: {}", path, output),
            Err(e) => return Err(format!("{}: {}", path, e).into()),
        }
    }
    Ok(())
}

fn format_trail(trail: &Trail, with_vertices: bool) -> String {
    let edges = trail.edges().iter().join(" ");
    if with_vertices {
        format!("{} | {}", edges, trail.vertices().iter().join(" "))
    } else {
        edges
    }
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for_each_graph(matches, |graph| Ok(graph.info().to_string()))
}

fn handle_classify(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for_each_graph(matches, |graph| Ok(classify(graph).to_string()))
}

fn handle_path(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let with_vertices = matches.is_present("vertices");
    for_each_graph(matches, |graph| {
        Ok(format_trail(&eulerian_path(graph)?, with_vertices))
    })
}

fn handle_cycle(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let with_vertices = matches.is_present("vertices");
    for_each_graph(matches, |graph| {
        Ok(format_trail(&eulerian_cycle(graph)?, with_vertices))
    })
}

fn graph_arg() -> Arg<'static, 'static> {
    Arg::with_name("GRAPH").required(true).multiple(true)
}

fn vertices_arg() -> Arg<'static, 'static> {
    Arg::with_name("vertices")
        .help("Also prints the vertices walked")
        .long("vertices")
        .takes_value(false)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("Displays the size and directedness of the graphs")
                .arg(graph_arg()),
        )
        .subcommand(
            SubCommand::with_name("classify")
                .about("Tells whether the graphs have an Eulerian path and cycle")
                .after_help(
                    r"Prints `HAS_PATH HAS_CYCLE START` per graph, with `-` when there is
no start vertex.
",
                )
                .arg(graph_arg()),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Prints an Eulerian path of the graphs")
                .arg(graph_arg())
                .arg(vertices_arg()),
        )
        .subcommand(
            SubCommand::with_name("cycle")
                .about("Prints an Eulerian cycle of the graphs")
                .arg(graph_arg())
                .arg(vertices_arg()),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("classify") {
        handle_classify(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("path") {
        handle_path(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("cycle") {
        handle_cycle(matches)?;
    }
    Ok(())
}
