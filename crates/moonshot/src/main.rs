//! `moonshot` - CLI for the Apollo catalog
//!
//! This binary loads the bundled datasets once and renders the requested
//! screen. Any bundle, schema or crew-resolution failure ends the process
//! with an error instead of printing partial data.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;
use tracing::{error, info};

use moonshot::cli::{
    AstronautCommand, AstronautsCommand, Cli, Command, ConfigCommand, MissionCommand,
    MissionsCommand,
};
use moonshot::present::{
    layout_for, render_astronaut_detail, render_astronaut_index, render_mission_detail,
    MissionDetail, MissionSummary, Session,
};
use moonshot::{init_logging, Bundle, Catalog, Config, MissionId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, letting --data-dir win over the file
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data.dir = Some(dir);
    }

    let bundle = Bundle::from_config(&config);
    let load = || {
        Catalog::load(&bundle, &config.data).map_err(|e| {
            error!("Bundled data is unusable: {e}");
            e
        })
    };

    // Execute the command
    match cli.command {
        Command::Missions(cmd) => handle_missions(&load()?, &config, &cmd),
        Command::Mission(cmd) => handle_mission(&load()?, &config, &cmd),
        Command::Astronauts(cmd) => handle_astronauts(&load()?, &cmd),
        Command::Astronaut(cmd) => handle_astronaut(&load()?, &config, &cmd),
        Command::Check => handle_check(&load()?, &bundle),
        Command::Browse => handle_browse(&load()?, &config),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_missions(
    catalog: &Catalog,
    config: &Config,
    cmd: &MissionsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.json {
        let summaries: Vec<MissionSummary> =
            catalog.missions().iter().map(MissionSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        let mode = cmd.layout.map_or(config.display.layout, Into::into);
        print!("{}", layout_for(mode, &config.display).render(catalog.missions()));
    }
    Ok(())
}

fn handle_mission(
    catalog: &Catalog,
    config: &Config,
    cmd: &MissionCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let mission = catalog.mission(&MissionId::from(cmd.id.as_str()))?;
    let roster = catalog.roster(mission)?;
    if cmd.json {
        let detail = MissionDetail::new(mission, &roster);
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!(
            "{}",
            render_mission_detail(mission, &roster, config.display.width)
        );
    }
    Ok(())
}

fn handle_astronauts(
    catalog: &Catalog,
    cmd: &AstronautsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let astronauts = catalog.astronauts().sorted_by_name();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&astronauts)?);
    } else {
        print!("{}", render_astronaut_index(&astronauts));
    }
    Ok(())
}

fn handle_astronaut(
    catalog: &Catalog,
    config: &Config,
    cmd: &AstronautCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let astronaut = catalog.astronaut(&cmd.id)?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(astronaut)?);
    } else {
        print!(
            "{}",
            render_astronaut_detail(astronaut, config.display.width)
        );
    }
    Ok(())
}

fn handle_check(catalog: &Catalog, bundle: &Bundle) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = catalog.verify().map_err(|e| {
        error!("Crew resolution failed: {e}");
        e
    })?;
    info!(resolved, "Every mission roster resolved");

    println!("moonshot check");
    println!("--------------");
    println!("Bundle:        {}", bundle.describe());
    println!("Astronauts:    {}", catalog.astronauts().len());
    println!("Missions:      {}", catalog.missions().len());
    println!("Crew resolved: {resolved}");
    println!();
    println!("All mission rosters resolve.");
    Ok(())
}

fn handle_browse(catalog: &Catalog, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(catalog, config.display.clone());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Data]");
                println!(
                    "  Bundle:             {}",
                    Bundle::from_config(config).describe()
                );
                println!("  Astronauts file:    {}", config.data.astronauts_file);
                println!("  Missions file:      {}", config.data.missions_file);
                println!();
                println!("[Display]");
                println!("  Layout:             {}", config.display.layout);
                println!("  Width:              {}", config.display.width);
                println!("  Cell width:         {}", config.display.cell_width);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
