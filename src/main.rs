use clap::Parser;
use job_autofill::cli::commands::{
    cmd_fill, cmd_inspect, cmd_probe, cmd_profile_export, cmd_profile_import, cmd_profile_list,
    cmd_profile_show, AiSettings,
};
use job_autofill::cli::config::{load_config, Cli, Commands, ProfileCommands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve AI settings: CLI > config > env
    let ai = AiSettings {
        endpoint: cli.ai_endpoint.clone().or(config.ai.endpoint.clone()),
        model: cli.ai_model.clone().or(config.ai.model.clone()),
        api_key: cli
            .api_key
            .clone()
            .or(config.ai.api_key.clone())
            .or_else(|| std::env::var("JOB_AUTOFILL_API_KEY").ok()),
    };

    let profiles_dir = config.profiles.dir.clone();

    match cli.command {
        Commands::Fill { page, profile, ai: use_ai, out } => {
            let succeeded = cmd_fill(
                &page,
                &profile,
                use_ai,
                out.as_deref(),
                cli.verbose,
                &profiles_dir,
                config.trace.path.as_deref(),
                &ai,
            )?;
            if !succeeded {
                std::process::exit(1);
            }
        }
        Commands::Inspect { page } => {
            cmd_inspect(&page)?;
        }
        Commands::Probe => {
            cmd_probe()?;
        }
        Commands::Profile { action } => match action {
            ProfileCommands::List => cmd_profile_list(&profiles_dir)?,
            ProfileCommands::Show { name } => cmd_profile_show(&profiles_dir, &name)?,
            ProfileCommands::Import { name, file } => {
                cmd_profile_import(&profiles_dir, &name, &file)?
            }
            ProfileCommands::Export { name, output } => {
                cmd_profile_export(&profiles_dir, &name, output.as_deref())?
            }
        },
    }

    Ok(())
}
