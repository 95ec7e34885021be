mod boot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use muddle_core::{Result, RootPluginManager};

/// Muddle: a dependency-aware plugin engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Settings file (.json, .toml, .yaml or .yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides the settings file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage plugins
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// List registered plugins with their state and direct dependencies
    List,
    /// Print the resolved dependencies of a plugin, in activation order
    Depends {
        /// The name of the plugin
        name: String,
    },
    /// Enable plugins together with their dependencies
    Enable {
        /// The names of the plugins to enable
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Disable a plugin and everything that depends on it
    Disable {
        /// The name of the plugin to disable
        name: String,
    },
}

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let mut settings = boot::load_settings(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }

    let mut root = boot::boot(&settings)?;
    let outcome = match args.command {
        Commands::Plugin { command } => plugin_command(&mut root, command),
    };

    // Shut down even when the command failed, but report the command error first
    let stopped = root.shutdown();
    outcome?;
    debug!("Stopped plugins: {:?}", stopped?);
    Ok(())
}

fn plugin_command(root: &mut RootPluginManager, command: PluginCommand) -> Result<()> {
    match command {
        PluginCommand::List => {
            let names = root.plugins().names();
            if names.is_empty() {
                println!("No plugins registered.");
            }
            for name in names {
                println!("{}", describe(root, &name));
            }
        }
        PluginCommand::Depends { name } => {
            let depends = root.get_depends(&name)?;
            if depends.is_empty() {
                println!("'{}' has no dependencies.", name);
            }
            for class in depends {
                println!("{}", class.name());
            }
        }
        PluginCommand::Enable { names } => {
            for name in &names {
                root.enable(name)?;
            }
            println!("Enabled: {}", root.enabled_names().join(", "));
        }
        PluginCommand::Disable { name } => {
            let removed = root.disable(&name)?;
            if removed.is_empty() {
                println!("'{}' was not enabled.", name);
            } else {
                println!("Disabled: {}", removed.join(", "));
            }
            println!("Enabled: {}", root.enabled_names().join(", "));
        }
    }
    Ok(())
}

/// One line of `plugin list` output
fn describe(root: &RootPluginManager, name: &str) -> String {
    let mut flags = vec![if root.is_enabled(name) { "enabled" } else { "disabled" }];
    if root.is_core(name) {
        flags.push("core");
    }

    let mut line = format!("{} [{}]", name, flags.join(", "));
    if let Some(class) = root.plugins().get(name) {
        if !class.depends().is_empty() {
            line.push_str(&format!(" depends on: {}", class.depends().join(", ")));
        }
    }
    line
}
