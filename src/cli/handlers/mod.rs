use tracing::warn;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, LoadedConfig};
use crate::model::{RecordingNavigator, StepOutcome};
use crate::ops::{SelectionController, SelectionError};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a one-shot subcommand. The TUI (no subcommand) is launched from main.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let loaded = config_io::load_config(cli.config.as_deref())?;

    match cli.command {
        None => Err("no subcommand given; run without arguments for the TUI".into()),
        Some(cmd) => match cmd {
            Commands::Categories => cmd_categories(&loaded, json),
            Commands::Titles(args) => cmd_titles(&loaded, args, json),
            Commands::Suggest(args) => cmd_suggest(&loaded, args, json),
            Commands::Resolve(args) => cmd_resolve(&loaded, args),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_categories(loaded: &LoadedConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&categories_json(&loaded.registry))?);
    } else {
        print!("{}", format_categories(&loaded.registry));
    }
    Ok(())
}

fn cmd_titles(
    loaded: &LoadedConfig,
    args: TitlesArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let known = loaded.registry.contains(&args.category);
    if !known {
        warn!(category = %args.category, "unknown category");
    }
    let titles = loaded.registry.candidates(&args.category).to_vec();

    if json {
        let out = TitlesJson {
            category: args.category,
            known,
            titles,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for title in titles {
            println!("{}", title);
        }
    }
    Ok(())
}

fn cmd_suggest(
    loaded: &LoadedConfig,
    args: SuggestArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = controller_for(loaded);
    controller.select_category(&args.category);
    let options = controller.suggestions(&args.query);

    if json {
        let out = SuggestionsJson {
            category: args.category,
            query: args.query,
            options,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_suggestions(&options));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

fn cmd_resolve(loaded: &LoadedConfig, args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = resolve(loaded, args)?;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

/// Apply the arguments in form order (category, title, word count) and press Next.
pub fn resolve(loaded: &LoadedConfig, args: ResolveArgs) -> Result<StepOutcome, SelectionError> {
    let mut controller = controller_for(loaded);

    if let Some(category) = &args.category {
        controller.select_category(category);
    }

    if let Some(pick) = &args.pick {
        // A pick has to come from the dropdown, which only lists candidates
        controller.choose_candidate(pick)?;
    } else if let Some(text) = &args.text {
        controller.enter_free_text(text);
    }

    if let Some(words) = args.words {
        controller.set_word_count(words);
    }

    let mut navigator = RecordingNavigator::default();
    controller.go_next(&mut navigator);
    Ok(navigator
        .outcome
        .unwrap_or_else(|| StepOutcome::Next(controller.snapshot())))
}

fn controller_for(loaded: &LoadedConfig) -> SelectionController {
    SelectionController::new(
        loaded.registry.clone(),
        &loaded.initial_category,
        loaded.config.word_count,
    )
}
