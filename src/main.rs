use std::fs;
use std::path::Path;

use clap::Parser;

use style_guard::catalog::RuleCode;
use style_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use style_guard::config::{Config, ConfigLoader, FileConfigLoader};
use style_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use style_guard::report::Report;
use style_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use style_guard::session::AnalysisSession;
use style_guard::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules => run_rules(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> style_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Fatal: the root path must exist before any analysis starts
    if !args.path.exists() {
        return Err(style_guard::StyleGuardError::PathNotFound(
            args.path.clone(),
        ));
    }

    // 3. Build the candidate filter from config plus CLI overrides
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let mut exclude_names = config.scanner.exclude_names.clone();
    exclude_names.extend(args.exclude_name.clone());
    let filter = SourceFilter::new(
        config.scanner.extensions.clone(),
        exclude_names,
        &exclude_patterns,
    )?;

    // 4. Scan for candidate files (sorted, zero-byte files dropped)
    let use_gitignore = args.gitignore || config.scanner.gitignore;
    let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);
    let files = scanner.scan(&args.path)?;

    // 5. Analyze files strictly sequentially; detection order is part of
    //    the output contract
    let mut session = AnalysisSession::new();
    for file in &files {
        session.analyze_file(file)?;
    }

    // 6. Surface per-file parse diagnostics on stderr
    let result = session.finish();
    for diagnostic in &result.diagnostics {
        eprintln!("warning: {}: {}", diagnostic.file, diagnostic.message);
    }

    // 7. Build and render the report
    let report = Report::build(result.log, result.files_analyzed);
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode)?;

    // 8. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 9. Exit code
    if report.total_violations() > 0 {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> style_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
) -> style_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_rules() -> i32 {
    for code in RuleCode::ALL {
        println!("{code} {}", code.template());
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> style_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(style_guard::StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# style-guard configuration file

[scanner]
# File extensions treated as Python source
extensions = ["py"]

# Respect .gitignore rules while scanning
gitignore = false

# Exclude patterns (glob syntax)
exclude = [
    "**/__pycache__/**",
    "**/.git/**",
    "**/venv/**",
    "**/.venv/**",
]

# Exact file names to skip wherever they appear
# exclude_names = ["setup.py"]
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
