//! proposalforge CLI - sales proposal generation tool

mod terminal;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use proposalforge::{
    build_service_text, render_lines, sample_form, sample_proposal, CategoryState, FileStore,
    ForgeConfig, FormData, History, HistoryFilter, HttpAgent, JsonFormat, ProposalForge,
    RenderOptions, Selection, ServiceCatalog,
};

#[derive(Parser)]
#[command(name = "proposalforge")]
#[command(version)]
#[command(about = "Generate, render, and browse sales proposals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render proposal markdown as text, HTML, or JSON line records
    Render {
        /// Markdown file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: RenderFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Uppercase headings in text output
        #[arg(long)]
        uppercase: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the service catalog and the requirements text for a selection
    Services {
        /// Select a service item (repeatable)
        #[arg(short, long, value_name = "ITEM")]
        select: Vec<String>,

        /// Toggle a whole category (repeatable)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Vec<String>,

        /// Select every service
        #[arg(long)]
        all: bool,

        /// Catalog JSON file (built-in catalog if not specified)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Generate a proposal through the agent
    Generate {
        /// Deal context JSON file (camelCase form fields)
        #[arg(long, value_name = "FILE")]
        form: Option<PathBuf>,

        /// Client company name
        #[arg(long)]
        client_name: Option<String>,

        /// Client profile
        #[arg(long)]
        client_profile: Option<String>,

        /// Project type
        #[arg(long)]
        project_type: Option<String>,

        /// Service requirements text
        #[arg(long)]
        services: Option<String>,

        /// Select a service item for the requirements text (repeatable)
        #[arg(short, long, value_name = "ITEM")]
        select: Vec<String>,

        /// Use every catalog service for the requirements text
        #[arg(long)]
        all_services: bool,

        /// Budget range
        #[arg(long)]
        budget: Option<String>,

        /// Desired timeline
        #[arg(long)]
        timeline: Option<String>,

        /// Special notes
        #[arg(long)]
        notes: Option<String>,

        /// Agent id
        #[arg(long, env = "PROPOSALFORGE_AGENT_ID")]
        agent_id: Option<String>,

        /// Agent endpoint URL
        #[arg(long, env = "PROPOSALFORGE_ENDPOINT")]
        endpoint: Option<String>,

        /// Print the proposal as JSON instead of formatted sections
        #[arg(long)]
        json: bool,
    },

    /// Show the built-in sample deal context and proposal
    Sample {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse saved proposals
    #[command(subcommand)]
    History(HistoryCommands),

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List saved proposals, newest first
    List {
        /// Search client name or proposal title
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one project type
        #[arg(short = 't', long = "type", value_name = "PROJECT_TYPE")]
        project_type: Option<String>,
    },

    /// Show a saved proposal
    Show {
        /// Proposal id
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a saved proposal's deal context for use with `generate --form`
    Reuse {
        /// Proposal id
        id: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    /// Colored terminal output
    Terminal,
    /// Plain text
    Text,
    /// HTML fragment
    Html,
    /// JSON line records
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            format,
            output,
            uppercase,
            compact,
        }) => cmd_render(&input, format, output.as_deref(), uppercase, compact),
        Some(Commands::Services {
            select,
            category,
            all,
            catalog,
        }) => cmd_services(&select, &category, all, catalog.as_deref()),
        Some(Commands::Generate {
            form,
            client_name,
            client_profile,
            project_type,
            services,
            select,
            all_services,
            budget,
            timeline,
            notes,
            agent_id,
            endpoint,
            json,
        }) => {
            let overrides = FormOverrides {
                client_name,
                client_profile,
                project_type,
                services,
                budget,
                timeline,
                notes,
            };
            cmd_generate(
                form.as_deref(),
                overrides,
                &select,
                all_services,
                agent_id,
                endpoint,
                json,
            )
        }
        Some(Commands::Sample { json }) => cmd_sample(json),
        Some(Commands::History(HistoryCommands::List {
            search,
            project_type,
        })) => cmd_history_list(search, project_type),
        Some(Commands::History(HistoryCommands::Show { id, json })) => cmd_history_show(&id, json),
        Some(Commands::History(HistoryCommands::Reuse { id, output })) => {
            cmd_history_reuse(&id, output.as_deref())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: proposalforge <COMMAND>".yellow());
            println!("       proposalforge --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> std::io::Result<String> {
    if input.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    format: RenderFormat,
    output: Option<&Path>,
    uppercase: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = read_input(input)?;
    let records = render_lines(&markdown);
    let options = RenderOptions::new().with_uppercase_headings(uppercase);

    let rendered = match format {
        RenderFormat::Terminal if output.is_none() => {
            terminal::print_records(&records);
            return Ok(());
        }
        RenderFormat::Terminal | RenderFormat::Text => {
            proposalforge::render::to_text(&records, &options)
        }
        RenderFormat::Html => proposalforge::render::to_html(&records, &options),
        RenderFormat::Json => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            proposalforge::render::to_json(&records, format)?
        }
    };

    write_output(output, &rendered)?;
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<ServiceCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ServiceCatalog::from_json(&fs::read_to_string(path)?)?),
        None => Ok(ServiceCatalog::builtin()),
    }
}

fn build_selection(
    catalog: &ServiceCatalog,
    items: &[String],
    categories: &[String],
    all: bool,
) -> Result<Selection, Box<dyn std::error::Error>> {
    let mut selection = if all {
        Selection::select_all(catalog)
    } else {
        Selection::new()
    };

    for name in categories {
        let category = catalog
            .category(name)
            .ok_or_else(|| format!("Unknown service category: {}", name))?;
        selection.toggle_category(category);
    }
    for item in items {
        if !catalog.items().any(|i| i == item.as_str()) {
            return Err(format!("Unknown service: {}", item).into());
        }
        selection.toggle_item(item);
    }

    Ok(selection)
}

fn cmd_services(
    items: &[String],
    categories: &[String],
    all: bool,
    catalog: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog)?;
    let selection = build_selection(&catalog, items, categories, all)?;

    println!("{}", "Service Catalog".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for category in &catalog.categories {
        let marker = match selection.category_state(category) {
            CategoryState::Full => "[x]".green(),
            CategoryState::Partial => "[-]".yellow(),
            CategoryState::Unselected => "[ ]".dimmed(),
        };
        println!(
            "{} {} {}",
            marker,
            category.name.bold(),
            format!("({}/{})", selection.selected_in(category), category.items.len()).dimmed()
        );
        for item in &category.items {
            let check = if selection.contains(item) {
                "✓".green()
            } else {
                " ".normal()
            };
            println!("    {} {}", check, item);
        }
    }

    if !selection.is_empty() {
        println!();
        println!("{}", "Service Requirements".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", build_service_text(&catalog, &selection));
    }

    Ok(())
}

struct FormOverrides {
    client_name: Option<String>,
    client_profile: Option<String>,
    project_type: Option<String>,
    services: Option<String>,
    budget: Option<String>,
    timeline: Option<String>,
    notes: Option<String>,
}

impl FormOverrides {
    fn apply(self, mut form: FormData) -> FormData {
        if let Some(v) = self.client_name {
            form.client_name = v;
        }
        if let Some(v) = self.client_profile {
            form.client_profile = v;
        }
        if let Some(v) = self.project_type {
            form.project_type = v;
        }
        if let Some(v) = self.services {
            form.service_requirements = v;
        }
        if let Some(v) = self.budget {
            form.budget_range = v;
        }
        if let Some(v) = self.timeline {
            form.timeline = v;
        }
        if let Some(v) = self.notes {
            form.special_notes = v;
        }
        form
    }
}

fn cmd_generate(
    form_path: Option<&Path>,
    overrides: FormOverrides,
    select: &[String],
    all_services: bool,
    agent_id: Option<String>,
    endpoint: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = match form_path {
        Some(path) => serde_json::from_str::<FormData>(&read_input(path)?)?,
        None => FormData::default(),
    };

    if all_services || !select.is_empty() {
        let catalog = ServiceCatalog::builtin();
        let selection = build_selection(&catalog, select, &[], all_services)?;
        form.service_requirements = build_service_text(&catalog, &selection);
    }
    let form = overrides.apply(form);

    let mut config = ForgeConfig::from_env()?;
    if let Some(agent_id) = agent_id {
        config = config.with_agent_id(agent_id);
    }
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }

    log::debug!(
        "agent {} at {}, history in {}",
        config.agent_id,
        config.endpoint,
        config.storage_dir.display()
    );
    let agent = HttpAgent::new(&config)?;
    let store = FileStore::new(&config.storage_dir);
    let mut forge = ProposalForge::new(agent, store, config.agent_id.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Generating proposal for {}...", form.client_name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    // Use tokio runtime for the async agent call
    let rt = tokio::runtime::Runtime::new()?;
    let generation = match rt.block_on(forge.generate(&form)) {
        Ok(generation) => generation,
        Err(e) => {
            spinner.finish_and_clear();
            if !matches!(e, proposalforge::Error::Validation(_)) {
                eprintln!("{}", "Run the same command again to retry.".yellow());
            }
            return Err(e.into());
        }
    };
    spinner.finish_and_clear();

    if let Some(warning) = &generation.warning {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }

    let proposal = &generation.proposal;
    if json {
        println!("{}", serde_json::to_string_pretty(proposal)?);
        return Ok(());
    }

    terminal::print_proposal(&proposal.proposal_data, true);
    println!();
    if let Some(url) = &proposal.pdf_url {
        println!("{} {}", "PDF:".bold(), url.blue().underline());
    }
    println!("{} {}", "Saved as".green(), proposal.id);

    Ok(())
}

fn cmd_sample(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let form = sample_form();
    let proposal = sample_proposal();

    if json {
        let value = serde_json::json!({
            "formData": form,
            "proposalData": proposal,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Sample Deal Context".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Client".bold(), form.client_name);
    println!("{}: {}", "Project Type".bold(), form.project_type);
    println!("{}: {}", "Budget".bold(), form.budget_range);
    println!("{}: {}", "Timeline".bold(), form.timeline);
    println!();
    terminal::print_proposal(&proposal, false);

    Ok(())
}

fn load_history() -> Result<History, Box<dyn std::error::Error>> {
    let config = ForgeConfig::from_env()?;
    Ok(History::load(&FileStore::new(&config.storage_dir)))
}

fn cmd_history_list(
    search: Option<String>,
    project_type: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_history()?;

    let mut filter = HistoryFilter::new();
    if let Some(query) = search {
        filter = filter.with_query(query);
    }
    if let Some(project_type) = project_type {
        filter = filter.with_project_type(project_type);
    }

    let matched = history.filter(&filter);
    if matched.is_empty() {
        if history.is_empty() {
            println!("{}", "No proposals yet.".dimmed());
        } else {
            println!("{}", "No proposals match your search.".dimmed());
        }
        return Ok(());
    }

    for proposal in &matched {
        terminal::print_card(proposal);
        println!();
    }
    println!(
        "{} of {} proposals",
        matched.len().to_string().bold(),
        history.len()
    );

    Ok(())
}

fn cmd_history_show(id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_history()?;
    let proposal = history
        .get(id)
        .ok_or_else(|| proposalforge::Error::ProposalNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(proposal)?);
        return Ok(());
    }

    terminal::print_card(proposal);
    println!();
    terminal::print_proposal(&proposal.proposal_data, true);
    if let Some(url) = &proposal.pdf_url {
        println!();
        println!("{} {}", "PDF:".bold(), url.blue().underline());
    }

    Ok(())
}

fn cmd_history_reuse(id: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_history()?;
    let proposal = history
        .get(id)
        .ok_or_else(|| proposalforge::Error::ProposalNotFound(id.to_string()))?;

    let json = serde_json::to_string_pretty(&proposal.template())?;
    write_output(output, &json)?;

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "proposalforge".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Sales proposal generation tool");
    println!();
    println!("License: MIT");
}
