use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use plumber_board::board::{JobBoard, TechnicianRoster};
use plumber_board::classify::classify_issue;
use plumber_board::config::BoardConfig;
use plumber_board::dashboard::{run_dashboard, DashboardState};
use plumber_board::data;
use plumber_board::filter::{FilterSet, ALL};
use plumber_board::records::{JobStatus, Severity, TechStatus};
use plumber_board::reports::{category_share, ReportBundle};

#[derive(Parser, Debug)]
#[command(name = "plumber-board")]
#[command(version)]
#[command(about = "Dispatch board for a plumbing-service business")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start the dashboard server
    Serve(ServeArgs),

    /// Job listing commands
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Technician listing commands
    Techs {
        #[command(subcommand)]
        command: TechCommands,
    },

    /// Print report data
    Reports {
        /// Output format
        #[arg(long, short = 'o', default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Port for the web dashboard
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind the dashboard to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,
}

#[derive(clap::Subcommand, Debug)]
enum JobCommands {
    /// List jobs, optionally searched and filtered
    List {
        /// Free-text search over customer, issue, and address
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by status (pending, assigned, in-progress, completed)
        #[arg(long)]
        status: Option<String>,

        /// Filter by severity (low, medium, high)
        #[arg(long)]
        severity: Option<String>,

        /// Output format
        #[arg(long, short = 'o', default_value = "table")]
        output: OutputFormat,
    },

    /// Triage a free-text issue description
    Classify {
        /// Customer's description of the problem
        description: String,

        /// Output format
        #[arg(long, short = 'o', default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(clap::Subcommand, Debug)]
enum TechCommands {
    /// List technicians, optionally searched and filtered
    List {
        /// Free-text search over name and specialties
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by status (available, busy, offline)
        #[arg(long)]
        status: Option<String>,

        /// Output format
        #[arg(long, short = 'o', default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let listen_addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    let config = BoardConfig::new(listen_addr);
    let state = DashboardState::seeded()?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        jobs = state.jobs.len(),
        technicians = state.technicians.len(),
        "Starting plumber-board"
    );

    run_dashboard(config, state).await;
    Ok(())
}

fn handle_jobs_list(
    search: Option<String>,
    status: Option<String>,
    severity: Option<String>,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Flag values are validated against the typed enums before filtering.
    let status = status.map(|s| s.parse::<JobStatus>()).transpose()?;
    let severity = severity.map(|s| s.parse::<Severity>()).transpose()?;

    let board = JobBoard::from_records(data::sample_jobs())?;
    let filters = FilterSet::new()
        .with("status", status.map_or(ALL, |s| s.as_str()))
        .with("severity", severity.map_or(ALL, |s| s.as_str()));
    let jobs = board.search(search.as_deref().unwrap_or(""), &filters);

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        OutputFormat::Table => {
            if jobs.is_empty() {
                println!("No jobs match the current search or filters.");
                return Ok(());
            }
            println!(
                "{:<4} {:<12} {:<9} {:<16} ISSUE",
                "ID", "STATUS", "SEVERITY", "CUSTOMER"
            );
            println!("{}", "-".repeat(72));
            for job in &jobs {
                let issue = truncate(&job.issue, 28);
                println!(
                    "{:<4} {:<12} {:<9} {:<16} {}",
                    job.id, job.status, job.severity, job.customer_name, issue
                );
            }
            println!();
            println!("Showing {} of {} jobs", jobs.len(), board.len());
            println!(
                "Tallies: {} pending, {} assigned, {} in-progress, {} completed",
                board.status_tally(JobStatus::Pending),
                board.status_tally(JobStatus::Assigned),
                board.status_tally(JobStatus::InProgress),
                board.status_tally(JobStatus::Completed),
            );
        }
    }
    Ok(())
}

/// Shorten text to at most `max` characters, on a char boundary.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn handle_classify(
    description: String,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let classification = classify_issue(&description);

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        OutputFormat::Table => {
            println!("Category:   {}", classification.category);
            println!("Confidence: {:.0}%", classification.confidence * 100.0);
            println!("Severity:   {}", classification.severity);
            println!("Urgency:    {}", classification.urgency);
            println!("Duration:   {}", classification.estimated_duration);
            if !classification.required_tools.is_empty() {
                println!("Tools:      {}", classification.required_tools.join(", "));
            }
            if !classification.recommended_parts.is_empty() {
                println!("Parts:      {}", classification.recommended_parts.join(", "));
            }
            if !classification.safety_notes.is_empty() {
                println!("Safety:");
                for note in &classification.safety_notes {
                    println!("  - {note}");
                }
            }
            println!("Next steps:");
            for step in &classification.next_steps {
                println!("  - {step}");
            }
        }
    }
    Ok(())
}

fn handle_techs_list(
    search: Option<String>,
    status: Option<String>,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = status.map(|s| s.parse::<TechStatus>()).transpose()?;

    let roster = TechnicianRoster::from_records(data::sample_technicians())?;
    let filters = FilterSet::new().with("status", status.map_or(ALL, |s| s.as_str()));
    let technicians = roster.search(search.as_deref().unwrap_or(""), &filters);

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&technicians)?);
        }
        OutputFormat::Table => {
            if technicians.is_empty() {
                println!("No technicians match the current search or filters.");
                return Ok(());
            }
            println!(
                "{:<4} {:<16} {:<10} {:<6} SPECIALTIES",
                "ID", "NAME", "STATUS", "RATING"
            );
            println!("{}", "-".repeat(78));
            for tech in &technicians {
                println!(
                    "{:<4} {:<16} {:<10} {:<6} {}",
                    tech.id,
                    tech.name,
                    tech.status,
                    tech.rating,
                    tech.specialties.join(", ")
                );
            }
            println!();
            println!(
                "Showing {} of {} technicians ({} available, {} busy, {} offline)",
                technicians.len(),
                roster.len(),
                roster.status_tally(TechStatus::Available),
                roster.status_tally(TechStatus::Busy),
                roster.status_tally(TechStatus::Offline),
            );
        }
    }
    Ok(())
}

fn handle_reports(output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ReportBundle {
        periods: data::sample_periods(),
        categories: data::sample_categories(),
        performance: data::sample_performance(),
    };

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        OutputFormat::Table => {
            if let Some(current) = bundle.current_period() {
                println!(
                    "Current period: {} ({}% completion, ${} revenue)",
                    current.period,
                    current.completion_rate(),
                    current.revenue,
                );
                println!();
            }

            println!("Monthly Trends");
            println!("{}", "=".repeat(64));
            println!(
                "{:<10} {:<6} {:<10} {:<9} {:<9} RATING",
                "PERIOD", "JOBS", "COMPLETED", "REVENUE", "RESP (h)"
            );
            println!("{}", "-".repeat(64));
            for period in &bundle.periods {
                println!(
                    "{:<10} {:<6} {:<9}% ${:<8} {:<9} {}",
                    period.period,
                    period.total_jobs,
                    period.completion_rate(),
                    period.revenue,
                    period.avg_response_hours,
                    period.customer_satisfaction,
                );
            }

            println!();
            println!("Jobs by Category");
            println!("{}", "-".repeat(64));
            for category in &bundle.categories {
                println!(
                    "{:<20} {:<4} jobs  ${:<7} ({:.0}% of busiest)",
                    category.category,
                    category.jobs,
                    category.revenue,
                    category_share(&bundle.categories, category.jobs),
                );
            }

            println!();
            println!("Technician Performance");
            println!("{}", "-".repeat(64));
            for tech in &bundle.performance {
                println!(
                    "{:<18} {:<4} jobs  rating {:<4} ${}",
                    tech.name, tech.jobs, tech.rating, tech.revenue
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Leaking faucet", 28), "Leaking faucet");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "Low water pressure throughout house";
        let cut = truncate(long, 28);
        assert_eq!(cut.chars().count(), 28);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multibyte text must not panic on a byte-slice boundary.
        let long = "Überschwemmung im Keller, Wasser überall im Haus";
        let cut = truncate(long, 28);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 28);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Commands::Serve(serve_args) => run_serve(serve_args).await?,
        Commands::Jobs { command } => match command {
            JobCommands::List {
                search,
                status,
                severity,
                output,
            } => handle_jobs_list(search, status, severity, output)?,
            JobCommands::Classify {
                description,
                output,
            } => handle_classify(description, output)?,
        },
        Commands::Techs { command } => match command {
            TechCommands::List {
                search,
                status,
                output,
            } => handle_techs_list(search, status, output)?,
        },
        Commands::Reports { output } => handle_reports(output)?,
    }

    Ok(())
}
