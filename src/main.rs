use clap::{Parser, Subcommand};

mod chart;
mod cmd;
mod curve;
mod error;
mod tax;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "bgtax",
    version,
    about = "Tax and social security burden charts for freelancers in Bulgaria"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the burden chart for one year and category
    Chart(cmd::chart::ChartCommand),
    /// Print the burden curve as a table, CSV or JSON
    Table(cmd::table::TableCommand),
    /// Render the charts of every known year and category
    Build(cmd::build::BuildCommand),
    /// Remove the output directory
    Clean(cmd::build::CleanCommand),
    /// List the social security bounds of each known year
    Years(cmd::years::YearsCommand),
    /// Describe the columns of the table export
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chart(chart) => chart.exec(),
        Command::Table(table) => table.exec(),
        Command::Build(build) => build.exec(),
        Command::Clean(clean) => clean.exec(),
        Command::Years(years) => years.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
