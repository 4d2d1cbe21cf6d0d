//! Employee Performance Prediction CLI
//!
//! A front-end over a pre-trained performance model: fill in employee
//! attributes, run one prediction, read the result.

use clap::{Args, Parser, Subcommand};
use emperf::{Config, Result};

#[derive(Parser)]
#[command(name = "emperf")]
#[command(about = "Employee performance prediction from a pre-trained model", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prediction form (set fields, then `predict`)
    Form,
    /// One-shot prediction; every field is a flag, defaults are each
    /// control's minimum / first option
    Predict {
        #[command(flatten)]
        record: RecordArgs,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Model management commands
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Subcommand)]
enum ModelCommands {
    /// Show model artifact information
    Info,
}

/// All form fields as flags. The declared ranges and value sets are the
/// input controls: out-of-bounds values are rejected before the record is
/// ever assembled.
#[derive(Args, Debug)]
struct RecordArgs {
    /// Age
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u32).range(18..=65))]
    age: u32,

    /// Gender
    #[arg(long, default_value = "Male", value_parser = ["Male", "Female"])]
    gender: String,

    /// Education background
    #[arg(long, default_value = "Science", value_parser = ["Science", "Commerce", "Arts", "Others"])]
    education_background: String,

    /// Marital status
    #[arg(long, default_value = "Single", value_parser = ["Single", "Married", "Divorced", "Widowed"])]
    marital_status: String,

    /// Department
    #[arg(long, default_value = "HR", value_parser = ["HR", "Finance", "R&D", "Sales", "IT"])]
    department: String,

    /// Job role
    #[arg(long, default_value = "Manager", value_parser = ["Manager", "Executive", "Analyst", "Technician", "Clerk"])]
    job_role: String,

    /// Business travel frequency
    #[arg(long, default_value = "Rarely", value_parser = ["Rarely", "Frequently", "Never"])]
    business_travel: String,

    /// Distance from home (km)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=100))]
    distance_from_home: u32,

    /// Education level (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    education_level: u32,

    /// Environment satisfaction (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    environment_satisfaction: u32,

    /// Hourly rate
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(10..=100))]
    hourly_rate: u32,

    /// Job involvement (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    job_involvement: u32,

    /// Job level (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    job_level: u32,

    /// Job satisfaction (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    job_satisfaction: u32,

    /// Number of companies worked
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    companies_worked: u32,

    /// Overtime
    #[arg(long, default_value = "Yes", value_parser = ["Yes", "No"])]
    overtime: String,

    /// Last salary hike percent
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=100))]
    salary_hike_percent: u32,

    /// Relationship satisfaction (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    relationship_satisfaction: u32,

    /// Total work experience (years)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=50))]
    total_experience: u32,

    /// Training times last year
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    training_times: u32,

    /// Work-life balance (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    work_life_balance: u32,

    /// Experience years at this company
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=50))]
    years_at_company: u32,

    /// Experience years in current role
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=50))]
    years_in_role: u32,

    /// Years since last promotion
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=50))]
    years_since_promotion: u32,

    /// Years with current manager
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=50))]
    years_with_manager: u32,

    /// Attrition
    #[arg(long, default_value = "Yes", value_parser = ["Yes", "No"])]
    attrition: String,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Form => commands::form(&config),
        Commands::Predict { record, format } => commands::predict(&config, record, format),
        Commands::Model { action } => match action {
            ModelCommands::Info => commands::model_info(&config),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use burn::backend::NdArray;
    use emperf::form::{render_record, run_session};
    use emperf::model::ModelManifest;
    use emperf::predict::{format_prediction, load_predictor, Scorer};
    use emperf::record::{
        BusinessTravel, Department, EducationBackground, EmployeeRecord, Gender, JobRole,
        MaritalStatus, YesNo,
    };
    use emperf::PerfError;

    type Backend = NdArray<f32>;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("model")?;
        println!("Created model/ directory");

        println!("\nNext steps:");
        println!("  1. Place the trained artifact at {}.mpk", config.data.model_path);
        println!("  2. Run 'emperf model info' to verify it");
        println!("  3. Run 'emperf form' or 'emperf predict --age 30 ...' to predict");

        Ok(())
    }

    /// Interactive session; the model is loaded once, then held read-only
    pub fn form(config: &Config) -> Result<()> {
        let device = Default::default();
        let predictor = load_predictor::<Backend>(device, &config.data.model_path)?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        run_session(&predictor, stdin.lock(), &mut stdout)
    }

    /// One-shot prediction from flags
    pub fn predict(config: &Config, args: RecordArgs, format: OutputFormat) -> Result<()> {
        let record = build_record(&args)?;

        let device = Default::default();
        let predictor = load_predictor::<Backend>(device, &config.data.model_path)?;

        let preds = predictor.predict(std::slice::from_ref(&record))?;
        let pred = preds
            .first()
            .ok_or_else(|| PerfError::Prediction("model returned no predictions".to_string()))?;

        match format {
            OutputFormat::Table => {
                print!("{}", render_record(&record));
                print!("{}", format_prediction(pred));
            }
            OutputFormat::Json => {
                let record_map: serde_json::Map<String, serde_json::Value> = record
                    .rows()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
                    .collect();
                let json = serde_json::json!({
                    "record": record_map,
                    "rating": pred.rating,
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            OutputFormat::Csv => {
                let rows = record.rows();
                let header: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();
                let values: Vec<&str> = rows.iter().map(|(_, value)| value.as_str()).collect();
                println!("{},PredictedRating", header.join(","));
                println!("{},{}", values.join(","), pred);
            }
        }

        Ok(())
    }

    pub fn model_info(config: &Config) -> Result<()> {
        let weights = format!("{}.mpk", config.data.model_path);
        if !std::path::Path::new(&weights).exists() {
            return Err(PerfError::ModelNotFound { path: weights });
        }

        println!("Model Information");
        println!("───────────────────────────────");
        if let Ok(cwd) = std::env::current_dir() {
            println!("  Working dir:  {}", cwd.display());
        }
        println!("  Weights:      {}", weights);

        let manifest_path = format!("{}.json", config.data.model_path);
        if std::path::Path::new(&manifest_path).exists() {
            let manifest = ModelManifest::load(&manifest_path)?;
            println!("  Manifest:     {}", manifest_path);
            println!("  Format:       {}", manifest.format);
            println!("  Input dim:    {}", manifest.input_dim);
            println!("  Hidden dims:  {:?}", manifest.hidden_dims);
            println!("  Outputs:      {}", manifest.outputs.join(", "));
            println!(
                "  Predict:      {}",
                if manifest.has_rating_output() { "available" } else { "NOT declared" }
            );
        } else {
            println!("  Manifest:     missing ({})", manifest_path);
        }

        Ok(())
    }

    /// Assemble the record from validated flag values.
    /// clap has already enforced bounds and value sets.
    fn build_record(args: &RecordArgs) -> Result<EmployeeRecord> {
        Ok(EmployeeRecord {
            age: args.age,
            gender: parse_choice("Gender", &args.gender, Gender::parse)?,
            education_background: parse_choice(
                "EducationBackground",
                &args.education_background,
                EducationBackground::parse,
            )?,
            marital_status: parse_choice("MaritalStatus", &args.marital_status, MaritalStatus::parse)?,
            department: parse_choice("EmpDepartment", &args.department, Department::parse)?,
            job_role: parse_choice("EmpJobRole", &args.job_role, JobRole::parse)?,
            business_travel: parse_choice(
                "BusinessTravelFrequency",
                &args.business_travel,
                BusinessTravel::parse,
            )?,
            distance_from_home: args.distance_from_home,
            education_level: args.education_level,
            environment_satisfaction: args.environment_satisfaction,
            hourly_rate: args.hourly_rate,
            job_involvement: args.job_involvement,
            job_level: args.job_level,
            job_satisfaction: args.job_satisfaction,
            companies_worked: args.companies_worked,
            overtime: parse_choice("OverTime", &args.overtime, YesNo::parse)?,
            salary_hike_percent: args.salary_hike_percent,
            relationship_satisfaction: args.relationship_satisfaction,
            total_experience_years: args.total_experience,
            training_times_last_year: args.training_times,
            work_life_balance: args.work_life_balance,
            years_at_company: args.years_at_company,
            years_in_current_role: args.years_in_role,
            years_since_promotion: args.years_since_promotion,
            years_with_manager: args.years_with_manager,
            attrition: parse_choice("Attrition", &args.attrition, YesNo::parse)?,
        })
    }

    fn parse_choice<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
        parse(value).ok_or_else(|| PerfError::InvalidValue {
            field: field.to_string(),
            message: format!("'{}' is not in the accepted value set", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("emperf").chain(args.iter().copied()))
    }

    #[test]
    fn age_flag_rejects_out_of_range_values() {
        assert!(parse(&["predict", "--age", "17"]).is_err());
        assert!(parse(&["predict", "--age", "66"]).is_err());
    }

    #[test]
    fn age_flag_accepts_the_declared_bounds() {
        assert!(parse(&["predict", "--age", "18"]).is_ok());
        assert!(parse(&["predict", "--age", "65"]).is_ok());
    }

    #[test]
    fn choice_flag_rejects_values_outside_the_set() {
        assert!(parse(&["predict", "--gender", "Other"]).is_err());
        assert!(parse(&["predict", "--gender", "Female"]).is_ok());
    }

    #[test]
    fn scale_flag_rejects_values_outside_one_to_five() {
        assert!(parse(&["predict", "--job-satisfaction", "0"]).is_err());
        assert!(parse(&["predict", "--job-satisfaction", "6"]).is_err());
        assert!(parse(&["predict", "--job-satisfaction", "5"]).is_ok());
    }
}
