use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use playground_tester::driver::{BrowserKind, WebDriver, WebDriverConfig};
use playground_tester::{FormData, PlaygroundConfig, PlaygroundHelper};

#[derive(Parser)]
#[command(name = "playground-tester")]
#[command(version = "0.1.0")]
#[command(about = "Resilient UI checks against the LambdaTest Selenium Playground", long_about = None)]
struct Cli {
    /// Path to a YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Browser engine (chromium, firefox, webkit)
    #[arg(short, long, default_value = "chromium")]
    browser: String,

    /// Run the browser headless
    #[arg(long, default_value = "false")]
    headless: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every playground scenario once
    All,

    /// Simple Form Demo: echo a message through the form
    SimpleForm {
        /// Message to send through the form
        #[arg(default_value = "Hello from playground-tester")]
        message: String,
    },

    /// Drag & Drop Sliders: set a slider and read its value back
    Slider {
        /// Slider position on the page, 0-based
        #[arg(long, default_value = "0")]
        index: usize,

        /// Target value
        #[arg(long, default_value = "95")]
        target: i64,
    },

    /// Input Form Submit: fill with generated data and check the result
    Form,

    /// Input Form Submit: submit empty and expect no success message
    FormEmpty,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => PlaygroundConfig::from_yaml_file(path)?,
        None => PlaygroundConfig::default(),
    };

    let defaults = WebDriverConfig::default();
    let web_config = WebDriverConfig {
        browser: BrowserKind::parse(&cli.browser),
        headless: cli.headless || defaults.headless,
        ..defaults
    };

    let driver = Arc::new(WebDriver::new(web_config).await?);
    let helper = PlaygroundHelper::new(driver, config);

    match cli.command {
        Commands::All => {
            run_simple_form(&helper, "Hello from playground-tester").await?;
            run_slider(&helper, 0, 95).await?;
            run_form(&helper).await?;
            run_form_empty(&helper).await?;
        }
        Commands::SimpleForm { message } => run_simple_form(&helper, &message).await?,
        Commands::Slider { index, target } => run_slider(&helper, index, target).await?,
        Commands::Form => run_form(&helper).await?,
        Commands::FormEmpty => run_form_empty(&helper).await?,
    }

    Ok(())
}

async fn run_simple_form(helper: &PlaygroundHelper, message: &str) -> anyhow::Result<()> {
    println!("{} Simple Form Demo", "▶".blue());
    helper.goto_simple_form_demo().await?;

    match helper.echo_message(message).await? {
        Some(text) if text.contains(message) => {
            println!("  {} echoed message matches", "✓".green());
        }
        Some(text) => {
            println!("  {} echoed '{}' instead of '{}'", "✗".red(), text, message);
        }
        None => println!("  {} no echoed message found", "✗".red()),
    }
    Ok(())
}

async fn run_slider(helper: &PlaygroundHelper, index: usize, target: i64) -> anyhow::Result<()> {
    println!("{} Drag & Drop Sliders", "▶".blue());
    helper.goto_drag_drop_sliders().await?;
    helper.set_slider_value(index, target).await?;

    match helper.read_slider_value(index).await {
        Some(value) => println!("  {} slider {} reads '{}'", "✓".green(), index, value),
        None => println!("  {} slider value could not be resolved", "✗".red()),
    }
    Ok(())
}

async fn run_form(helper: &PlaygroundHelper) -> anyhow::Result<()> {
    use fake::faker::address::en::{CityName, StateName, StreetName, ZipCode};
    use fake::faker::company::en::CompanyName;
    use fake::faker::internet::en::{FreeEmail, Password};
    use fake::faker::name::en::Name;
    use fake::Fake;

    let data = FormData {
        name: Name().fake(),
        email: FreeEmail().fake(),
        password: Password(8..16).fake(),
        company: CompanyName().fake(),
        website: "https://example.com".to_string(),
        country: "United States".to_string(),
        city: CityName().fake(),
        address1: StreetName().fake(),
        address2: "Suite 5".to_string(),
        state: StateName().fake(),
        zip: ZipCode().fake(),
    };

    println!("{} Input Form Submit", "▶".blue());
    helper.goto_input_form_submit().await?;
    helper.fill_and_submit(&data).await?;

    match helper.read_success_message().await {
        Some(message) => println!("  {} success message: {}", "✓".green(), message.trim()),
        None => println!("  {} no success message found", "✗".red()),
    }
    Ok(())
}

async fn run_form_empty(helper: &PlaygroundHelper) -> anyhow::Result<()> {
    println!("{} Input Form Submit (empty)", "▶".blue());
    helper.goto_input_form_submit().await?;
    helper.submit_empty().await?;

    match helper.read_success_message().await {
        None => println!("  {} no success message, as expected", "✓".green()),
        Some(message) => println!(
            "  {} unexpected message after empty submit: {}",
            "✗".red(),
            message.trim()
        ),
    }
    Ok(())
}
