use promptline::cli::Cli;
use promptline::config::{Config, InitResult};
use promptline::core::{collect_all_segments, ConsoleTitle, PromptGenerator};
use promptline::env::SystemEnvironment;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        match Config::init()? {
            InitResult::Created(path) => println!("Created config at {}", path.display()),
            InitResult::AlreadyExists(path) => {
                println!("Config already exists at {}", path.display())
            }
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load().unwrap_or_else(|_| Config::default()),
    };

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    let env = SystemEnvironment::new(cli.shell.clone());

    if cli.title {
        if let Some(title_config) = &config.console_title {
            print!("{}", ConsoleTitle::new(&env, title_config).render());
        }
        return Ok(());
    }

    // Collect segment data
    let segments = collect_all_segments(&config, &env);

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    // Render the prompt line, preceded by the title escape when configured
    let mut line = String::new();
    if let Some(title_config) = &config.console_title {
        line.push_str(&ConsoleTitle::new(&env, title_config).render());
    }
    let generator = PromptGenerator::new(config);
    line.push_str(&generator.generate(segments));

    println!("{}", line);

    Ok(())
}
