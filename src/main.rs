//! Pictora CLI binary entry point.

use std::io::{IsTerminal, Read};
use std::time::Duration;

use clap::Parser;
use pictora::cli::{Cli, Commands, ConfigArgs, GenerateArgs};
use pictora::generation::ImageRequestExecutor;
use pictora::i18n::{set_locale, Locale};
use pictora::types::ImageGenerationRequest;
use pictora::util::timeout::with_timeout;
use pictora::util::url::normalize_chat_completions_url;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(tag) = cli.locale.as_deref() {
        set_locale(Locale::from_tag(tag));
    }

    let result = match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Config(args) => handle_config(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = match args.content {
        Some(c) => c,
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Usage: pictora generate \"text to illustrate\" (or pipe it on stdin)");
                std::process::exit(1);
            }
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    let request = ImageGenerationRequest::new(content, args.endpoint.resolve()?);
    let executor = ImageRequestExecutor::new();
    let deadline = args.timeout_secs.map(Duration::from_secs);
    let image = with_timeout(deadline, executor.generate_image(&request)).await?;

    match args.output {
        Some(path) => {
            let bytes = image.decode()?;
            std::fs::write(&path, &bytes)?;
            eprintln!(
                "Wrote {} bytes ({}) to {}",
                bytes.len(),
                image.mime_type().unwrap_or("image"),
                path.display()
            );
        }
        None => println!("{}", image.base64_data),
    }

    Ok(())
}

fn handle_config(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.endpoint.resolve()?;
    let endpoint = normalize_chat_completions_url(config.base_url.as_deref());

    println!("endpoint: {}", endpoint.as_deref().unwrap_or("(not set)"));
    println!(
        "api key:  {}",
        if config.api_key().is_some() { "set" } else { "(not set)" }
    );
    println!("model:    {}", config.model_name_or_default());
    Ok(())
}
