use brand_site::site::render::current_year;
use brand_site::utils::{logger, validation::Validate};
use brand_site::{
    BackendConfig, CliConfig, Command, ContactSubmissionFlow, FlowView, FormState, LocalStorage,
    PagePublisher, ReqwestTransport, SiteConfig, SiteError, SubmitEvent, SubmitOutcome,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting brand-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let site = match load_and_validate(&cli) {
        Ok(site) => site,
        Err(e) => exit_with(&e, 1),
    };

    // 後端位址只在啟動時解析一次
    let backend = cli.resolve_backend(&site);
    if let Err(e) = backend.validate() {
        exit_with(&e, 1);
    }
    tracing::debug!("Backend base URL: {}", backend.base_url);

    match cli.command.clone() {
        Command::Render { output_path } => {
            let output_path = output_path.unwrap_or_else(|| site.output_path().to_string());
            let storage = LocalStorage::new(output_path.clone());
            let publisher =
                PagePublisher::new(storage, site.site.clone(), site.output_filename());

            match publisher.publish(&FlowView::default(), current_year()).await {
                Ok(filename) => {
                    tracing::info!("✅ Page rendered to {}/{}", output_path, filename);
                    println!("✅ Page rendered to {}/{}", output_path, filename);
                }
                Err(e) => exit_with(&e, 1),
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = FormState {
                name,
                email,
                subject,
                message,
            };
            send_contact(&backend, form).await;
        }
    }

    Ok(())
}

fn load_and_validate(cli: &CliConfig) -> brand_site::Result<SiteConfig> {
    let site = cli.load_site_config()?;
    site.validate()?;
    Ok(site)
}

async fn send_contact(backend: &BackendConfig, form: FormState) {
    let mut flow = ContactSubmissionFlow::new(ReqwestTransport::new(), backend);
    flow.fill(form);

    match flow.submit(&mut SubmitEvent::new()).await {
        SubmitOutcome::Blocked(missing) => {
            let fields: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            let err = SiteError::ValidationError {
                message: format!("Please fill in: {}", fields.join(", ")),
            };
            exit_with(&err, 2);
        }
        SubmitOutcome::Accepted(result) => {
            tracing::info!("✅ {}", result.message);
            println!("✅ {}", result.message);
        }
        SubmitOutcome::Failed(e) => exit_with(&SiteError::from(e), 1),
    }
}

fn exit_with(e: &SiteError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(code);
}
