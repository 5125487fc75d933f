use vet_clinic::config::get_configuration;
use vet_clinic::startup::Application;
use vet_clinic::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise logger
    let subscriber = get_subscriber("vet_clinic".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Read configuration
    let config = get_configuration().expect("Failed to read configuration.");

    // Run the app. actix-web stops gracefully on SIGINT / SIGTERM.
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
