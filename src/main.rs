//! main.rs

use newsletter_signup::configuration::get_configuration;
use newsletter_signup::startup::Application;
use newsletter_signup::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("newsletter-signup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration.");
    // An unrecognized storage backend selector fails the build; the process
    // must not start serving requests with a half-wired store.
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    Ok(())
}
