use anyhow::{Result, bail};
use portfolio::client::HttpTransport;
use portfolio_contact::{ContactForm, Field, SubmitOutcome};

/// Submits one contact message to a running server, the way the page script does.
pub async fn send(url: String, name: String, email: String, message: String) -> Result<()> {
    let transport = HttpTransport::new(&url);
    tracing::info!(endpoint = transport.endpoint(), "Submitting contact message");

    let form = ContactForm::new(transport);
    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Message, message);

    match form.submit().await {
        SubmitOutcome::Sent => {
            println!("Thank you! Your message has been sent successfully.");
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.messages() {
                eprintln!("{field}: {message}");
            }
            bail!("contact message is invalid")
        }
        SubmitOutcome::Failed(err) => {
            for (field, message) in form.errors().messages() {
                eprintln!("{field}: {message}");
            }
            bail!("contact message was not sent: {err}")
        }
        SubmitOutcome::Busy => bail!("a submission is already in flight"),
    }
}
