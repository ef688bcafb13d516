use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use client::{
    form::{FeedbackForm, FormState},
    service::submit_feedback,
    shell::{App, View},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Feedback endpoint to submit to
    #[arg(long, default_value = "http://localhost:8080/api/submit-feedback")]
    endpoint: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let http = reqwest::Client::new();
    let mut app = App::new();

    println!("User Feedback");
    println!("=============\n");

    loop {
        match app.view() {
            View::Form => {
                let submission = {
                    let form = app.form_mut();

                    prompt_fields(form);
                    form.begin_submit()
                };

                let Some(submission) = submission else {
                    print_field_errors(app.form());
                    continue;
                };

                let spinner = submitting_spinner();
                let result = submit_feedback(&http, &args.endpoint, &submission).await;
                spinner.finish_and_clear();

                if app.form_mut().finish_submit(result) {
                    app.acknowledge();
                } else if let FormState::Error(message) = app.form().state() {
                    println!("\nError: {message}\n");
                }
            }
            View::Acknowledged => {
                println!("\nThank you for your feedback!");
                println!("We appreciate you taking the time to share your thoughts.\n");

                if read_line("Submit another feedback? (y/n): ").eq_ignore_ascii_case("y") {
                    println!();
                    app.reset();
                } else {
                    break;
                }
            }
        }
    }
}

fn prompt_fields(form: &mut FeedbackForm) {
    let name = read_field("Name *", form.name());
    form.set_name(name);

    let email = read_field("Email *", form.email());
    form.set_email(email);

    let phone = read_field("Phone (optional)", form.phone());
    form.set_phone(phone);
}

fn print_field_errors(form: &FeedbackForm) {
    let errors = form.errors();

    for (label, error) in [
        ("Name", &errors.name),
        ("Email", &errors.email),
        ("Phone", &errors.phone),
    ] {
        if let Some(message) = error {
            println!("  {label}: {message}");
        }
    }

    println!();
}

// Entering nothing keeps the current value, so a failed submission can be
// corrected one field at a time.
fn read_field(label: &str, current: &str) -> String {
    let input = if current.is_empty() {
        read_line(&format!("{label}: "))
    } else {
        read_line(&format!("{label} [{current}]: "))
    };

    if input.is_empty() {
        current.to_string()
    } else {
        input
    }
}

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().unwrap();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).unwrap();

    line.trim().to_string()
}

fn submitting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    spinner.set_message("Submitting...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner
}
