// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive console front end for the activity API.
//!
//! Set ACTIVITY_API_URL to point at the service (default http://localhost:5000).

use activity_tracker::client::{ActivityApi, ActivityBoard, ActivityForm};
use activity_tracker::models::{ActivityPatch, ActivityType};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_API_URL: &str = "http://localhost:5000";

const HELP: &str = "\
Commands:
  list                          refresh and show all activities
  add                           fill in the form and submit it
  update <id> <field> <value>   field: activity | price | type | booking | accessibility
  delete <id>                   delete an activity
  help                          show this help
  quit                          exit";

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("ACTIVITY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let api = ActivityApi::new(base_url);

    let mut board = ActivityBoard::mount(&api).await;
    let mut form = ActivityForm::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", board.render());
    println!("{}", HELP);

    while let Some(line) = prompt(&mut input, "> ").await? {
        let mut words = line.split_whitespace();
        match words.next() {
            None => continue,
            Some("list") => {
                board = ActivityBoard::mount(&api).await;
                println!("{}", board.render());
            }
            Some("add") => {
                if fill_form(&mut input, &mut form).await? && board.submit(&api, &mut form).await
                {
                    println!("{}", board.render());
                }
            }
            Some("update") => {
                let (Some(id), Some(field)) = (words.next(), words.next()) else {
                    println!("usage: update <id> <field> <value>");
                    continue;
                };
                let value = words.collect::<Vec<_>>().join(" ");
                match parse_patch(field, &value) {
                    Ok(patch) => {
                        if board.update(&api, id, &patch).await {
                            println!("{}", board.render());
                        }
                    }
                    Err(msg) => println!("{}", msg),
                }
            }
            Some("delete") => match words.next() {
                Some(id) => {
                    if board.remove(&api, id).await {
                        println!("{}", board.render());
                    }
                }
                None => println!("usage: delete <id>"),
            },
            Some("help") => println!("{}", HELP),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command {:?}; try 'help'", other),
        }
    }

    Ok(())
}

/// Print `label` and read one line. `None` at end of input.
async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|l| l.trim().to_string()))
}

/// Walk through the form fields. Blank answers keep the current value.
/// Returns `false` if input ended before the form was complete.
async fn fill_form(input: &mut Input, form: &mut ActivityForm) -> std::io::Result<bool> {
    let Some(name) = prompt(input, &format!("Activity [{}]: ", form.activity)).await? else {
        return Ok(false);
    };
    if !name.is_empty() {
        form.activity = name;
    }

    let Some(price) = prompt(input, &format!("Price (RM) [{}]: ", form.price)).await? else {
        return Ok(false);
    };
    if !price.is_empty() {
        form.price = price;
    }

    let options = ActivityType::ALL
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");
    let Some(kind) = prompt(input, &format!("Type ({}) [{}]: ", options, form.kind)).await? else {
        return Ok(false);
    };
    if !kind.is_empty() {
        match kind.parse::<ActivityType>() {
            Ok(kind) => form.kind = kind,
            Err(e) => println!("{}; keeping {}", e, form.kind),
        }
    }

    let current = if form.booking_required { "y" } else { "n" };
    let Some(booking) = prompt(input, &format!("Booking required (y/n) [{}]: ", current)).await?
    else {
        return Ok(false);
    };
    if !booking.is_empty() {
        form.booking_required = matches!(booking.to_ascii_lowercase().as_str(), "y" | "yes");
    }

    let Some(level) = prompt(
        input,
        &format!("Accessibility 0.0-1.0 [{:.1}]: ", form.accessibility()),
    )
    .await?
    else {
        return Ok(false);
    };
    if !level.is_empty() {
        match level.parse::<f64>() {
            Ok(v) => form.set_accessibility(v),
            Err(_) => println!("not a number; keeping {:.1}", form.accessibility()),
        }
    }

    Ok(true)
}

fn parse_patch(field: &str, value: &str) -> Result<ActivityPatch, String> {
    let mut patch = ActivityPatch::default();
    match field {
        "activity" => patch.activity = Some(value.to_string()),
        "price" => {
            patch.price = Some(
                value
                    .parse::<f64>()
                    .map_err(|_| format!("price must be a number, got {:?}", value))?,
            )
        }
        "type" => patch.kind = Some(value.parse::<ActivityType>().map_err(|e| format!("{}", e))?),
        "booking" => {
            patch.booking_required = Some(matches!(
                value.to_ascii_lowercase().as_str(),
                "y" | "yes" | "true"
            ))
        }
        "accessibility" => {
            let mut slider = ActivityForm::new();
            slider.set_accessibility(
                value
                    .parse::<f64>()
                    .map_err(|_| format!("accessibility must be a number, got {:?}", value))?,
            );
            patch.accessibility = Some(slider.accessibility());
        }
        other => return Err(format!("unknown field {:?}", other)),
    }
    Ok(patch)
}

/// Human-readable logs on stderr so they don't mix with the board.
fn init_logging() -> Result<(), tracing_subscriber::filter::ParseError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_tracker=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
