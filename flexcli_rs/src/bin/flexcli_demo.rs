//! Demo CLI wiring the sample commands into a `flexcli::Cli`.
//!
//! Logging goes to stderr; set `RUST_LOG=flexcli=debug` to trace dispatch.

use std::time::Duration;

use anyhow::{Context, bail};
use flexcli::{Cli, CliOptions, ColorMode, CommandSpec, Handler, HandlerResult};

fn greet(args: &[String]) -> HandlerResult {
    if args.len() > 1 {
        bail!("greet expects at most 1 argument, got {}", args.len());
    }
    let name = args.first().map(String::as_str).unwrap_or("world");
    println!("Hello, {name}!");
    Ok(())
}

fn echo(args: &[String]) -> HandlerResult {
    let [message] = args else {
        bail!("echo expects 1 argument, got {}", args.len());
    };
    println!("You said: {message}");
    Ok(())
}

fn add(args: &[String]) -> HandlerResult {
    let [a, b] = args else {
        bail!("add expects 2 arguments, got {}", args.len());
    };
    let x: f64 = a.parse().with_context(|| format!("'{a}' is not a number"))?;
    let y: f64 = b.parse().with_context(|| format!("'{b}' is not a number"))?;
    println!("The result of {a} + {b} is {}", x + y);
    Ok(())
}

/// Handles its own domain errors: bad input is reported, not raised.
fn divide(args: &[String]) -> HandlerResult {
    let [a, b] = args else {
        bail!("divide expects 2 arguments, got {}", args.len());
    };
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(_), Ok(divisor)) if divisor == 0.0 => {
            println!("Error: Division by zero is not allowed.");
        }
        (Ok(dividend), Ok(divisor)) => {
            println!("The result of {a} / {b} is {}", dividend / divisor);
        }
        _ => println!("Error: Please provide valid numbers."),
    }
    Ok(())
}

fn parse_seconds(args: &[String], default: u64) -> anyhow::Result<u64> {
    match args.first() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("'{raw}' is not a whole number")),
        None => Ok(default),
    }
}

async fn countdown(args: Vec<String>) -> HandlerResult {
    let start = parse_seconds(&args, 5)?;
    for i in (1..=start).rev() {
        println!("{i}");
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!("Countdown complete!");
    Ok(())
}

async fn timer(args: Vec<String>) -> HandlerResult {
    let [_] = args.as_slice() else {
        bail!("timer expects 1 argument, got {}", args.len());
    };
    let seconds = parse_seconds(&args, 0)?;
    for i in (1..=seconds).rev() {
        println!("{i} seconds remaining...");
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!("Time's up!");
    Ok(())
}

fn process(action: &'static str) -> Handler {
    Handler::sync(move |args| {
        if !args.is_empty() {
            bail!("this command takes no arguments, got {}", args.len());
        }
        println!("Process {action}.");
        Ok(())
    })
}

fn fail(_: &[String]) -> HandlerResult {
    bail!("this command always fails")
}

fn build_cli(color: ColorMode) -> flexcli::Result<Cli> {
    let mut cli = Cli::with_options(CliOptions {
        program_name: "flexcli-demo".to_string(),
        color,
        suggestions: true,
    });

    cli.register(
        "greet",
        Handler::sync(greet),
        &["hello"],
        Some("Greets the user with a customizable message.\n\nUsage: greet [name]"),
    )?;
    cli.register(
        "countdown",
        Handler::asynchronous(countdown),
        &[],
        Some("Counts down from a specified number asynchronously.\n\nUsage: countdown [start]"),
    )?;
    cli.register_spec(
        CommandSpec::new("add", Handler::sync(add))
            .aliases(["sum", "plus"])
            .doc("Adds two numbers and prints the result.\n\nUsage: add <a> <b>"),
    )?;
    cli.register(
        "divide",
        Handler::sync(divide),
        &[],
        Some("Divides two numbers and prints the result.\n\nUsage: divide <a> <b>"),
    )?;
    cli.register(
        "echo",
        Handler::sync(echo),
        &[],
        Some("Echoes back the provided message."),
    )?;
    cli.register(
        "timer",
        Handler::asynchronous(timer),
        &[],
        Some("Waits for the specified number of seconds asynchronously."),
    )?;
    cli.register("start", process("started"), &[], Some("Starts the process."))?;
    cli.register("stop", process("stopped"), &[], Some("Stops the process."))?;
    cli.register(
        "restart",
        process("restarted"),
        &[],
        Some("Restarts the process."),
    )?;
    cli.register("fail", Handler::sync(fail), &[], None)?;

    Ok(cli)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() {
    init_tracing();

    let color = std::env::var("FLEXCLI_COLOR")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();

    match build_cli(color) {
        Ok(cli) => cli.run_env(),
        Err(err) => {
            eprintln!("[flexcli-demo] setup failed: {err}");
            std::process::exit(1);
        }
    }
}
