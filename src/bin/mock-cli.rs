use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "mock-cli")]
#[command(about = "Management CLI for the mock service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Status,
    /// List all mock rules
    List,
    /// Show a single rule
    Get { id: String },
    /// Create a rule
    Create {
        /// Request path to mock (e.g. /api/sms/send)
        path: String,
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[arg(short, long, default_value_t = 200)]
        status: u16,
        /// Response body as JSON
        #[arg(short, long, default_value = "{}")]
        body: String,
        /// Response delay in seconds
        #[arg(short, long, default_value_t = 0.0)]
        delay: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update fields of an existing rule; omitted flags keep their values
    Update {
        id: String,
        #[arg(long)]
        path: Option<String>,
        #[arg(short, long)]
        method: Option<String>,
        #[arg(short, long)]
        status: Option<u16>,
        /// Response body as JSON
        #[arg(short, long)]
        body: Option<String>,
        /// Response delay in seconds
        #[arg(short, long)]
        delay: Option<f64>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a rule
    Delete { id: String },
    /// Restart the service so rule changes take effect
    Restart,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::List => {
            let res = client
                .get(format!("{}/admin/rules", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/admin/rules/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create {
            path,
            method,
            status,
            body,
            delay,
            description,
        } => {
            let response_body: Value = serde_json::from_str(&body)?;
            let res = client
                .post(format!("{}/admin/rules", cli.url))
                .json(&json!({
                    "path": path,
                    "method": method,
                    "status_code": status,
                    "response_body": response_body,
                    "delay": delay,
                    "description": description,
                }))
                .send()
                .await?;
            print_response(res).await?;
            println!("Note: restart the service for the new rule to go live.");
        }
        Commands::Update {
            id,
            path,
            method,
            status,
            body,
            delay,
            description,
        } => {
            let patch = build_patch(path, method, status, body.as_deref(), delay, description)?;
            let res = client
                .put(format!("{}/admin/rules/{}", cli.url, id))
                .json(&patch)
                .send()
                .await?;
            print_response(res).await?;
            println!("Note: restart the service for the change to go live.");
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/admin/rules/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Restart => {
            // The service exits before answering; a dropped connection
            // means the restart went through.
            match client
                .post(format!("{}/admin/restart", cli.url))
                .send()
                .await
            {
                Ok(res) => print_response(res).await?,
                Err(_) => println!("Restart triggered (connection dropped as expected)."),
            }
        }
    }

    Ok(())
}

/// Build a partial-update payload holding only the flags the operator
/// provided, so the server-side merge leaves everything else untouched.
fn build_patch(
    path: Option<String>,
    method: Option<String>,
    status: Option<u16>,
    body: Option<&str>,
    delay: Option<f64>,
    description: Option<String>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut patch = serde_json::Map::new();
    if let Some(path) = path {
        patch.insert("path".to_string(), Value::String(path));
    }
    if let Some(method) = method {
        patch.insert("method".to_string(), Value::String(method));
    }
    if let Some(status) = status {
        patch.insert("status_code".to_string(), json!(status));
    }
    if let Some(body) = body {
        patch.insert("response_body".to_string(), serde_json::from_str(body)?);
    }
    if let Some(delay) = delay {
        patch.insert("delay".to_string(), json!(delay));
    }
    if let Some(description) = description {
        patch.insert("description".to_string(), Value::String(description));
    }
    Ok(Value::Object(patch))
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_contains_only_provided_flags() {
        let patch = build_patch(None, None, Some(503), None, None, None).unwrap();
        assert_eq!(patch, json!({"status_code": 503}));

        let patch = build_patch(
            Some("/api/x".to_string()),
            Some("post".to_string()),
            None,
            Some(r#"{"ok": false}"#),
            Some(2.5),
            None,
        )
        .unwrap();
        assert_eq!(
            patch,
            json!({
                "path": "/api/x",
                "method": "post",
                "response_body": {"ok": false},
                "delay": 2.5
            })
        );
    }

    #[test]
    fn empty_patch_is_an_empty_object() {
        let patch = build_patch(None, None, None, None, None, None).unwrap();
        assert_eq!(patch, json!({}));
    }

    #[test]
    fn malformed_body_json_is_an_error() {
        assert!(build_patch(None, None, None, Some("{not json"), None, None).is_err());
    }
}
