#[derive(clap::Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(clap::Subcommand)]
enum CliCommands {
    /// Run the certificate handler with a synthesized event
    Generate {
        /// Custom resource request type
        #[arg(long, default_value = "Create")]
        request_type: String,

        /// Write the certificate PEM here instead of printing JSON
        #[arg(long, value_name = "CRT FILE", requires = "out_key")]
        out_crt: Option<std::path::PathBuf>,

        /// Write the private key PEM here instead of printing JSON
        #[arg(long, value_name = "KEY FILE", requires = "out_crt")]
        out_key: Option<std::path::PathBuf>,
    },
    /// Run the placeholder handler
    Greet {
        #[arg(default_value = "World")]
        name: String,
    },
}

/// main() for generic environment
#[tokio::main]
async fn main() {
    use clap::Parser;
    use self_signed_cert_lambda::*;

    init_logging();
    let cli = Cli::parse();

    match cli.command {
        CliCommands::Generate {
            request_type,
            out_crt: Some(crt_file),
            out_key: Some(key_file),
        } => {
            if !matches!(request_type.as_str(), "Create" | "Update") {
                panic!("Nothing to write for request type {}", request_type);
            }
            let bundle = generate_certificates().unwrap();
            write_pem(crt_file, bundle.certificate_pem()).unwrap();
            write_pem(key_file, bundle.private_key_pem()).unwrap();
        }
        CliCommands::Generate { request_type, .. } => {
            let event = serde_json::json!({ "RequestType": request_type });
            let response = handle(&event);
            println!("{}", serde_json::to_string_pretty(&response).unwrap());
        }
        CliCommands::Greet { name } => {
            let event = serde_json::json!({ "name": name });
            println!("{}", greeting_handler(&event).await);
        }
    }
}
