use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::{debug, error};

use enclave_keys::adapters::{stdin_lines, ConsoleGate, LineReceiver, SoftwareKeyStore};
use enclave_keys::api::AccessPolicy;
use enclave_keys::{
    decrypt_options, encrypt_options, key_options, Enclave, EnclaveError, KeyConfig, Operation,
    Reply,
};

const HELP: &str = "\
Commands:
  create          create a key pair under the configured key tag
  find            look up the public key
  delete          delete the key pair
  encrypt <text>  encrypt UTF-8 text, prints hex
  decrypt <hex>   decrypt hex ciphertext after approval
  help            show this message
  quit            leave the shell";

const DECRYPT_PROMPT: &str = "decrypt data";

#[derive(Parser, Debug)]
#[command(name = "enclavectl")]
#[command(about = "Hardware-backed key pairs with biometric-gated decryption", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Key tag the shell operates on
    #[arg(long, env = "ENCLAVECTL_KEY_TAG", default_value = "net.example.enclave-keys.my-key")]
    pub key_tag: String,

    /// Seconds to wait for an approval answer before timing out
    #[arg(long, env = "ENCLAVECTL_PROMPT_TIMEOUT", default_value_t = 30)]
    pub prompt_timeout: u64,

    /// Access control attached to new keys
    #[arg(long, default_value = "biometry-current-set")]
    pub access: AccessArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print whether secure key storage is available on this host
    Supported,

    /// Interactive shell reading commands from stdin (default)
    Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AccessArg {
    BiometryCurrentSet,
    BiometryAny,
    UserPresence,
}

impl From<AccessArg> for AccessPolicy {
    fn from(arg: AccessArg) -> Self {
        match arg {
            AccessArg::BiometryCurrentSet => AccessPolicy::BiometryCurrentSet,
            AccessArg::BiometryAny => AccessPolicy::BiometryAny,
            AccessArg::UserPresence => AccessPolicy::UserPresence,
        }
    }
}

type ShellEnclave = Enclave<SoftwareKeyStore, ConsoleGate>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Create,
    Find,
    Delete,
    Encrypt(String),
    Decrypt(String),
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim().to_string();
        match name {
            "create" => Some(ShellCommand::Create),
            "find" => Some(ShellCommand::Find),
            "delete" => Some(ShellCommand::Delete),
            "encrypt" => Some(ShellCommand::Encrypt(argument)),
            "decrypt" => Some(ShellCommand::Decrypt(argument)),
            "help" => Some(ShellCommand::Help),
            "quit" | "exit" => Some(ShellCommand::Quit),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    let lines = stdin_lines();
    let gate = ConsoleGate::new(
        Arc::clone(&lines),
        Duration::from_secs(cli.prompt_timeout),
    );
    let config = KeyConfig {
        access: cli.access.into(),
        ..KeyConfig::software()
    };
    let enclave = Enclave::with_config(Arc::new(SoftwareKeyStore::new()), Arc::new(gate), config);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Supported => println!("{}", enclave.is_supported()),
        Commands::Shell => shell(&enclave, &cli.key_tag, &lines).await?,
    }

    Ok(())
}

async fn shell(enclave: &ShellEnclave, key_tag: &str, lines: &LineReceiver) -> anyhow::Result<()> {
    debug!("Shell started for key tag {}", key_tag);
    let mut stdout = io::stdout();

    loop {
        // Release the lock before running the command: decrypt reads its
        // approval from the same lines.
        let line = lines.lock().await.recv().await;
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let output = match ShellCommand::parse(&line) {
            Some(ShellCommand::Quit) => break,
            Some(ShellCommand::Help) => HELP.to_string(),
            Some(command) => match execute(enclave, key_tag, &command).await {
                Ok(output) => output,
                Err(err) => {
                    error!("{} failed: {}", line.trim(), err);
                    render_error(&err)
                }
            },
            None => "Not implemented".to_string(),
        };
        writeln!(stdout, "{output}")?;
        stdout.flush()?;
    }

    Ok(())
}

async fn execute(
    enclave: &ShellEnclave,
    key_tag: &str,
    command: &ShellCommand,
) -> Result<String, EnclaveError> {
    let reply = match command {
        ShellCommand::Create => {
            enclave
                .call_with(Operation::CreateKeyPair, key_options(key_tag))
                .await?
        }
        ShellCommand::Find => {
            enclave
                .call_with(Operation::FindKeyPair, key_options(key_tag))
                .await?
        }
        ShellCommand::Delete => {
            enclave
                .call_with(Operation::DeleteKeyPair, key_options(key_tag))
                .await?
        }
        ShellCommand::Encrypt(text) => {
            if text.is_empty() {
                return Ok("Empty data".to_string());
            }
            enclave
                .call_with(Operation::Encrypt, encrypt_options(key_tag, text.as_bytes()))
                .await?
        }
        ShellCommand::Decrypt(encoded) => {
            if encoded.is_empty() {
                return Ok("Empty data".to_string());
            }
            let Ok(data) = hex::decode(encoded) else {
                return Ok("Invalid hex data".to_string());
            };
            enclave
                .call_with(
                    Operation::Decrypt,
                    decrypt_options(key_tag, &data, DECRYPT_PROMPT),
                )
                .await?
        }
        ShellCommand::Help | ShellCommand::Quit => return Ok(String::new()),
    };

    Ok(render_reply(command, reply))
}

fn render_reply(command: &ShellCommand, reply: Reply) -> String {
    match (command, reply) {
        (ShellCommand::Create, Reply::PublicKey(public_key)) => {
            format!("Created, public key: {}...", public_key.fingerprint())
        }
        (_, Reply::PublicKey(public_key)) => {
            format!("Found, public key: {}...", public_key.fingerprint())
        }
        (_, Reply::NotFound) => "Key not found".to_string(),
        (_, Reply::Deleted(true)) => "Deleted".to_string(),
        (_, Reply::Deleted(false)) => "No key to delete".to_string(),
        (ShellCommand::Encrypt(_), Reply::Bytes(ciphertext)) => hex::encode(ciphertext),
        (_, Reply::Bytes(plaintext)) => String::from_utf8_lossy(&plaintext).into_owned(),
    }
}

fn render_error(err: &EnclaveError) -> String {
    let flags = err.flags().names();
    if flags.is_empty() {
        format!("Error: {err}")
    } else {
        format!("Error: {err} ({})", flags.join(", "))
    }
}
