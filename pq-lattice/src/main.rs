use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use pq_lattice::{
    Address, Dilithium2, KemScheme, Kyber1024, LatticeError, SignatureScheme,
    utils::{hex_to_vec, slice_to_hex_string},
};

/// Lattice-based key encapsulation and signatures.
#[derive(Parser, Debug)]
#[command(name = "pq-lattice", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Kyber1024 key encapsulation.
    #[command(subcommand)]
    Kem(KemCommand),
    /// Dilithium2 signatures.
    #[command(subcommand)]
    Dsa(DsaCommand),
    /// Print the address of a Dilithium2 public key and a Kyber1024 public key.
    Address {
        /// Dilithium2 public key file.
        #[arg(long)]
        signing_key: PathBuf,
        /// Kyber1024 public key file.
        #[arg(long)]
        kem_key: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum KemCommand {
    /// Generate a key pair and write it to `<out>.pk` and `<out>.sk`.
    Keygen {
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a fresh ciphertext to `ciphertext` and print the shared secret in hex.
    Encapsulate {
        #[arg(long)]
        public_key: PathBuf,
        #[arg(long)]
        ciphertext: PathBuf,
    },
    /// Print the shared secret carried by `ciphertext` in hex.
    Decapsulate {
        #[arg(long)]
        secret_key: PathBuf,
        #[arg(long)]
        ciphertext: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum DsaCommand {
    /// Generate a key pair and write it to `<out>.pk` and `<out>.sk`.
    Keygen {
        #[arg(long)]
        out: PathBuf,
    },
    /// Sign the contents of `message` and print the signature in hex.
    Sign {
        #[arg(long)]
        secret_key: PathBuf,
        #[arg(long)]
        message: PathBuf,
    },
    /// Check a hex signature over the contents of `message`.
    Verify {
        #[arg(long)]
        public_key: PathBuf,
        #[arg(long)]
        message: PathBuf,
        #[arg(long)]
        signature: String,
    },
}

// ERRORS
// ================================================================================================

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid signature hex: {0}")]
    Hex(#[from] pq_lattice::utils::HexParseError),
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    #[error("signature is not valid")]
    InvalidSignature,
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}

fn write(path: PathBuf, bytes: &[u8]) -> Result<(), CliError> {
    fs::write(&path, bytes).map_err(|source| CliError::Io { path, source })
}

fn write_key_pair(out: &Path, public_key: &[u8], secret_key: &[u8]) -> Result<(), CliError> {
    write(out.with_extension("pk"), public_key)?;
    write(out.with_extension("sk"), secret_key)
}

// COMMANDS
// ================================================================================================

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Kem(KemCommand::Keygen { out }) => {
            let keys = Kyber1024::keygen()?;
            write_key_pair(&out, &keys.public_key, &keys.secret_key)
        },
        Command::Kem(KemCommand::Encapsulate { public_key, ciphertext }) => {
            let (encoded, shared_secret) = Kyber1024::encapsulate(&read(&public_key)?)?;
            write(ciphertext, &encoded)?;
            println!("{}", slice_to_hex_string(shared_secret.as_bytes()));
            Ok(())
        },
        Command::Kem(KemCommand::Decapsulate { secret_key, ciphertext }) => {
            let shared_secret = Kyber1024::decapsulate(&read(&ciphertext)?, &read(&secret_key)?)?;
            println!("{}", slice_to_hex_string(shared_secret.as_bytes()));
            Ok(())
        },
        Command::Dsa(DsaCommand::Keygen { out }) => {
            let keys = Dilithium2::keygen()?;
            write_key_pair(&out, &keys.public_key, &keys.secret_key)
        },
        Command::Dsa(DsaCommand::Sign { secret_key, message }) => {
            let signature = Dilithium2::sign(&read(&message)?, &read(&secret_key)?)?;
            println!("{}", slice_to_hex_string(&signature));
            Ok(())
        },
        Command::Dsa(DsaCommand::Verify { public_key, message, signature }) => {
            let signature = hex_to_vec(&signature)?;
            if Dilithium2::verify(&read(&message)?, &signature, &read(&public_key)?) {
                println!("valid");
                Ok(())
            } else {
                Err(CliError::InvalidSignature)
            }
        },
        Command::Address { signing_key, kem_key } => {
            let address = Address::from_encoded_keys(&read(&signing_key)?, &read(&kem_key)?)?;
            println!("{address}");
            Ok(())
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
