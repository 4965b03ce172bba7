use clap::Parser;
use ipapatch::{application_identifier_from_file, run_signer, PatchError, Result, SignRequest};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ipapatch")]
#[command(about = "Re-signs an .ipa with a new certificate and provisioning profile")]
#[command(version)]
struct Cli {
    /// Path to the .p12 certificate file
    #[arg(short, long)]
    certificate: PathBuf,

    /// Path to the .mobileprovision file
    #[arg(short, long)]
    mobileprovision: PathBuf,

    /// Password for the .p12 certificate
    #[arg(short, long)]
    password: String,

    /// Path to the .ipa file to be patched
    #[arg(short, long)]
    ipa: PathBuf,

    /// Output path (defaults to <ipa-stem>_patched.ipa in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Signer executable to invoke
    #[arg(long, default_value = "zsign")]
    signer: PathBuf,

    /// The compression level of the output ipa (0-9)
    #[arg(short = 'z', long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=9))]
    compress: u32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("[!] {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    validate_file(&cli.certificate, "p12")?;
    validate_file(&cli.mobileprovision, "mobileprovision")?;
    validate_file(&cli.ipa, "ipa")?;

    let output = match cli.output {
        Some(o) => o,
        None => default_output(&cli.ipa)?,
    };

    let bundle_id = application_identifier_from_file(&cli.mobileprovision)?;
    println!("[*] bundle id: {}", bundle_id);

    run_signer(&SignRequest {
        signer: cli.signer,
        certificate: cli.certificate,
        mobileprovision: cli.mobileprovision,
        password: cli.password,
        bundle_id,
        output: output.clone(),
        ipa: cli.ipa,
        compression_level: cli.compress,
    })?;

    println!("[*] successfully patched IPA file as '{}'", output.display());

    Ok(())
}

fn validate_file(path: &Path, extension: &str) -> Result<()> {
    if !path.is_file() {
        return Err(PatchError::FileNotFound(path.to_path_buf()));
    }
    if path.extension().map(|e| e != extension).unwrap_or(true) {
        return Err(PatchError::InvalidInput(format!(
            "{} must end with .{}",
            path.display(),
            extension
        )));
    }
    Ok(())
}

fn default_output(ipa: &Path) -> Result<PathBuf> {
    let stem = ipa
        .file_stem()
        .ok_or_else(|| PatchError::InvalidInput("Invalid ipa path".to_string()))?;
    let mut name = stem.to_os_string();
    name.push("_patched.ipa");
    Ok(PathBuf::from(name))
}
