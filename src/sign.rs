use crate::error::{PatchError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Everything the external signer needs for one run.
pub struct SignRequest {
    /// Signer executable, resolved through PATH if not absolute.
    pub signer: PathBuf,
    pub certificate: PathBuf,
    pub mobileprovision: PathBuf,
    pub password: String,
    pub bundle_id: String,
    pub output: PathBuf,
    pub ipa: PathBuf,
    pub compression_level: u32,
}

/// Build the zsign argument vector:
/// `-z <level> -k <cert> -m <profile> -p <password> -b <bundle-id> -o <out> <ipa>`
pub fn signer_args(req: &SignRequest) -> Vec<OsString> {
    vec![
        OsString::from("-z"),
        OsString::from(req.compression_level.to_string()),
        OsString::from("-k"),
        req.certificate.clone().into_os_string(),
        OsString::from("-m"),
        req.mobileprovision.clone().into_os_string(),
        OsString::from("-p"),
        OsString::from(&req.password),
        OsString::from("-b"),
        OsString::from(&req.bundle_id),
        OsString::from("-o"),
        req.output.clone().into_os_string(),
        req.ipa.clone().into_os_string(),
    ]
}

/// Run the external signer, blocking until it exits.
///
/// A non-zero exit surfaces the signer's stderr verbatim. The output IPA is
/// entirely the signer's responsibility; nothing is written on failure.
pub fn run_signer(req: &SignRequest) -> Result<()> {
    let output = Command::new(&req.signer)
        .args(signer_args(req))
        .output()
        .map_err(|e| {
            PatchError::Signer(format!("could not run {}: {}", req.signer.display(), e))
        })?;

    if !output.status.success() {
        return Err(PatchError::Signer(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    Ok(())
}
