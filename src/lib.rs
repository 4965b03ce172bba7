pub mod error;
pub mod profile;
pub mod sign;

pub use error::{PatchError, Result};
pub use profile::{
    application_identifier, application_identifier_from_file, locate_and_decode_plist,
    strip_team_id,
};
pub use sign::{run_signer, signer_args, SignRequest};
