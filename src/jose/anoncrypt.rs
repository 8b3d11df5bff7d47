use super::{
    jwe::{self, ParsedJwe},
    AnonCryptAlg,
};
use crate::{keys::Key, Error, Result};

/// ECDH-ES encryption of `msg` for all `to_keys`.
/// Returns the packed JWE and the kids it was encrypted for.
pub fn anoncrypt(msg: &str, alg: &AnonCryptAlg, to_keys: &[Key]) -> Result<(String, Vec<String>)> {
    let packed = jwe::encrypt(msg.as_bytes(), alg.alg(), alg.enc(), None, to_keys)?;
    let to_kids = to_keys.iter().map(|key| key.id.clone()).collect();
    Ok((packed, to_kids))
}

/// Reverses [`anoncrypt`] with the private `to_keys` we hold.
pub fn anon_decrypt(
    parsed: &ParsedJwe,
    to_keys: &[Key],
    decrypt_by_all_keys: bool,
) -> Result<(Vec<u8>, Vec<String>)> {
    if parsed.protected.skid.is_some() || parsed.protected.apu.is_some() {
        return Err(Error::Malformed(
            "anoncrypt message must not identify the sender".into(),
        ));
    }
    parsed.verify_apv()?;
    jwe::decrypt_by_keys(parsed, None, to_keys, decrypt_by_all_keys)
}
