use super::{
    jwe::{self, ParsedJwe},
    AuthCryptAlg,
};
use crate::{keys::Key, Error, Result};

/// ECDH-1PU encryption of `msg` from private `from_key` to all `to_keys`.
/// Returns the packed JWE, the recipient kids and the sender kid.
pub fn authcrypt(
    msg: &str,
    alg: &AuthCryptAlg,
    from_key: &Key,
    to_keys: &[Key],
) -> Result<(String, Vec<String>, String)> {
    let packed = jwe::encrypt(msg.as_bytes(), alg.alg(), alg.enc(), Some(from_key), to_keys)?;
    let to_kids = to_keys.iter().map(|key| key.id.clone()).collect();
    Ok((packed, to_kids, from_key.id.clone()))
}

/// Reverses [`authcrypt`]. `from_key` is the public key named by `skid`,
/// which [`ParsedJwe::verify_apu`] must have checked before.
pub fn auth_decrypt(
    parsed: &ParsedJwe,
    from_key: &Key,
    to_keys: &[Key],
    decrypt_by_all_keys: bool,
) -> Result<(Vec<u8>, Vec<String>)> {
    if parsed.protected.skid.as_deref() != Some(from_key.id.as_str()) {
        return Err(Error::Malformed(format!(
            "sender key '{}' is not the one named by skid",
            from_key.id
        )));
    }
    parsed.verify_apv()?;
    jwe::decrypt_by_keys(parsed, Some(from_key), to_keys, decrypt_by_all_keys)
}
