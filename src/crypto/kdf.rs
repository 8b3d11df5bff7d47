use std::convert::TryFrom;

use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Concatenation key derivation function (NIST SP 800-56A, RFC 7518 4.6.2)
/// producing a 256 bit key.
///
/// # Arguments
///
/// * `secret` - shared secret `Z` (`Ze || Zs` for ECDH-1PU)
///
/// * `alg` - `alg` header value, used as AlgorithmID
///
/// * `producer_info` - decoded `apu`
///
/// * `consumer_info` - decoded `apv`
///
/// * `tag` - content authentication tag, appended to SuppPubInfo by ECDH-1PU key wrapping modes
pub fn concat_kdf(
    secret: &[u8],
    alg: &str,
    producer_info: Option<&[u8]>,
    consumer_info: Option<&[u8]>,
    tag: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let mut value = get_length_and_input(alg.as_bytes())?;
    if let Some(vector) = producer_info {
        value.extend(get_length_and_input(vector)?);
    } else {
        value.extend(&[0, 0, 0, 0]);
    }
    if let Some(vector) = consumer_info {
        value.extend(get_length_and_input(vector)?);
    } else {
        value.extend(&[0, 0, 0, 0]);
    }
    // only key length 256 is supported
    value.extend(&[0, 0, 1, 0]);
    if let Some(tag) = tag {
        value.extend(get_length_and_input(tag)?);
    }

    // since our key length is 256 we only have to do one round
    let mut hasher = Sha256::new();
    hasher.update([0, 0, 0, 1]);
    hasher.update(secret);
    hasher.update(&value);
    Ok(hasher.finalize().to_vec())
}

/// Combines length of array and its its length into a vector.
fn get_length_and_input(vector: &[u8]) -> Result<Vec<u8>> {
    let mut collected: Vec<u8> = u32::try_from(vector.len())
        .map_err(|err| Error::Crypto(err.to_string()))?
        .to_be_bytes()
        .to_vec();
    collected.extend(vector);
    Ok(collected)
}
