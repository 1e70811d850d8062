/// Produces the `sign` token the vendor requires next to a serialized payload.
pub trait Signer: Send + Sync + 'static {
    fn sign(&self, payload: &str) -> String;
}

/// Digest-based signer: `zzb` followed by the md5 of the payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigestSigner;

impl Signer for DigestSigner {
    fn sign(&self, payload: &str) -> String {
        format!("zzb{:x}", md5::compute(payload))
    }
}
