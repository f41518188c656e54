use super::ConstructionError;

/// Hash algorithms SPDX allows in a checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
    Md2,
    Md4,
    Md5,
    Md6,
    Adler32,
}

impl ChecksumAlgorithm {
    pub const ALL: [ChecksumAlgorithm; 17] = [
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha224,
        ChecksumAlgorithm::Sha256,
        ChecksumAlgorithm::Sha384,
        ChecksumAlgorithm::Sha512,
        ChecksumAlgorithm::Sha3_256,
        ChecksumAlgorithm::Sha3_384,
        ChecksumAlgorithm::Sha3_512,
        ChecksumAlgorithm::Blake2b256,
        ChecksumAlgorithm::Blake2b384,
        ChecksumAlgorithm::Blake2b512,
        ChecksumAlgorithm::Blake3,
        ChecksumAlgorithm::Md2,
        ChecksumAlgorithm::Md4,
        ChecksumAlgorithm::Md5,
        ChecksumAlgorithm::Md6,
        ChecksumAlgorithm::Adler32,
    ];

    /// Symbolic name, upper case with `_` separators.
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "SHA_1",
            ChecksumAlgorithm::Sha224 => "SHA_224",
            ChecksumAlgorithm::Sha256 => "SHA_256",
            ChecksumAlgorithm::Sha384 => "SHA_384",
            ChecksumAlgorithm::Sha512 => "SHA_512",
            ChecksumAlgorithm::Sha3_256 => "SHA3_256",
            ChecksumAlgorithm::Sha3_384 => "SHA3_384",
            ChecksumAlgorithm::Sha3_512 => "SHA3_512",
            ChecksumAlgorithm::Blake2b256 => "BLAKE2B_256",
            ChecksumAlgorithm::Blake2b384 => "BLAKE2B_384",
            ChecksumAlgorithm::Blake2b512 => "BLAKE2B_512",
            ChecksumAlgorithm::Blake3 => "BLAKE3",
            ChecksumAlgorithm::Md2 => "MD2",
            ChecksumAlgorithm::Md4 => "MD4",
            ChecksumAlgorithm::Md5 => "MD5",
            ChecksumAlgorithm::Md6 => "MD6",
            ChecksumAlgorithm::Adler32 => "ADLER32",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

impl Checksum {
    pub fn new(
        algorithm: ChecksumAlgorithm,
        value: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConstructionError::Empty("checksum value"));
        }
        Ok(Self { algorithm, value })
    }
}
