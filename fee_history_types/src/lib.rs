#[cfg(test)]
mod tests;

use candid::types::{Serializer, Type};
use candid::{CandidType, Nat};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod lifecycle;
mod request;
mod response;

pub use lifecycle::{FeeMarketArgs, InstallArgs, LogFilter, RegexString};
pub use request::FeeHistoryArgs;
pub use response::FeeHistory;

/// Upper bound of the block range selected by a fee history request.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Deserialize, Default)]
pub enum BlockTag {
    #[default]
    Latest,
    Finalized,
    Safe,
    Earliest,
    Pending,
    Number(Nat256),
}

impl From<u64> for BlockTag {
    fn from(value: u64) -> Self {
        BlockTag::Number(Nat256::from(value))
    }
}

/// A `Nat` that is guaranteed to fit in 256 bits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "candid::Nat", into = "candid::Nat")]
pub struct Nat256(Nat);

impl Nat256 {
    pub fn into_be_bytes(self) -> [u8; 32] {
        let value_bytes = self.0 .0.to_bytes_be();
        let mut value_u256 = [0u8; 32];
        // the constructor rejects anything wider than 32 bytes
        value_u256[32 - value_bytes.len()..].copy_from_slice(&value_bytes);
        value_u256
    }

    pub fn from_be_bytes(value: [u8; 32]) -> Self {
        Self(Nat::from(BigUint::from_bytes_be(&value)))
    }
}

impl AsRef<Nat> for Nat256 {
    fn as_ref(&self) -> &Nat {
        &self.0
    }
}

impl Display for Nat256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl CandidType for Nat256 {
    fn _ty() -> Type {
        Nat::_ty()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_nat(self.as_ref())
    }
}

impl TryFrom<Nat> for Nat256 {
    type Error = String;

    fn try_from(value: Nat) -> Result<Self, Self::Error> {
        if value.0.to_bytes_le().len() > 32 {
            Err("Nat does not fit in a U256".to_string())
        } else {
            Ok(Nat256(value))
        }
    }
}

impl From<Nat256> for Nat {
    fn from(value: Nat256) -> Self {
        value.0
    }
}

macro_rules! impl_from_primitive {
    ($($t: ty)*) => ($(
        impl From<$t> for Nat256 {
            #[inline]
            fn from(v: $t) -> Self { Nat256(Nat::from(v)) }
        }
    )*)
}
// all the types below are guaranteed to fit in 256 bits
impl_from_primitive!( usize u8 u16 u32 u64 u128 );

/// Fixed-size byte array rendered as a `0x`-prefixed hex string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EthereumHexString<const N: usize>([u8; N]);

impl<const N: usize> EthereumHexString<N> {
    pub const fn new(value: [u8; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> Display for EthereumHexString<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("0x")?;
        f.write_str(&hex::encode(self.0))
    }
}

impl<const N: usize> FromStr for EthereumHexString<N> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix("0x")
            .ok_or_else(|| "Ethereum hex string doesn't start with 0x".to_string())?;
        let expected_num_hex_chars = N * 2;
        if s.len() != expected_num_hex_chars {
            return Err(format!(
                "Invalid hash: expected {} characters, got {}",
                expected_num_hex_chars,
                s.len()
            ));
        }
        let mut bytes = [0u8; N];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| format!("Invalid hex string: {}", e))?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> TryFrom<String> for EthereumHexString<N> {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<const N: usize> From<EthereumHexString<N>> for String {
    fn from(value: EthereumHexString<N>) -> Self {
        value.to_string()
    }
}

/// Transaction or block hash.
pub type Hash = EthereumHexString<32>;
