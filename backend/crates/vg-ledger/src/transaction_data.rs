//! BCS model of Sui `TransactionData`, enough to re-home gas payment.
//!
//! Only programmable transactions decode. Every other transaction kind is
//! rejected as an invalid response.

use crate::{LedgerError, LedgerErrorResult};

use vg_core::WalletAddress;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

type Address = [u8; 32];

/// `(object id, version, digest)`. The digest is BCS bytes with a length
/// prefix.
type ObjectRef = (Address, u64, Vec<u8>);

/// A decoded transaction whose gas owner can be replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData(Versioned);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Versioned {
    V1(TransactionDataV1),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TransactionDataV1 {
    kind: TransactionKind,
    sender: Address,
    gas_data: GasData,
    expiration: TransactionExpiration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GasData {
    payment: Vec<ObjectRef>,
    owner: Address,
    price: u64,
    budget: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TransactionExpiration {
    None,
    Epoch(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProgrammableTransaction {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum CallArg {
    Pure(Vec<u8>),
    Object(ObjectArg),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum ObjectArg {
    ImmOrOwnedObject(ObjectRef),
    SharedObject {
        id: Address,
        initial_shared_version: u64,
        mutable: bool,
    },
    Receiving(ObjectRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Command {
    MoveCall(Box<ProgrammableMoveCall>),
    TransferObjects(Vec<Argument>, Argument),
    SplitCoins(Argument, Vec<Argument>),
    MergeCoins(Argument, Vec<Argument>),
    Publish(Vec<Vec<u8>>, Vec<Address>),
    MakeMoveVec(Option<TypeTag>, Vec<Argument>),
    Upgrade(Vec<Vec<u8>>, Vec<Address>, Address, Argument),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProgrammableMoveCall {
    package: Address,
    module: String,
    function: String,
    type_arguments: Vec<TypeTag>,
    arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StructTag {
    address: Address,
    module: String,
    name: String,
    type_params: Vec<TypeTag>,
}

impl TransactionData {
    #[track_caller]
    pub fn from_base64(tx_bytes: &str) -> LedgerErrorResult<Self> {
        let raw = BASE64
            .decode(tx_bytes)
            .map_err(|e| LedgerError::invalid_response(format!("txBytes is not base64: {}", e)))?;
        Self::from_bcs(&raw)
    }

    #[track_caller]
    pub fn from_bcs(raw: &[u8]) -> LedgerErrorResult<Self> {
        Ok(bcs::from_bytes(raw)?)
    }

    pub fn to_bcs(&self) -> LedgerErrorResult<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }

    pub fn sender(&self) -> WalletAddress {
        WalletAddress::from_bytes(&self.body().sender)
    }

    pub fn gas_owner(&self) -> WalletAddress {
        WalletAddress::from_bytes(&self.body().gas_data.owner)
    }

    /// Object ids of the gas coins
    pub fn gas_payment(&self) -> Vec<WalletAddress> {
        self.body()
            .gas_data
            .payment
            .iter()
            .map(|(id, _, _)| WalletAddress::from_bytes(id))
            .collect()
    }

    pub fn gas_budget(&self) -> u64 {
        self.body().gas_data.budget
    }

    /// Make `owner` the gas payer. The payment coins must already be theirs.
    #[track_caller]
    pub fn set_gas_owner(&mut self, owner: &WalletAddress) -> LedgerErrorResult<()> {
        let Versioned::V1(body) = &mut self.0;
        body.gas_data.owner = address_bytes(owner)?;
        Ok(())
    }

    fn body(&self) -> &TransactionDataV1 {
        let Versioned::V1(body) = &self.0;
        body
    }
}

#[track_caller]
fn address_bytes(address: &WalletAddress) -> LedgerErrorResult<Address> {
    let mut bytes = [0u8; 32];
    let digits = address.as_str().strip_prefix("0x").unwrap_or(address.as_str());
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| LedgerError::invalid_response(format!("bad address {}: {}", address, e)))?;
    Ok(bytes)
}
