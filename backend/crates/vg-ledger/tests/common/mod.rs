#![allow(dead_code)]

//! Hand-assembled BCS `TransactionData` for ledger tests

use vg_core::WalletAddress;

pub const GAS_PRICE: u64 = 1_000;
pub const GAS_COIN_VERSION: u64 = 9;

/// Bytes trailing the gas owner: price, budget and a `None` expiration
pub const GAS_OWNER_TAIL: usize = 8 + 8 + 1;

pub fn address(raw: &str) -> [u8; 32] {
    let normalized = WalletAddress::parse(raw).unwrap();
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&normalized.as_str()[2..], &mut bytes).unwrap();
    bytes
}

/// `TransactionData::V1` holding one `cast_vote` Move call with a pure and a
/// shared-object input. Lengths stay below 128 so each ULEB128 is one byte.
pub fn vote_transaction(
    sender: [u8; 32],
    gas_owner: [u8; 32],
    gas_coin: [u8; 32],
    budget: u64,
) -> Vec<u8> {
    let mut out = vec![0x00, 0x00]; // V1, ProgrammableTransaction

    out.push(2); // inputs
    out.extend([0x00, 1, 0x07]); // Pure([7])
    out.extend([0x01, 0x01]); // Object(SharedObject)
    out.extend([0x0e; 32]);
    out.extend(5u64.to_le_bytes());
    out.push(1); // mutable

    out.push(1); // commands
    out.push(0x00); // MoveCall
    out.extend([0xbe; 32]);
    push_str(&mut out, "voting");
    push_str(&mut out, "cast_vote");
    out.push(0); // type arguments
    out.push(2); // arguments
    out.push(0x01);
    out.extend(0u16.to_le_bytes());
    out.push(0x01);
    out.extend(1u16.to_le_bytes());

    out.extend(sender);

    out.push(1); // gas payment
    out.extend(gas_coin);
    out.extend(GAS_COIN_VERSION.to_le_bytes());
    out.push(32);
    out.extend([0xd1; 32]);
    out.extend(gas_owner);
    out.extend(GAS_PRICE.to_le_bytes());
    out.extend(budget.to_le_bytes());

    out.push(0x00); // TransactionExpiration::None
    out
}

/// Offset of the gas owner within [`vote_transaction`] output
pub fn gas_owner_offset(tx: &[u8]) -> usize {
    tx.len() - GAS_OWNER_TAIL - 32
}

fn push_str(out: &mut Vec<u8>, value: &str) {
    out.push(value.len() as u8);
    out.extend(value.as_bytes());
}
