//! Read-only views of finalized chain data and the storage interface they are fetched through.


use crate::numeric::{BlockNumber, GasAmount, WeiPerGas};
use fee_history_types::Hash;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Summary of a block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeaderView {
    pub number: BlockNumber,
    /// `None` for blocks produced before the fee market was activated.
    #[serde(rename = "baseFeePerGas")]
    pub base_fee_per_gas: Option<WeiPerGas>,
    #[serde(rename = "gasUsed")]
    pub gas_used: GasAmount,
    #[serde(rename = "gasLimit")]
    pub gas_limit: GasAmount,
    pub hash: Hash,
}

/// Fee parameters of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionFees {
    /// Flat gas price, the whole amount above the base fee goes to the block producer.
    Legacy {
        #[serde(rename = "gasPrice")]
        gas_price: WeiPerGas,
    },
    /// Fee-market transaction (EIP-1559).
    Eip1559 {
        #[serde(rename = "maxFeePerGas")]
        max_fee_per_gas: WeiPerGas,
        #[serde(rename = "maxPriorityFeePerGas")]
        max_priority_fee_per_gas: WeiPerGas,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub hash: Hash,
    pub fees: TransactionFees,
}

impl TransactionView {
    /// Fee per gas paid to the block producer when included in a block with the given base fee.
    ///
    /// Without a base fee the flat gas price is returned; fee-market transactions have none,
    /// so they are worth zero there. A fee cap below the base fee saturates to zero.
    pub fn effective_priority_fee_per_gas(&self, base_fee: Option<WeiPerGas>) -> WeiPerGas {
        match (&self.fees, base_fee) {
            (TransactionFees::Legacy { gas_price }, None) => *gas_price,
            (TransactionFees::Eip1559 { .. }, None) => WeiPerGas::ZERO,
            (TransactionFees::Legacy { gas_price }, Some(base_fee)) => {
                gas_price.saturating_sub(base_fee)
            }
            (
                TransactionFees::Eip1559 {
                    max_fee_per_gas,
                    max_priority_fee_per_gas,
                },
                Some(base_fee),
            ) => (*max_priority_fee_per_gas).min(max_fee_per_gas.saturating_sub(base_fee)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptView {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: Hash,
    /// The amount of gas used by this specific transaction alone.
    #[serde(rename = "gasUsed")]
    pub gas_used: GasAmount,
}

/// A block header together with its transactions, in block order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub header: BlockHeaderView,
    pub transactions: Vec<TransactionView>,
}

/// Lookups into finalized chain storage.
///
/// Implementations may block on I/O but must not mutate chain state observed by the caller.
pub trait BlockchainQueries {
    fn chain_head_block_number(&self) -> BlockNumber;

    fn block_header(&self, number: BlockNumber) -> Option<BlockHeaderView>;

    fn block_by_number(&self, number: BlockNumber) -> Option<BlockView>;

    fn transaction_receipt(&self, transaction_hash: &Hash) -> Option<ReceiptView>;
}

impl<T: BlockchainQueries + ?Sized> BlockchainQueries for &T {
    fn chain_head_block_number(&self) -> BlockNumber {
        (**self).chain_head_block_number()
    }

    fn block_header(&self, number: BlockNumber) -> Option<BlockHeaderView> {
        (**self).block_header(number)
    }

    fn block_by_number(&self, number: BlockNumber) -> Option<BlockView> {
        (**self).block_by_number(number)
    }

    fn transaction_receipt(&self, transaction_hash: &Hash) -> Option<ReceiptView> {
        (**self).transaction_receipt(transaction_hash)
    }
}

/// Chain storage held in memory.
///
/// The chain head is tracked separately from the stored blocks, so that gaps below the head
/// can be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryChain {
    chain_head: BlockNumber,
    blocks: BTreeMap<BlockNumber, BlockView>,
    receipts: HashMap<Hash, ReceiptView>,
}

impl InMemoryChain {
    pub fn new(chain_head: BlockNumber) -> Self {
        Self {
            chain_head,
            ..Default::default()
        }
    }

    pub fn set_chain_head(&mut self, chain_head: BlockNumber) {
        self.chain_head = chain_head;
    }

    /// Stores `block`, replacing any block with the same number.
    pub fn insert_block(&mut self, block: BlockView) {
        self.blocks.insert(block.header.number, block);
    }

    pub fn insert_receipt(&mut self, receipt: ReceiptView) {
        self.receipts.insert(receipt.transaction_hash.clone(), receipt);
    }
}

impl BlockchainQueries for InMemoryChain {
    fn chain_head_block_number(&self) -> BlockNumber {
        self.chain_head
    }

    fn block_header(&self, number: BlockNumber) -> Option<BlockHeaderView> {
        self.blocks.get(&number).map(|block| block.header.clone())
    }

    fn block_by_number(&self, number: BlockNumber) -> Option<BlockView> {
        self.blocks.get(&number).cloned()
    }

    fn transaction_receipt(&self, transaction_hash: &Hash) -> Option<ReceiptView> {
        self.receipts.get(transaction_hash).cloned()
    }
}
