use crate::chain::{BlockHeaderView, BlockchainQueries};
use crate::error::InvalidRequestError;
use crate::numeric::BlockNumber;

/// Inclusive range of block numbers covered by a fee history request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    oldest: BlockNumber,
    newest: BlockNumber,
}

impl BlockRange {
    /// Range of `block_count` blocks ending at `highest_block`, truncated at genesis.
    pub fn resolve(
        block_count: u64,
        highest_block: BlockNumber,
        chain_head: BlockNumber,
    ) -> Result<Self, InvalidRequestError> {
        if highest_block > chain_head {
            return Err(InvalidRequestError::BlockAfterChainHead {
                requested: highest_block,
                chain_head,
            });
        }
        let oldest = highest_block.saturating_sub(BlockNumber::from(block_count.saturating_sub(1)));
        Ok(Self {
            oldest,
            newest: highest_block,
        })
    }

    pub fn oldest(&self) -> BlockNumber {
        self.oldest
    }

    pub fn newest(&self) -> BlockNumber {
        self.newest
    }

    /// The block right after the range, if representable.
    pub fn next_block(&self) -> Option<BlockNumber> {
        self.newest.checked_increment()
    }

    /// Block numbers of the range in ascending order.
    pub fn block_numbers(&self) -> impl Iterator<Item = BlockNumber> {
        let newest = self.newest;
        std::iter::successors(Some(self.oldest), move |number| {
            number.checked_increment().filter(|next| *next <= newest)
        })
    }

    /// Headers of the blocks of the range that exist in the chain. Missing ones are skipped.
    pub fn headers<C: BlockchainQueries>(&self, chain: &C) -> Vec<BlockHeaderView> {
        self.block_numbers()
            .filter_map(|number| chain.block_header(number))
            .collect()
    }
}
